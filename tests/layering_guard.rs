//! Layering guardrails for the workspace crates.
//!
//! `while_core` is the vocabulary layer and must stay dependency-free; `while_syntax` sits on top
//! of it and must never depend on the compiler crate. These tests scan the manifests' `[dependencies]`
//! tables and fail if either rule is broken.

/// Dependency names listed in the `[dependencies]` table of a manifest.
fn dependencies(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut deps = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }
        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }
        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            deps.push(name.trim().to_string());
        }
    }

    deps
}

#[test]
fn core_vocabulary_has_no_dependencies() {
    let deps = dependencies(include_str!("../crates/while_core/Cargo.toml"));
    assert!(deps.is_empty(), "`while_core` must stay dependency-free, found {deps:?}");
}

#[test]
fn syntax_crate_does_not_depend_on_compiler() {
    let deps = dependencies(include_str!("../crates/while_syntax/Cargo.toml"));
    assert!(deps.contains(&"while_core".to_string()));
    assert!(
        !deps.iter().any(|d| d == "whilec"),
        "`while_syntax` must not depend on the compiler crate"
    );
}

#[test]
fn compiler_uses_shared_frontend_crates() {
    let deps = dependencies(include_str!("../Cargo.toml"));
    assert!(deps.contains(&"while_core".to_string()));
    assert!(deps.contains(&"while_syntax".to_string()));
}
