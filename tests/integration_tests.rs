//! Integration tests for the While compiler pipeline

mod common;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use whilec::backend::{self, Output, RenderMode, Value};
use whilec::diagnostics::{CompileError, ErrorKind};
use whilec::frontend::{parser, typechecker};
use whilec::{FormatConfig, ast::Program};

/// Helper to run the frontend on source text
fn compile(source: &str) -> Result<Program, Vec<CompileError>> {
    let mut ast = parser::parse(source)?;
    typechecker::check(&mut ast)?;
    Ok(ast)
}

fn run(source: &str) -> Value {
    let ast = compile(source).unwrap_or_else(|errs| panic!("{source:?} failed to compile: {errs:?}"));
    backend::execute(&ast).unwrap()
}

fn fixtures(kind: &str) -> Vec<PathBuf> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(kind);
    let mut files: Vec<PathBuf> = fs::read_dir(&dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p.extension().is_some_and(|e| e == "while"))
        .collect();
    files.sort();
    files
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_loop_executes_to_three() {
    assert_eq!(run("int x = 1; while x < 3 { x = x + 1; } return x;"), Value::Int(3));
}

#[test]
fn test_branch_locals_do_not_collide() {
    let src = "bool b = true; int r = 0; if b { int y = 1; r = y; } else { int y = 2; r = y; } return r;";
    let ast = compile(src).unwrap();
    let ordinals: Vec<u32> = ast.declarations().iter().map(|d| d.id.ordinal()).collect();
    assert_eq!(ordinals, vec![0, 1, 2, 3]);
    assert_eq!(backend::execute(&ast).unwrap(), Value::Int(1));
}

#[test]
fn test_bool_assigned_to_int_is_one_type_error() {
    let errs = compile("int z = 5; z = true; return z;").unwrap_err();
    assert_eq!(errs.len(), 1);
    assert_eq!(errs[0].kind, ErrorKind::Type);
    assert!(errs[0].message.contains("'bool'") && errs[0].message.contains("'int'"));
}

#[test]
fn test_same_scope_redeclaration_points_at_both() {
    let errs = compile("int w = 1; int w = 2; return w;").unwrap_err();
    assert_eq!(errs.len(), 1);
    assert_eq!(errs[0].kind, ErrorKind::Name);
    assert_ne!(errs[0].span, errs[0].labels[0].span);
}

#[test]
fn test_tuple_projection_scenario() {
    let ast = compile("(int,bool) t = (1,true); int i = t(0); return i;").unwrap();
    let decls = ast.declarations();
    assert_eq!(decls[0].ty.node.to_string(), "(int, bool)");
    assert_eq!(decls[1].init.ty().to_string(), "int");
    assert_eq!(backend::execute(&ast).unwrap(), Value::Int(1));
}

// ============================================================================
// Fixtures
// ============================================================================

/// Test that all valid fixtures check and evaluate to the expected value
#[test]
fn test_valid_fixtures() {
    let expected = [
        ("branches.while", "1"),
        ("factorial.while", "120"),
        ("fibonacci.while", "55"),
        ("loop.while", "3"),
        ("nested_tuples.while", "(true, -6)"),
        ("projection.while", "1"),
        ("shadowing.while", "1"),
    ];
    let files = fixtures("valid");
    assert_eq!(files.len(), expected.len());
    for path in files {
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        let source = fs::read_to_string(&path).unwrap();
        let value = run(&source);
        let (_, want) = expected.iter().find(|(n, _)| *n == name).unwrap();
        assert_eq!(value.to_string(), *want, "{name}");
    }
}

/// Valid fixtures are written in canonical layout apart from expression parentheses
#[test]
fn test_valid_fixtures_survive_formatting() {
    for path in fixtures("valid") {
        let source = fs::read_to_string(&path).unwrap();
        let formatted = whilec::format_source(&source).unwrap();
        assert_eq!(run(&formatted), run(&source), "{}", path.display());
        assert!(whilec::check_formatted(&formatted).unwrap());
    }
}

/// Test that invalid fixtures produce errors
#[test]
fn test_invalid_fixtures() {
    let files = fixtures("invalid");
    assert!(!files.is_empty());
    for path in files {
        let source = fs::read_to_string(&path).unwrap();
        let errs = compile(&source).expect_err(&path.display().to_string());
        assert!(!errs.is_empty());
        let rendered = whilec::diagnostics::render("fixture.while", &source, &errs);
        assert!(rendered.contains("fixture.while"), "{rendered}");
    }
}

// ============================================================================
// Backend
// ============================================================================

#[test]
fn test_run_dispatches_on_mode() {
    let ast = compile("bool b = 1 < 2; return b;").unwrap();
    let config = FormatConfig::default();
    assert_eq!(
        backend::run(&ast, RenderMode::Execute, &config).unwrap(),
        Output::Value(Value::Bool(true))
    );
    let Output::Text(py) = backend::run(&ast, RenderMode::Python, &config).unwrap() else {
        panic!("expected text");
    };
    assert!(py.ends_with("print(\"true\" if b_0 else \"false\")\n"));
}

#[test]
fn test_canonical_round_trip_preserves_tree() {
    let src = "((int) bool) t = ((1,), true); int x = 0; \
               while t(1) and x < 4 { int k = t(0)(0); x = x + k * 2; \
               { int x = -k; if not (x < 0) { x = 1; } else { x = x * -1; } } } \
               return (x, t);";
    let mut ast = compile(src).unwrap();
    let text = backend::render(&ast, RenderMode::Canonical, &FormatConfig::default());
    let mut again = compile(&text).unwrap();
    assert_eq!(backend::execute(&again).unwrap(), backend::execute(&ast).unwrap());

    common::erase_spans(&mut ast);
    common::erase_spans(&mut again);
    assert_eq!(ast, again, "{text}");
}

#[test]
fn test_tree_comparison_sees_shape_changes() {
    let mut grouped = compile("int a = 1; return (a + 2) * 3;").unwrap();
    let mut flat = compile("int a = 1; return a + 2 * 3;").unwrap();
    common::erase_spans(&mut grouped);
    common::erase_spans(&mut flat);
    assert_ne!(grouped, flat);
}

// ============================================================================
// CLI
// ============================================================================

fn whilec() -> Command {
    Command::new(env!("CARGO_BIN_EXE_whilec"))
}

fn fixture(kind: &str, name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(kind).join(name)
}

#[test]
fn test_cli_run_prints_value() {
    let out = whilec().arg("run").arg(fixture("valid", "loop.while")).output().unwrap();
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "3\n");

    let out = whilec().args(["run", "-c", "return (1, not true);"]).output().unwrap();
    assert_eq!(String::from_utf8_lossy(&out.stdout), "(1, false)\n");
}

#[test]
fn test_cli_check_json_reports_diagnostics() {
    let out = whilec()
        .arg("check")
        .arg(fixture("invalid", "redeclaration.while"))
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["ok"], false);
    assert_eq!(json["diagnostics"][0]["code"], "while::name");
    assert_eq!(json["diagnostics"][0]["span"]["start"]["row"], 2);
}

#[test]
fn test_cli_human_diagnostics_go_to_stderr() {
    let out = whilec().arg(fixture("invalid", "assign_mismatch.while")).output().unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("right-hand side of assignment statement"), "{stderr}");
}

#[test]
fn test_cli_emit_c() {
    let out = whilec()
        .args(["emit", "--target", "c"])
        .arg(fixture("valid", "loop.while"))
        .output()
        .unwrap();
    assert!(out.status.success());
    let text = String::from_utf8_lossy(&out.stdout);
    assert!(text.starts_with("#include <stdbool.h>\n"));
    assert!(text.contains("printf(\"%i\\n\", _x);"));
}
