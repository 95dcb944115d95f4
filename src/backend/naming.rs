//! Rendered identifiers per output mode.
//!
//! The surface language allows shadowing, so flattened targets need a collision-free spelling.
//! Surface identifiers cannot contain `_`, which keeps every rendered form disjoint from user
//! names and from the emitters' own temporaries (`ret`, `_x_N`).

use crate::frontend::ast::{DeclId, NameRef};

use super::RenderMode;

/// Name a declaration is given in `mode`.
pub fn decl_name(name: &str, id: DeclId, mode: RenderMode) -> String {
    match mode {
        RenderMode::Canonical => name.to_string(),
        RenderMode::C => format!("_{name}"),
        RenderMode::Python | RenderMode::Execute => format!("{name}_{}", id.ordinal()),
    }
}

/// C temporary holding the initializer of a declaration that reads the name it shadows.
pub fn c_init_temp(name: &str, id: DeclId) -> String {
    format!("_{name}_{}", id.ordinal())
}

/// Name a reference is given in `mode`; unresolved references keep their surface name.
pub fn ref_name(name_ref: &NameRef, mode: RenderMode) -> String {
    match name_ref.decl {
        Some(id) => decl_name(&name_ref.name, id, mode),
        None => name_ref.name.clone(),
    }
}
