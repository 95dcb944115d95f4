//! Provide the canonical language vocabulary for the While compiler and its tooling.
//!
//! This crate is intentionally tiny and dependency-free. Both the syntax frontend and the
//! renderers consult it for spellings and precedence so that none of them carries its own copy.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global state, and no AST types.

pub mod lang;
