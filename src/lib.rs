//! Facade crate re-exporting the workspace members.
//!
//! Integration tests and benches depend on this crate; the binary in
//! `main.rs` wires the same pieces into an interactive game loop.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
