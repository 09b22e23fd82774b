//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`blockfall_types::Intent`] values. The
//! engine never depends on any windowing or event-dispatch runtime; this
//! crate is the only place raw key events exist.

pub mod map;

pub use blockfall_types as types;

pub use map::{map_key_event, should_quit};
