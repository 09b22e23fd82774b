//! Core game logic - pure, deterministic, and testable.
//!
//! This crate contains all the game rules and state transitions. It has
//! **zero dependencies** on UI, timers, or I/O, which keeps it:
//!
//! - **Deterministic**: a seeded or scripted piece source produces an
//!   identical game every run
//! - **Testable**: every rule is exercisable without a terminal harness
//! - **Portable**: runs headless as easily as behind a renderer
//!
//! # Module structure
//!
//! - [`shapes`]: the 7-entry shape catalog and matrix rotation
//! - [`board`]: grid storage, placement validity, row clearing
//! - [`piece`]: the active falling piece and the queued next piece
//! - [`rng`]: uniform and scripted piece sources
//! - [`scoring`]: line points, level boundaries, gravity intervals
//! - [`session`]: the aggregate session value (board + pieces + score)
//! - [`engine`]: the reducer - `apply(&session, intent) -> session`
//! - [`snapshot`]: read-only state for view layers
//!
//! # Example
//!
//! ```
//! use blockfall_core::{engine, GameSession, PieceSource};
//! use blockfall_types::{GameConfig, Intent};
//!
//! let session = GameSession::new(GameConfig::default(), PieceSource::seeded(7));
//! let session = engine::apply(&session, Intent::MoveLeft);
//! let session = engine::apply(&session, Intent::HardDrop);
//! assert!(!session.game_over());
//! ```

pub mod board;
pub mod engine;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

pub use board::Board;
pub use piece::{ActivePiece, NextPiece};
pub use rng::{PieceSource, SimpleRng};
pub use session::GameSession;
pub use shapes::{ShapeGrid, ShapeKind};
pub use snapshot::{GameSnapshot, PieceSnapshot};
