//! Terminal rendering layer.
//!
//! A small, game-oriented pipeline: the view maps an engine snapshot into a
//! framebuffer of styled character cells, and the renderer flushes that
//! framebuffer to the terminal. The view is pure and unit-testable; only the
//! renderer touches I/O.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{palette_color, GameView, Viewport};
pub use renderer::TerminalRenderer;
