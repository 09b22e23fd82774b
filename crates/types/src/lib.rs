//! Shared data types for the blockfall workspace.
//!
//! This crate defines the fundamental types used throughout the application.
//! All of them are pure data with no external dependencies, so they are usable
//! in any context (engine, input mapping, terminal rendering, tests).
//!
//! # Board dimensions
//!
//! The default playfield is 12 columns by 20 rows, indexed with (x, y) where
//! x runs left to right and y runs top to bottom. Dimensions are part of
//! [`GameConfig`] and are fixed for the lifetime of a session.
//!
//! # Gravity timing
//!
//! Gravity speed is level-driven: the interval between gravity ticks is
//! `max(MIN_GRAVITY_MS, BASE_GRAVITY_MS - level * GRAVITY_STEP_MS)`,
//! recomputed whenever the level changes.

/// Default board height in rows.
pub const DEFAULT_ROWS: u8 = 20;

/// Default board width in columns.
pub const DEFAULT_COLS: u8 = 12;

/// Gravity interval at level 0 (never used directly; level starts at 1).
pub const BASE_GRAVITY_MS: u32 = 1000;

/// Lower bound on the gravity interval.
pub const MIN_GRAVITY_MS: u32 = 100;

/// How much faster gravity gets per level.
pub const GRAVITY_STEP_MS: u32 = 100;

/// Points needed to cross a level boundary.
pub const LEVEL_STEP_POINTS: u32 = 1000;

/// Base points per cleared-line count, before the level multiplier.
/// Index by number of lines cleared (0..=4); a quad pays 800, not 400.
pub const LINE_SCORES: [u32; 5] = [0, 100, 200, 300, 800];

/// Number of entries in the color palette.
pub const PALETTE_SIZE: u8 = 12;

/// Index into the color palette.
pub type ColorId = u8;

/// Cell on the board (`None` = empty, `Some` = locked with a palette color).
pub type Cell = Option<ColorId>;

/// Player/driver intents accepted by the engine.
///
/// `Tick` is issued by the gravity clock; the rest come from the input
/// mapper. Every intent produces a new session snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    Rotate,
    Tick,
    Reset,
}

impl Intent {
    /// Parse an intent from its wire/debug name (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Intent::MoveLeft),
            "moveright" => Some(Intent::MoveRight),
            "softdrop" => Some(Intent::SoftDrop),
            "harddrop" => Some(Intent::HardDrop),
            "rotate" => Some(Intent::Rotate),
            "tick" => Some(Intent::Tick),
            "reset" => Some(Intent::Reset),
            _ => None,
        }
    }

    /// Canonical camel-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::MoveLeft => "moveLeft",
            Intent::MoveRight => "moveRight",
            Intent::SoftDrop => "softDrop",
            Intent::HardDrop => "hardDrop",
            Intent::Rotate => "rotate",
            Intent::Tick => "tick",
            Intent::Reset => "reset",
        }
    }
}

/// Session configuration, fixed at creation time.
///
/// The engine never mutates this; `Reset` reuses the same configuration for
/// the replacement session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: u8,
    pub cols: u8,
    pub base_gravity_ms: u32,
    pub min_gravity_ms: u32,
    pub gravity_step_ms: u32,
    pub level_step_points: u32,
    pub line_scores: [u32; 5],
    pub palette_size: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            base_gravity_ms: BASE_GRAVITY_MS,
            min_gravity_ms: MIN_GRAVITY_MS,
            gravity_step_ms: GRAVITY_STEP_MS,
            level_step_points: LEVEL_STEP_POINTS,
            line_scores: LINE_SCORES,
            palette_size: PALETTE_SIZE,
        }
    }
}
