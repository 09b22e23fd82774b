//! Read-only snapshots consumed by view layers.
//!
//! A snapshot is an owned copy of everything a renderer needs: board
//! dimensions and cells, the active piece, the next-piece preview, score,
//! level, and the game-over flag. View code never touches the live session.

use blockfall_types::{Cell, ColorId};

use crate::shapes::ShapeGrid;

/// The active piece as seen by a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceSnapshot {
    pub grid: ShapeGrid,
    pub color: ColorId,
    pub x: i16,
    pub y: i16,
}

/// Owned read-only copy of the session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub rows: u8,
    pub cols: u8,
    /// Row-major board cells, `rows * cols` entries.
    pub cells: Vec<Cell>,
    pub active: PieceSnapshot,
    pub next_grid: ShapeGrid,
    pub next_color: ColorId,
    pub score: u32,
    pub level: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Board cell at (x, y), or `None` when out of bounds.
    pub fn cell(&self, x: i16, y: i16) -> Option<Cell> {
        if x < 0 || x >= self.cols as i16 || y < 0 || y >= self.rows as i16 {
            return None;
        }
        Some(self.cells[y as usize * self.cols as usize + x as usize])
    }
}
