//! The active falling piece and the queued next piece.

use blockfall_types::ColorId;

use crate::board::Board;
use crate::shapes::ShapeGrid;

/// The currently falling piece: a (possibly rotated) shape matrix, a palette
/// color, and the board-relative anchor of the matrix's top-left cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePiece {
    pub grid: ShapeGrid,
    pub color: ColorId,
    pub x: i16,
    pub y: i16,
}

impl ActivePiece {
    /// Whether the piece fits at its current anchor.
    pub fn fits(&self, board: &Board) -> bool {
        board.placement_fits(&self.grid, self.x, self.y)
    }

    /// The piece shifted by (dx, dy), same matrix and color.
    pub fn translated(&self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self.clone()
        }
    }

    /// The piece rotated 90 degrees clockwise at the same anchor.
    pub fn rotated(&self) -> Self {
        Self {
            grid: self.grid.rotated(),
            ..self.clone()
        }
    }
}

/// A shape/color pair drawn ahead of time, shown as the preview. It becomes
/// the new [`ActivePiece`] when the current one locks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextPiece {
    pub grid: ShapeGrid,
    pub color: ColorId,
}
