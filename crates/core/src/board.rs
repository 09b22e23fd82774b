//! Board storage, placement validity, and row clearing.
//!
//! The board is a `rows x cols` grid where each cell is empty or holds the
//! color of the piece that locked there. Storage is a flat row-major `Vec`;
//! dimensions are fixed at construction.
//!
//! Coordinates are (x, y) with x in `0..cols` left to right and y in
//! `0..rows` top to bottom. Negative y is "above the visible board" and is
//! legal for in-flight pieces (see [`Board::placement_fits`]).

use blockfall_types::{Cell, ColorId};

use crate::shapes::ShapeGrid;

/// The playfield grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: u8,
    cols: u8,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board with the given dimensions.
    pub fn new(rows: u8, cols: u8) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows as usize * cols as usize],
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= self.cols as i16 || y < 0 || y >= self.rows as i16 {
            return None;
        }
        Some(y as usize * self.cols as usize + x as usize)
    }

    /// Cell at (x, y), or `None` when out of bounds.
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Set the cell at (x, y). Returns false when out of bounds.
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether (x, y) is inside the grid and holds a locked cell.
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Whether the shape fits at the given anchor.
    ///
    /// An occupied shape cell at absolute (x, y) is rejected when x is
    /// outside `0..cols`, when y >= rows (below the floor), or when y >= 0
    /// and the board cell is already occupied. Cells with y < 0 are only
    /// checked laterally: a tall piece may spawn with its top rows above
    /// the visible board without colliding.
    pub fn placement_fits(&self, shape: &ShapeGrid, anchor_x: i16, anchor_y: i16) -> bool {
        for (dx, dy) in shape.filled_offsets() {
            let x = anchor_x + dx;
            let y = anchor_y + dy;
            if x < 0 || x >= self.cols as i16 {
                return false;
            }
            if y >= self.rows as i16 {
                return false;
            }
            if y >= 0 && self.is_occupied(x, y) {
                return false;
            }
        }
        true
    }

    /// Write a shape's occupied cells at the anchor with the given color.
    ///
    /// Callers must have validated the placement; offsets that fall outside
    /// the grid are ignored.
    pub fn write_shape(&mut self, shape: &ShapeGrid, anchor_x: i16, anchor_y: i16, color: ColorId) {
        for (dx, dy) in shape.filled_offsets() {
            self.set(anchor_x + dx, anchor_y + dy, Some(color));
        }
    }

    /// Whether every cell in row y is occupied.
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.rows as usize {
            return false;
        }
        let start = y * self.cols as usize;
        self.cells[start..start + self.cols as usize]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Remove every full row, inserting empty rows at the top.
    ///
    /// Scans bottom to top; after a removal the same row index is examined
    /// again, because the row shifted down into it may itself be complete.
    /// Relative order of all surviving rows is preserved. Returns the number
    /// of rows removed.
    pub fn clear_full_rows(&mut self) -> u32 {
        let cols = self.cols as usize;
        let mut cleared = 0;
        let mut y = self.rows as usize;
        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                // Shift rows 0..row down by one and blank the new top row,
                // then revisit the same index.
                self.cells.copy_within(0..row * cols, cols);
                for cell in &mut self.cells[0..cols] {
                    *cell = None;
                }
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ShapeKind;

    fn fill_row(board: &mut Board, y: i16, color: ColorId) {
        for x in 0..board.cols() as i16 {
            board.set(x, y, Some(color));
        }
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(20, 12);
        for y in 0..20 {
            for x in 0..12 {
                assert_eq!(board.get(x, y), Some(None));
            }
        }
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::new(20, 12);
        assert_eq!(board.get(-1, 0), None);
        assert_eq!(board.get(0, -1), None);
        assert_eq!(board.get(12, 0), None);
        assert_eq!(board.get(0, 20), None);
    }

    #[test]
    fn test_placement_rejects_lateral_and_floor_violations() {
        let board = Board::new(20, 12);
        let o = ShapeKind::O.canonical();
        assert!(board.placement_fits(&o, 0, 0));
        assert!(!board.placement_fits(&o, -1, 0));
        assert!(board.placement_fits(&o, 10, 0));
        assert!(!board.placement_fits(&o, 11, 0));
        assert!(board.placement_fits(&o, 0, 18));
        assert!(!board.placement_fits(&o, 0, 19));
    }

    #[test]
    fn test_placement_rejects_occupied_cells() {
        let mut board = Board::new(20, 12);
        board.set(5, 10, Some(0));
        let o = ShapeKind::O.canonical();
        assert!(!board.placement_fits(&o, 5, 10));
        assert!(!board.placement_fits(&o, 4, 9));
        assert!(board.placement_fits(&o, 6, 10));
    }

    #[test]
    fn test_placement_permits_rows_above_board() {
        let mut board = Board::new(20, 12);
        board.set(5, 0, Some(0));
        let i_vertical = ShapeKind::I.canonical().rotated();
        // Top three rows above the board are not checked against contents,
        // but lateral bounds still apply up there.
        assert!(board.placement_fits(&i_vertical, 0, -3));
        assert!(!board.placement_fits(&i_vertical, -1, -3));
        assert!(!board.placement_fits(&i_vertical, 12, -3));
        // Its visible cell still collides with a locked cell.
        assert!(!board.placement_fits(&i_vertical, 5, -3));
    }

    #[test]
    fn test_write_shape_locks_color() {
        let mut board = Board::new(20, 12);
        board.write_shape(&ShapeKind::O.canonical(), 3, 5, 7);
        assert_eq!(board.get(3, 5), Some(Some(7)));
        assert_eq!(board.get(4, 5), Some(Some(7)));
        assert_eq!(board.get(3, 6), Some(Some(7)));
        assert_eq!(board.get(4, 6), Some(Some(7)));
        assert_eq!(board.get(5, 5), Some(None));
    }

    #[test]
    fn test_is_row_full() {
        let mut board = Board::new(20, 12);
        assert!(!board.is_row_full(19));
        fill_row(&mut board, 19, 1);
        assert!(board.is_row_full(19));
        board.set(0, 19, None);
        assert!(!board.is_row_full(19));
        // Out of range is never full.
        assert!(!board.is_row_full(20));
    }

    #[test]
    fn test_clear_single_row_shifts_rows_down() {
        let mut board = Board::new(20, 12);
        fill_row(&mut board, 19, 1);
        board.set(0, 17, Some(2));
        board.set(1, 18, Some(3));

        assert_eq!(board.clear_full_rows(), 1);

        // Rows above the cleared one shift down by one, order preserved.
        assert_eq!(board.get(0, 18), Some(Some(2)));
        assert_eq!(board.get(1, 19), Some(Some(3)));
        assert_eq!(board.get(0, 17), Some(None));
        assert!(!board.is_row_full(19));
    }

    #[test]
    fn test_clear_rechecks_shifted_rows() {
        // Two stacked full rows: after removing the lower one, the row that
        // shifts into its index is full too and must be caught by the
        // re-examination of the same index.
        let mut board = Board::new(20, 12);
        fill_row(&mut board, 18, 1);
        fill_row(&mut board, 19, 2);
        board.set(3, 17, Some(4));

        assert_eq!(board.clear_full_rows(), 2);
        assert_eq!(board.get(3, 19), Some(Some(4)));
        assert!(!board.is_row_full(18));
        assert!(!board.is_row_full(19));
    }

    #[test]
    fn test_clear_non_adjacent_rows_preserves_order() {
        let mut board = Board::new(20, 12);
        fill_row(&mut board, 15, 1);
        fill_row(&mut board, 10, 1);
        fill_row(&mut board, 5, 1);
        board.set(0, 4, Some(7)); // above all three
        board.set(0, 9, Some(8)); // above two
        board.set(0, 14, Some(9)); // above one

        assert_eq!(board.clear_full_rows(), 3);

        assert_eq!(board.get(0, 7), Some(Some(7)));
        assert_eq!(board.get(0, 11), Some(Some(8)));
        assert_eq!(board.get(0, 15), Some(Some(9)));
    }

    #[test]
    fn test_clear_four_rows() {
        let mut board = Board::new(20, 12);
        for y in 16..20 {
            fill_row(&mut board, y, 1);
        }
        assert_eq!(board.clear_full_rows(), 4);
        for y in 0..20 {
            assert!(!board.is_row_full(y as usize));
        }
    }
}
