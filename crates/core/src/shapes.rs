//! Shape catalog and matrix rotation.
//!
//! A shape is a small rectangular 0/1 matrix describing which cells a piece
//! occupies in one orientation. The catalog holds the 7 canonical shapes;
//! rotation produces new matrices at runtime (transpose, then reverse each
//! row), so no per-orientation tables are needed.

use arrayvec::ArrayVec;

/// Maximum shape matrix dimension (the I piece is 1x4).
pub const MAX_SHAPE_DIM: usize = 4;

/// Number of shapes in the catalog.
pub const CATALOG_SIZE: u8 = 7;

/// The 7 canonical shape kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    Z,
    S,
    L,
    J,
}

/// Catalog order used for uniform random draws.
pub const CATALOG: [ShapeKind; CATALOG_SIZE as usize] = [
    ShapeKind::I,
    ShapeKind::O,
    ShapeKind::T,
    ShapeKind::Z,
    ShapeKind::S,
    ShapeKind::L,
    ShapeKind::J,
];

impl ShapeKind {
    /// Look up a catalog entry by draw index.
    pub fn from_index(index: u8) -> Self {
        CATALOG[(index % CATALOG_SIZE) as usize]
    }

    /// The canonical (spawn) orientation matrix for this kind.
    pub fn canonical(&self) -> ShapeGrid {
        match self {
            ShapeKind::I => ShapeGrid::from_rows(&[&[1, 1, 1, 1]]),
            ShapeKind::O => ShapeGrid::from_rows(&[&[1, 1], &[1, 1]]),
            ShapeKind::T => ShapeGrid::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
            ShapeKind::Z => ShapeGrid::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
            ShapeKind::S => ShapeGrid::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
            ShapeKind::L => ShapeGrid::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
            ShapeKind::J => ShapeGrid::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "I",
            ShapeKind::O => "O",
            ShapeKind::T => "T",
            ShapeKind::Z => "Z",
            ShapeKind::S => "S",
            ShapeKind::L => "L",
            ShapeKind::J => "J",
        }
    }
}

/// A rectangular 0/1 occupancy matrix, at most 4x4.
///
/// Rows are stored top to bottom; `rows[y][x]` is nonzero when the shape
/// occupies local offset (x, y). Inline storage keeps rotation and collision
/// checks allocation-free.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShapeGrid {
    rows: ArrayVec<ArrayVec<u8, MAX_SHAPE_DIM>, MAX_SHAPE_DIM>,
}

impl ShapeGrid {
    /// Build a grid from row slices. Every row must have the same width.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        debug_assert!(!rows.is_empty() && rows.len() <= MAX_SHAPE_DIM);
        debug_assert!(rows.iter().all(|r| r.len() == rows[0].len()));
        let mut grid = ArrayVec::new();
        for row in rows {
            let mut out = ArrayVec::new();
            out.try_extend_from_slice(row).expect("shape row too wide");
            grid.push(out);
        }
        Self { rows: grid }
    }

    /// Matrix width in cells.
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    /// Matrix height in cells.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Whether the local offset (x, y) is occupied.
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        self.rows
            .get(y)
            .and_then(|row| row.get(x))
            .is_some_and(|cell| *cell != 0)
    }

    /// Iterate the occupied local offsets as (dx, dy) pairs.
    pub fn filled_offsets(&self) -> impl Iterator<Item = (i16, i16)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, cell)| **cell != 0)
                .map(move |(x, _)| (x as i16, y as i16))
        })
    }

    /// The matrix rotated 90 degrees clockwise.
    ///
    /// Transpose, then reverse each resulting row. Dimensions swap, so a
    /// 2x3 matrix rotates into a 3x2 one.
    pub fn rotated(&self) -> Self {
        let (w, h) = (self.width(), self.height());
        let mut rows = ArrayVec::new();
        for x in 0..w {
            let mut row = ArrayVec::new();
            for y in (0..h).rev() {
                row.push(self.rows[y][x]);
            }
            rows.push(row);
        }
        Self { rows }
    }
}
