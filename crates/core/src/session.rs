//! The game session - the aggregate value the engine transitions.
//!
//! A session owns the board, the active and next pieces, the piece source,
//! score, level, and the game-over flag. Nothing outside the engine mutates
//! it; callers hold it as a value and feed it to
//! [`engine::apply`](crate::engine::apply).

use blockfall_types::GameConfig;

use crate::board::Board;
use crate::piece::{ActivePiece, NextPiece};
use crate::rng::PieceSource;
use crate::scoring;
use crate::shapes::{ShapeKind, CATALOG_SIZE};
use crate::snapshot::{GameSnapshot, PieceSnapshot};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    pub(crate) config: GameConfig,
    pub(crate) board: Board,
    pub(crate) active: ActivePiece,
    pub(crate) next: NextPiece,
    pub(crate) source: PieceSource,
    pub(crate) score: u32,
    pub(crate) level: u32,
    pub(crate) game_over: bool,
}

impl GameSession {
    /// Start a fresh session: empty board, one drawn active piece spawned at
    /// the horizontal center with y = 0, and one drawn next piece.
    pub fn new(config: GameConfig, source: PieceSource) -> Self {
        let board = Board::new(config.rows, config.cols);
        Self::with_board(config, board, source)
    }

    /// Start a session over a prefilled board.
    ///
    /// Used by tests and scenario setups. If the spawned piece collides with
    /// the given board contents the session starts in game over, exactly as
    /// a mid-game spawn would end it.
    pub fn with_board(config: GameConfig, board: Board, mut source: PieceSource) -> Self {
        let (active, next) = {
            let first = draw_piece(&mut source, &config);
            let second = draw_piece(&mut source, &config);
            (first, second)
        };
        let active = ActivePiece {
            x: centered_anchor(config.cols, active.grid.width()),
            y: 0,
            grid: active.grid,
            color: active.color,
        };
        let game_over = !active.fits(&board);
        Self {
            config,
            board,
            active,
            next,
            source,
            score: 0,
            level: 1,
            game_over,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn next(&self) -> &NextPiece {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Current gravity tick interval, derived from the level.
    pub fn gravity_interval_ms(&self) -> u32 {
        scoring::gravity_interval_ms(self.level, &self.config)
    }

    /// Owned read-only snapshot for view layers.
    pub fn snapshot(&self) -> GameSnapshot {
        let rows = self.config.rows;
        let cols = self.config.cols;
        let mut cells = Vec::with_capacity(rows as usize * cols as usize);
        for y in 0..rows as i16 {
            for x in 0..cols as i16 {
                cells.push(self.board.get(x, y).unwrap_or(None));
            }
        }
        GameSnapshot {
            rows,
            cols,
            cells,
            active: PieceSnapshot {
                grid: self.active.grid.clone(),
                color: self.active.color,
                x: self.active.x,
                y: self.active.y,
            },
            next_grid: self.next.grid.clone(),
            next_color: self.next.color,
            score: self.score,
            level: self.level,
            game_over: self.game_over,
        }
    }
}

/// Anchor x that horizontally centers a shape of the given width.
pub(crate) fn centered_anchor(cols: u8, shape_width: usize) -> i16 {
    cols as i16 / 2 - shape_width as i16 / 2
}

/// Draw one shape/color pair from the source.
pub(crate) fn draw_piece(source: &mut PieceSource, config: &GameConfig) -> NextPiece {
    let (shape_index, color) = source.draw(CATALOG_SIZE, config.palette_size);
    NextPiece {
        grid: ShapeKind::from_index(shape_index).canonical(),
        color,
    }
}
