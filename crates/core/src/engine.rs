//! The engine reducer: one session in, one intent, one session out.
//!
//! States are `Playing` and `GameOver` (the session's flag). While the
//! session is over, every intent except `Reset` returns it unchanged -
//! illegal moves and rotations during play are likewise silent no-ops, never
//! errors. The only terminal transition is a top-out, which flips the flag
//! instead of faulting.

use blockfall_types::Intent;

use crate::piece::ActivePiece;
use crate::scoring;
use crate::session::{centered_anchor, draw_piece, GameSession};

/// Apply one intent to a session, producing the successor session.
///
/// The input session is never mutated; callers thread the returned value
/// into the next call.
pub fn apply(session: &GameSession, intent: Intent) -> GameSession {
    if session.game_over && intent != Intent::Reset {
        return session.clone();
    }

    if intent == Intent::Reset {
        // Discard the session wholesale; the piece source carries forward
        // so scripted/test streams keep their place.
        return GameSession::new(session.config, session.source.clone());
    }

    let mut next = session.clone();
    match intent {
        Intent::MoveLeft => {
            next.try_translate(-1, 0);
        }
        Intent::MoveRight => {
            next.try_translate(1, 0);
        }
        Intent::Rotate => {
            next.try_rotate();
        }
        Intent::Tick | Intent::SoftDrop => {
            // Gravity step; when blocked the piece has landed.
            if !next.try_translate(0, 1) {
                next.lock_and_respawn();
            }
        }
        Intent::HardDrop => {
            next.hard_drop();
        }
        Intent::Reset => unreachable!("reset handled above"),
    }
    next
}

impl GameSession {
    /// Shift the active piece when the target placement is legal.
    /// Returns whether the piece moved.
    fn try_translate(&mut self, dx: i16, dy: i16) -> bool {
        let candidate = self.active.translated(dx, dy);
        if candidate.fits(&self.board) {
            self.active = candidate;
            true
        } else {
            false
        }
    }

    /// Rotate the active piece in place when the rotated matrix fits at the
    /// unchanged anchor. Rejected rotations are discarded - no kick search.
    fn try_rotate(&mut self) -> bool {
        let candidate = self.active.rotated();
        if candidate.fits(&self.board) {
            self.active = candidate;
            true
        } else {
            false
        }
    }

    /// Drop the active piece to the lowest legal row in one atomic step,
    /// then lock it with the usual clear/score/spawn cycle.
    fn hard_drop(&mut self) {
        while self.try_translate(0, 1) {}
        self.lock_and_respawn();
    }

    /// Lock the active piece into the board, clear full rows, update
    /// score/level, and bring in the next piece.
    fn lock_and_respawn(&mut self) {
        // A locked cell above the visible board is a top-out: abort the
        // write and end the session.
        let tops_out = self
            .active
            .grid
            .filled_offsets()
            .any(|(_, dy)| self.active.y + dy < 0);
        if tops_out {
            self.game_over = true;
            return;
        }

        self.board.write_shape(
            &self.active.grid,
            self.active.x,
            self.active.y,
            self.active.color,
        );

        let cleared = self.board.clear_full_rows();
        if cleared > 0 {
            let points = scoring::line_points(cleared, self.level, &self.config);
            let new_score = self.score + points;
            self.level = scoring::level_after(self.score, new_score, self.level, &self.config);
            self.score = new_score;
        }

        self.spawn_from_next();
    }

    /// Promote the next piece to active (horizontally centered, y = 0) and
    /// draw a replacement. A colliding spawn is a top-out: the session ends
    /// and the colliding piece is not installed.
    fn spawn_from_next(&mut self) {
        let queued = std::mem::replace(&mut self.next, draw_piece(&mut self.source, &self.config));
        let candidate = ActivePiece {
            x: centered_anchor(self.config.cols, queued.grid.width()),
            y: 0,
            grid: queued.grid,
            color: queued.color,
        };
        if candidate.fits(&self.board) {
            self.active = candidate;
        } else {
            self.game_over = true;
        }
    }
}
