//! Interactive terminal game binary.
//!
//! Wires the pure engine to crossterm: a single-threaded loop that polls
//! for key events with a timeout derived from the current gravity interval,
//! applies intents through the reducer, and redraws after every change.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall_core::{engine, GameSession, PieceSource};
use blockfall_input::{map_key_event, should_quit};
use blockfall_term::{GameView, TerminalRenderer, Viewport};
use blockfall_types::{GameConfig, Intent};

fn main() -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1);
    let session = GameSession::new(GameConfig::default(), PieceSource::seeded(seed));

    let mut renderer = TerminalRenderer::new();
    renderer.enter()?;
    let result = run(&mut renderer, session);
    renderer.exit()?;
    result
}

fn run(renderer: &mut TerminalRenderer, mut session: GameSession) -> Result<()> {
    let view = GameView::default();
    let mut next_tick = Instant::now() + gravity(&session);

    loop {
        let (width, height) = renderer.size()?;
        let fb = view.render(&session.snapshot(), Viewport::new(width, height));
        renderer.draw(&fb)?;

        // Gravity is disarmed while the game is over; only keys matter then.
        let timeout = if session.game_over() {
            Duration::from_millis(250)
        } else {
            next_tick.saturating_duration_since(Instant::now())
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(intent) = map_key_event(key) {
                        let was_over = session.game_over();
                        let old_interval = session.gravity_interval_ms();
                        session = engine::apply(&session, intent);
                        if needs_rearm(was_over, old_interval, &session) {
                            next_tick = Instant::now() + gravity(&session);
                        }
                    }
                }
                Event::Resize(..) => {}
                _ => {}
            }
        }

        if !session.game_over() && Instant::now() >= next_tick {
            session = engine::apply(&session, Intent::Tick);
            next_tick = Instant::now() + gravity(&session);
        }
    }
}

fn gravity(session: &GameSession) -> Duration {
    Duration::from_millis(session.gravity_interval_ms() as u64)
}

/// Whether the gravity deadline must be recomputed after an intent: on a
/// reset out of game over, and whenever the applied intent changed the
/// gravity interval (an input-driven lock that raised the level).
fn needs_rearm(was_over: bool, old_interval_ms: u32, session: &GameSession) -> bool {
    (was_over && !session.game_over()) || session.gravity_interval_ms() != old_interval_ms
}
