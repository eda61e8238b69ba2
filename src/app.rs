//! Driving loop: draw, read input until the next tick, apply gravity.

use std::fmt;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::core::{GameEngine, GameSnapshot};
use crate::input::InputSource;
use crate::term::Renderer;
use crate::types::{Command, LockEvent};

/// What happened during one run, collected from lock events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub score: u32,
    pub lines: u32,
    pub pieces_locked: u32,
    /// Most rows removed by a single lock.
    pub best_clear: u32,
    /// The run ended because a new piece could not spawn.
    pub topped_out: bool,
    /// The run ended on a `Quit` command.
    pub quit: bool,
}

impl RunSummary {
    fn record(&mut self, event: LockEvent) {
        self.best_clear = self.best_clear.max(event.lines_cleared);
        self.topped_out |= event.topped_out;
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "score {} | lines {} | pieces {} | best clear {}",
            self.score, self.lines, self.pieces_locked, self.best_clear
        )?;
        if self.topped_out {
            write!(f, " | game over")?;
        }
        Ok(())
    }
}

fn drain_events(engine: &mut GameEngine, summary: &mut RunSummary) {
    if let Some(event) = engine.take_last_event() {
        summary.record(event);
    }
}

/// Run until `Quit` or game over.
///
/// Every iteration draws the current state, waits for input no longer than
/// the time left in the current tick, and applies one gravity step once the
/// tick has elapsed. The final game-over frame is drawn before returning.
pub fn run<R, I>(
    engine: &mut GameEngine,
    renderer: &mut R,
    input: &mut I,
    tick: Duration,
) -> Result<RunSummary>
where
    R: Renderer + ?Sized,
    I: InputSource + ?Sized,
{
    let mut summary = RunSummary::default();
    let mut snap = GameSnapshot::default();
    let mut last_tick = Instant::now();

    loop {
        engine.snapshot_into(&mut snap);
        renderer.draw(&snap)?;
        if engine.game_over() {
            break;
        }

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if let Some(command) = input.next_command(timeout)? {
            if command == Command::Quit {
                summary.quit = true;
                break;
            }
            engine.handle_command(command);
            drain_events(engine, &mut summary);
        }

        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            engine.tick();
            drain_events(engine, &mut summary);
        }
    }

    summary.score = engine.score();
    summary.lines = engine.lines();
    summary.pieces_locked = engine.pieces_locked();
    summary.topped_out = engine.game_over();
    Ok(summary)
}
