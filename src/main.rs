//! Terminal block-drop runner (default binary).
//!
//! Crossterm input and the framebuffer renderer from `block-drop-term`. The
//! terminal is always restored before the run summary is printed.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use block_drop::app::{self, RunSummary};
use block_drop::core::GameEngine;
use block_drop::input::TerminalInput;
use block_drop::term::TerminalRenderer;
use block_drop::types::TICK_MS;

#[derive(Parser, Debug)]
#[command(name = "block-drop", about = "Falling-block puzzle game for the terminal")]
struct Args {
    /// RNG seed for the piece sequence (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Gravity interval in milliseconds (at least 1)
    #[arg(long, default_value_t = TICK_MS as u64, value_parser = clap::value_parser!(u64).range(1..))]
    tick_ms: u64,

    /// Skip the start screen
    #[arg(long)]
    no_splash: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    let tick = Duration::from_millis(args.tick_ms);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = play(&mut term, seed, tick, !args.no_splash);

    // Always try to restore terminal state.
    let _ = term.exit();

    let summary = result?;
    println!("seed {seed}");
    println!("{summary}");
    Ok(())
}

fn play(term: &mut TerminalRenderer, seed: u64, tick: Duration, splash: bool) -> Result<RunSummary> {
    let mut input = TerminalInput::new();

    if splash {
        term.draw_splash()?;
        input.wait_for_key()?;
    }

    let mut engine = GameEngine::new(seed);
    let summary = app::run(&mut engine, term, &mut input, tick)?;

    // Leave the final board and score on screen until acknowledged.
    if summary.topped_out {
        input.wait_for_key()?;
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["block-drop"]).unwrap();
        assert_eq!(args.seed, None);
        assert_eq!(args.tick_ms, TICK_MS as u64);
        assert!(!args.no_splash);
    }

    #[test]
    fn all_flags() {
        let args =
            Args::try_parse_from(["block-drop", "--seed", "42", "--tick-ms", "50", "--no-splash"])
                .unwrap();
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.tick_ms, 50);
        assert!(args.no_splash);
    }

    #[test]
    fn zero_tick_is_rejected() {
        assert!(Args::try_parse_from(["block-drop", "--tick-ms", "0"]).is_err());
        assert!(Args::try_parse_from(["block-drop", "--seed", "-1"]).is_err());
    }
}
