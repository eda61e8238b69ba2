//! Command sources the driving loop reads from.

use std::collections::VecDeque;
use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};

use crate::map::map_key;
use crate::types::Command;

/// Anything that can hand the driving loop its next command.
pub trait InputSource {
    /// Wait up to `timeout` for a mapped command.
    ///
    /// `Ok(None)` means the timeout elapsed without one. Unmapped keys are
    /// skipped and never surface here.
    fn next_command(&mut self, timeout: Duration) -> io::Result<Option<Command>>;
}

/// Keyboard input through crossterm. Raw mode is the caller's concern.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }

    /// Block until any key press. Used by start and end screens.
    pub fn wait_for_key(&mut self) -> io::Result<()> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }
}

impl InputSource for TerminalInput {
    fn next_command(&mut self, timeout: Duration) -> io::Result<Option<Command>> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !event::poll(remaining)? {
                return Ok(None);
            }

            // Repeat and release events are ignored; only presses map.
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(command) = map_key(key) {
                    return Ok(Some(command));
                }
            }

            if remaining.is_zero() {
                return Ok(None);
            }
        }
    }
}

/// Pre-recorded commands, replayed in order. Never waits.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    pending: VecDeque<Command>,
}

impl ScriptedInput {
    pub fn new<I: IntoIterator<Item = Command>>(commands: I) -> Self {
        Self {
            pending: commands.into_iter().collect(),
        }
    }

    pub fn push(&mut self, command: Command) {
        self.pending.push_back(command);
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_command(&mut self, _timeout: Duration) -> io::Result<Option<Command>> {
        Ok(self.pending.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_replays_in_order() {
        let mut input = ScriptedInput::new([Command::MoveLeft, Command::Hold]);
        input.push(Command::Quit);
        assert_eq!(input.remaining(), 3);

        let t = Duration::from_millis(10);
        assert_eq!(input.next_command(t).unwrap(), Some(Command::MoveLeft));
        assert_eq!(input.next_command(t).unwrap(), Some(Command::Hold));
        assert_eq!(input.next_command(t).unwrap(), Some(Command::Quit));
        assert_eq!(input.next_command(t).unwrap(), None);
    }

    #[test]
    fn test_scripted_input_through_trait_object() {
        let mut input: Box<dyn InputSource> = Box::new(ScriptedInput::new([Command::Pause]));
        assert_eq!(
            input.next_command(Duration::ZERO).unwrap(),
            Some(Command::Pause)
        );
    }
}
