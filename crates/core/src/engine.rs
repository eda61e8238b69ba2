//! Game engine module - owns the complete game state
//!
//! This module ties together board, pieces, queue and hold slot. It drives the
//! per-tick gravity step, applies player commands, runs the lock sequence
//! (merge, clear, score, spawn) and detects game over.
//!
//! Two entry points are called strictly in sequence by the driving loop:
//! [`GameEngine::tick`] for gravity and [`GameEngine::handle_command`] for input.

use crate::board::Board;
use crate::hold::HoldSlot;
use crate::pieces::Piece;
use crate::queue::PieceQueue;
use crate::snapshot::GameSnapshot;
use crate::types::{Command, GamePhase, LockEvent, LINE_CLEAR_SCORE, PREVIEW_DEPTH};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    active: Piece,
    queue: PieceQueue,
    hold: HoldSlot,
    score: u32,
    /// Total rows cleared this game.
    lines: u32,
    pieces_locked: u32,
    phase: GamePhase,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameEngine {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::with_queue(PieceQueue::new(seed))
    }

    /// Create a new game drawing pieces from `queue`.
    ///
    /// The first active piece is dequeued immediately; the board is empty so
    /// it always fits.
    pub fn with_queue(mut queue: PieceQueue) -> Self {
        let active = queue.dequeue_next();
        Self {
            board: Board::new(),
            active,
            queue,
            hold: HoldSlot::new(),
            score: 0,
            lines: 0,
            pieces_locked: 0,
            phase: GamePhase::Running,
            last_event: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    /// Upcoming pieces, front first.
    pub fn preview(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.queue.preview()
    }

    pub fn held(&self) -> Option<&Piece> {
        self.hold.held()
    }

    pub fn can_hold(&self) -> bool {
        self.hold.can_hold()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);

        out.active = self.active;
        out.ghost_y = self.ghost_y();
        out.held = self.hold.held().copied();
        out.can_hold = self.hold.can_hold();
        out.preview.clear();
        for piece in self.queue.preview().take(PREVIEW_DEPTH) {
            out.preview.push(*piece);
        }
        out.score = self.score;
        out.lines = self.lines;
        out.phase = self.phase;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// One gravity step.
    ///
    /// Moves the active piece down a row, or locks it when it cannot fall.
    /// Returns false when nothing happened (paused or game over).
    pub fn tick(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }

        if !self.try_move(0, 1) {
            self.lock_active();
        }
        true
    }

    /// Apply a player command. Returns whether engine state changed.
    ///
    /// Rejected moves and rotations are ordinary outcomes and simply return
    /// false. While paused only `Resume` has an effect; after game over
    /// nothing does. `Quit` is left to the driving loop.
    pub fn handle_command(&mut self, command: Command) -> bool {
        match self.phase {
            GamePhase::GameOver => return false,
            GamePhase::Paused => {
                if command == Command::Resume {
                    self.phase = GamePhase::Running;
                    return true;
                }
                return false;
            }
            GamePhase::Running => {}
        }

        match command {
            Command::MoveLeft => self.try_move(-1, 0),
            Command::MoveRight => self.try_move(1, 0),
            Command::SoftDrop => self.try_move(0, 1),
            Command::RotateCw => self.try_rotate(),
            Command::HardDrop => {
                self.hard_drop();
                true
            }
            Command::Hold => self.hold(),
            Command::Pause => {
                self.phase = GamePhase::Paused;
                true
            }
            Command::Resume | Command::Quit => false,
        }
    }

    fn fits(&self, piece: &Piece) -> bool {
        self.board.is_valid_placement(piece, piece.x, piece.y)
    }

    /// Try to move the active piece
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let x = self.active.x + dx;
        let y = self.active.y + dy;
        if !self.board.is_valid_placement(&self.active, x, y) {
            return false;
        }
        self.active.x = x;
        self.active.y = y;
        true
    }

    /// Rotate clockwise in place; no kicks, so a collision rejects it.
    pub(crate) fn try_rotate(&mut self) -> bool {
        let candidate = self.active.rotated();
        if !self.fits(&candidate) {
            return false;
        }
        self.active = candidate;
        true
    }

    /// Rows the active piece can still fall before it rests.
    pub fn drop_distance(&self) -> i8 {
        let Piece { x, y, .. } = self.active;
        let mut distance = 0;
        while self.board.is_valid_placement(&self.active, x, y + distance + 1) {
            distance += 1;
        }
        distance
    }

    /// Row the active piece would land on (ghost piece).
    pub fn ghost_y(&self) -> i8 {
        if self.phase == GamePhase::GameOver {
            return self.active.y;
        }
        self.active.y + self.drop_distance()
    }

    /// Drop to the resting row and lock in the same step.
    ///
    /// Returns the number of rows dropped.
    pub(crate) fn hard_drop(&mut self) -> i8 {
        let distance = self.drop_distance();
        self.active.y += distance;
        self.lock_active();
        distance
    }

    fn hold(&mut self) -> bool {
        let Some(next) = self.hold.hold(self.active, &mut self.queue) else {
            return false;
        };
        self.active = next;

        // The swapped-in piece enters at the spawn position like any other.
        if !self.fits(&self.active) {
            self.phase = GamePhase::GameOver;
        }
        true
    }

    /// Merge the active piece, clear rows, score, and spawn the next piece.
    fn lock_active(&mut self) {
        let locked = self.active;
        self.board.merge(&locked);

        let lines_cleared = self.board.clear_full_rows().len() as u32;
        let score_delta = LINE_CLEAR_SCORE * lines_cleared;
        self.score = self.score.saturating_add(score_delta);
        self.lines = self.lines.saturating_add(lines_cleared);
        self.pieces_locked = self.pieces_locked.saturating_add(1);

        self.active = self.queue.dequeue_next();
        self.hold.rearm();

        let topped_out = !self.fits(&self.active);
        if topped_out {
            self.phase = GamePhase::GameOver;
        }

        self.last_event = Some(LockEvent {
            kind: locked.kind,
            lines_cleared,
            score_delta,
            topped_out,
        });
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(1)
    }
}
