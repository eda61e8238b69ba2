use arrayvec::ArrayVec;

use crate::board::{Grid, BOARD_COLS, BOARD_ROWS};
use crate::pieces::Piece;
use crate::types::{GamePhase, PieceKind, PREVIEW_DEPTH};

/// Read-only copy of everything a renderer draws in one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub board: Grid,
    pub active: Piece,
    pub ghost_y: i8,
    pub held: Option<Piece>,
    pub can_hold: bool,
    pub preview: ArrayVec<Piece, PREVIEW_DEPTH>,
    pub score: u32,
    pub lines: u32,
    pub phase: GamePhase,
}

impl GameSnapshot {
    pub fn paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn playable(&self) -> bool {
        self.phase == GamePhase::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let active = Piece::spawn(PieceKind::I);
        Self {
            board: [[None; BOARD_COLS]; BOARD_ROWS],
            active,
            ghost_y: active.y,
            held: None,
            can_hold: true,
            preview: ArrayVec::new(),
            score: 0,
            lines: 0,
            phase: GamePhase::Running,
        }
    }
}
