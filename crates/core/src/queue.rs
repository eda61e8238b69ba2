//! Queue module - bag-less random piece generation
//!
//! Each upcoming piece is drawn independently and uniformly from the seven
//! kinds; there is no 7-bag guarantee. The queue keeps a minimum lookahead
//! depth so the renderer always has a preview to show.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::pieces::Piece;
use crate::types::{PieceKind, PREVIEW_DEPTH};

/// Upcoming pieces, front first.
#[derive(Debug, Clone)]
pub struct PieceQueue {
    pending: VecDeque<Piece>,
    min_depth: usize,
    rng: StdRng,
}

impl PieceQueue {
    /// Create a queue with the default lookahead depth.
    pub fn new(seed: u64) -> Self {
        Self::with_depth(seed, PREVIEW_DEPTH)
    }

    /// Create a queue keeping at least `depth` pieces (minimum 1).
    pub fn with_depth(seed: u64, depth: usize) -> Self {
        let min_depth = depth.max(1);
        let mut queue = Self {
            pending: VecDeque::with_capacity(min_depth),
            min_depth,
            rng: StdRng::seed_from_u64(seed),
        };
        queue.ensure_minimum_depth();
        queue
    }

    fn random_piece(&mut self) -> Piece {
        let kind = PieceKind::ALL[self.rng.gen_range(0..PieceKind::ALL.len())];
        Piece::spawn(kind)
    }

    /// Append fresh random pieces until the minimum depth is reached.
    pub fn ensure_minimum_depth(&mut self) {
        while self.pending.len() < self.min_depth {
            let piece = self.random_piece();
            self.pending.push_back(piece);
        }
    }

    /// Remove and return the next piece (at spawn coordinates), then refill.
    pub fn dequeue_next(&mut self) -> Piece {
        let next = match self.pending.pop_front() {
            Some(piece) => piece,
            None => self.random_piece(),
        };
        self.ensure_minimum_depth();
        next
    }

    /// Upcoming pieces, front first. Never mutates the queue.
    pub fn preview(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.pending.iter()
    }

    /// The `n`-th upcoming piece, if buffered.
    pub fn peek(&self, n: usize) -> Option<&Piece> {
        self.pending.get(n)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn min_depth(&self) -> usize {
        self.min_depth
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new(1)
    }
}
