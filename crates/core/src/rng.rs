//! RNG module - seeded randomness and the upcoming piece queue
//!
//! Piece selection is uniform: every queue entry picks a shape and a color
//! independently, with no bag. The queue keeps a minimum lookahead so a host
//! can always preview upcoming pieces.
//!
//! A simple LCG keeps games reproducible from a seed.

use std::collections::VecDeque;

use blockfall_types::{ShapeKind, COLOR_COUNT};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high half of the state; the low bits of an LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }

    /// Fair coin
    pub fn next_bool(&mut self) -> bool {
        self.next_u32() >> 31 == 1
    }

    /// Uniform shape
    pub fn next_shape(&mut self) -> ShapeKind {
        ShapeKind::ALL[self.next_range(ShapeKind::ALL.len() as u32) as usize]
    }

    /// Uniform color index in 1..=COLOR_COUNT
    pub fn next_color(&mut self) -> u8 {
        self.next_range(u32::from(COLOR_COUNT)) as u8 + 1
    }
}

/// One upcoming piece: shape plus color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueEntry {
    pub kind: ShapeKind,
    pub color: u8,
}

impl QueueEntry {
    /// Draw a uniformly random entry
    pub fn random(rng: &mut SimpleRng) -> Self {
        let kind = rng.next_shape();
        let color = rng.next_color();
        Self { kind, color }
    }
}

/// Lookahead buffer of upcoming pieces
#[derive(Debug, Clone)]
pub struct PieceQueue {
    entries: VecDeque<QueueEntry>,
    min_depth: usize,
}

impl PieceQueue {
    /// Create a queue filled to `min_depth` (at least 1)
    pub fn new(min_depth: usize, rng: &mut SimpleRng) -> Self {
        let mut queue = Self {
            entries: VecDeque::with_capacity(min_depth + 1),
            min_depth: min_depth.max(1),
        };
        queue.refill(rng);
        queue
    }

    fn refill(&mut self, rng: &mut SimpleRng) {
        while self.entries.len() < self.min_depth {
            self.entries.push_back(QueueEntry::random(rng));
        }
    }

    /// Take the front entry, then refill to the minimum depth
    pub fn draw(&mut self, rng: &mut SimpleRng) -> QueueEntry {
        let entry = match self.entries.pop_front() {
            Some(entry) => entry,
            None => QueueEntry::random(rng),
        };
        self.refill(rng);
        entry
    }

    /// Peek at the next piece without removing it
    pub fn peek(&self) -> Option<QueueEntry> {
        self.entries.front().copied()
    }

    /// Upcoming pieces, front first
    pub fn preview(&self) -> impl Iterator<Item = &QueueEntry> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
