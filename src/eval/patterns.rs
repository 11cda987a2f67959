//! Line weights for move scoring
//!
//! A cell is worth the sum of a weight per line through it, keyed by how many
//! stones a side already has on that line. Own lines (attack) are weighted a
//! little above the opponent's (block) at every count, so the scorer prefers
//! finishing its own four over stopping the opponent's.

use crate::lines::LineState;

/// Weight tables indexed by stone count on a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineWeights {
    attack: Vec<i32>,
    block: Vec<i32>,
}

impl LineWeights {
    /// Own lines for five in a row: count 1..=4
    pub const ATTACK: [i32; 5] = [0, 220, 420, 2_100, 20_000];
    /// Opponent lines for five in a row: count 1..=4
    pub const BLOCK: [i32; 5] = [0, 200, 400, 2_000, 10_000];

    pub fn new(attack: Vec<i32>, block: Vec<i32>) -> Self {
        Self { attack, block }
    }

    /// Weight of a line for the side about to move
    #[inline]
    pub fn attack(&self, state: LineState) -> i32 {
        lookup(&self.attack, state)
    }

    /// Weight of a line for the side about to move's opponent
    #[inline]
    pub fn block(&self, state: LineState) -> i32 {
        lookup(&self.block, state)
    }
}

impl Default for LineWeights {
    fn default() -> Self {
        Self::new(Self::ATTACK.to_vec(), Self::BLOCK.to_vec())
    }
}

// Dead lines and counts past the table are worth nothing
#[inline]
fn lookup(table: &[i32], state: LineState) -> i32 {
    state
        .count()
        .and_then(|n| table.get(n as usize))
        .copied()
        .unwrap_or(0)
}
