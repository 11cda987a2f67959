//! Per-line stone counters for both sides
//!
//! Each line keeps one state per side. A side's state is `Open(n)` while the
//! line is still winnable for it, with `n` of its stones on the line, and
//! becomes `Dead` as soon as the opponent puts a stone on the line.

use super::catalog::{Catalog, LineId};
use crate::board::Side;
use crate::rules::WinResult;

/// Progress of one side on one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineState {
    /// Still winnable, with this many own stones placed
    Open(u8),
    /// The opponent holds a stone on the line
    Dead,
}

impl LineState {
    /// Stone count, or None once the line is dead
    #[inline]
    pub fn count(self) -> Option<u8> {
        match self {
            LineState::Open(n) => Some(n),
            LineState::Dead => None,
        }
    }

    #[inline]
    pub fn is_dead(self) -> bool {
        self == LineState::Dead
    }
}

/// Counter pair for every line in a catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineCounters {
    run_length: u8,
    states: Vec<[LineState; 2]>,
}

impl LineCounters {
    /// All lines open and empty for both sides
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            run_length: catalog.run_length() as u8,
            states: vec![[LineState::Open(0); 2]; catalog.len()],
        }
    }

    #[inline]
    pub fn state(&self, line: LineId, side: Side) -> LineState {
        self.states[line.index()][side.index()]
    }

    /// Record a stone of `side` on every given line.
    ///
    /// The mover's count goes up by one on each line where it is still open,
    /// and the opponent is marked dead on all of them. Every line is updated;
    /// the first line (in the given order) that reaches the run length is
    /// reported as the win.
    pub fn apply_move(&mut self, side: Side, lines: &[LineId]) -> WinResult {
        let mut result = WinResult::NoWin;

        for &line in lines {
            let slot = &mut self.states[line.index()];

            if let LineState::Open(n) = slot[side.index()] {
                let n = n + 1;
                slot[side.index()] = LineState::Open(n);
                if n == self.run_length && result == WinResult::NoWin {
                    result = WinResult::Win { side, line };
                }
            }
            slot[side.opponent().index()] = LineState::Dead;
        }

        result
    }
}
