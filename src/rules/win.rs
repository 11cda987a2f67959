//! Win condition: one side fills every cell of a catalog line
//!
//! During play the win is reported by `LineCounters::apply_move`, which only
//! looks at the lines through the new stone. `find_completed_line` does the
//! same check by scanning the whole board and is kept as a reference the
//! incremental path is asserted against.

use crate::board::{Board, CellState, Side};
use crate::lines::{Catalog, LineId};

/// Result of applying one stone to the line counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinResult {
    NoWin,
    Win { side: Side, line: LineId },
}

impl WinResult {
    #[inline]
    pub fn winner(self) -> Option<Side> {
        match self {
            WinResult::Win { side, .. } => Some(side),
            WinResult::NoWin => None,
        }
    }

    #[inline]
    pub fn is_win(self) -> bool {
        matches!(self, WinResult::Win { .. })
    }
}

/// First line (by id) whose cells all belong to one side
pub fn find_completed_line(board: &Board, catalog: &Catalog) -> Option<(Side, LineId)> {
    catalog.lines().find_map(|(id, line)| {
        let cells = line.cells();
        let CellState::Occupied(side) = board.get(cells[0]) else {
            return None;
        };
        cells[1..]
            .iter()
            .all(|&pos| board.get(pos) == CellState::Occupied(side))
            .then_some((side, id))
    })
}
