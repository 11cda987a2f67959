//! Per-cell scores for the one-ply move scorer

use crate::board::{Board, Pos, Side};
use crate::lines::{Catalog, LineCounters};

use super::patterns::LineWeights;

/// Attack and block value of playing one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellScore {
    /// From the mover's own lines through the cell
    pub attack: i32,
    /// From the opponent's lines through the cell
    pub block: i32,
}

/// Score a cell for `side` by summing over every line through it.
#[must_use]
pub fn score_cell(
    catalog: &Catalog,
    counters: &LineCounters,
    weights: &LineWeights,
    pos: Pos,
    side: Side,
) -> CellScore {
    let opponent = side.opponent();
    catalog
        .lines_through(pos)
        .iter()
        .fold(CellScore::default(), |acc, &line| CellScore {
            attack: acc
                .attack
                .saturating_add(weights.attack(counters.state(line, side))),
            block: acc
                .block
                .saturating_add(weights.block(counters.state(line, opponent))),
        })
}

/// Scores of every empty cell, row-major
pub fn score_board(
    board: &Board,
    catalog: &Catalog,
    counters: &LineCounters,
    weights: &LineWeights,
    side: Side,
) -> Vec<(Pos, CellScore)> {
    board
        .empty_cells()
        .map(|pos| (pos, score_cell(catalog, counters, weights, pos, side)))
        .collect()
}
