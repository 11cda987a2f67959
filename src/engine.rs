//! Computer player: one-ply heuristic move scorer
//!
//! Every empty cell gets an attack score (the mover's own lines through it)
//! and a block score (the opponent's lines through it). Cells are visited in
//! row-major order while a running best score is kept:
//!
//! 1. **Block**: a block score above the best takes over, and so does an equal
//!    block score with more attack than the current best cell
//! 2. **Attack**: an attack score above the best takes over, and so does an
//!    equal attack score with more block than the current best cell
//!
//! There is no lookahead.
//!
//! # Example
//!
//! ```
//! use gomoku::{GameState, Pos};
//!
//! let mut game = GameState::standard();
//! game.human_move(Pos::new(7, 7)).unwrap();
//!
//! let result = game.scorer().choose_move(&game).unwrap();
//! println!("Best move: {} (score {})", result.best_move, result.score);
//! ```

use std::time::Instant;

use crate::board::{Board, Pos, Side};
use crate::error::GameError;
use crate::eval::{score_cell, CellScore, LineWeights};
use crate::game::GameState;
use crate::lines::{Catalog, LineCounters};

/// Rule that last put the chosen cell in front
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Nothing scored above zero; first empty cell
    First,
    /// Chosen for its block score
    Block,
    /// Chosen for its attack score
    Attack,
}

/// Result of a move selection with scoring details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Cell to play
    pub best_move: Pos,
    /// Running best score when the cell was selected
    pub score: i32,
    /// Attack score of the chosen cell
    pub attack: i32,
    /// Block score of the chosen cell
    pub block: i32,
    /// Rule that selected the cell
    pub selection: Selection,
    /// Number of empty cells scored
    pub cells_scored: usize,
    /// Time taken in microseconds
    pub time_us: u64,
}

/// Heuristic move scorer for the computer side.
#[derive(Debug, Clone, Default)]
pub struct MoveScorer {
    weights: LineWeights,
}

impl MoveScorer {
    /// Scorer with the standard five-in-a-row weights.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_weights(weights: LineWeights) -> Self {
        Self { weights }
    }

    #[inline]
    pub fn weights(&self) -> &LineWeights {
        &self.weights
    }

    /// Pick the computer's next move.
    ///
    /// # Errors
    ///
    /// - `NoLegalMove` if the board has no empty cell
    /// - `GameOver` if the game has already been decided
    /// - `WrongTurn` if the human is to move
    pub fn choose_move(&self, state: &GameState) -> Result<MoveResult, GameError> {
        if state.board().is_full() {
            return Err(GameError::NoLegalMove);
        }
        if state.is_game_over() {
            return Err(GameError::GameOver);
        }
        if state.current_turn() != Side::Computer {
            return Err(GameError::WrongTurn {
                expected: state.current_turn(),
            });
        }

        self.select(state.board(), state.catalog(), state.counters(), Side::Computer)
            .ok_or(GameError::NoLegalMove)
    }

    /// Run the selection policy for `side` over a position.
    ///
    /// Returns `None` only when the board has no empty cell.
    #[must_use]
    pub fn select(
        &self,
        board: &Board,
        catalog: &Catalog,
        counters: &LineCounters,
        side: Side,
    ) -> Option<MoveResult> {
        let start = Instant::now();

        let mut best: Option<(Pos, CellScore, Selection)> = None;
        let mut best_score = 0;
        let mut cells_scored = 0;

        for pos in board.empty_cells() {
            cells_scored += 1;
            let score = score_cell(catalog, counters, &self.weights, pos, side);
            let (mut best_pos, mut best_cell, mut selection) =
                best.unwrap_or((pos, score, Selection::First));

            if score.block > best_score {
                best_score = score.block;
                (best_pos, best_cell, selection) = (pos, score, Selection::Block);
            } else if score.block == best_score && score.attack > best_cell.attack {
                (best_pos, best_cell, selection) = (pos, score, Selection::Block);
            }

            if score.attack > best_score {
                best_score = score.attack;
                (best_pos, best_cell, selection) = (pos, score, Selection::Attack);
            } else if score.attack == best_score && score.block > best_cell.block {
                (best_pos, best_cell, selection) = (pos, score, Selection::Attack);
            }

            best = Some((best_pos, best_cell, selection));
        }

        best.map(|(best_move, cell, selection)| MoveResult {
            best_move,
            score: best_score,
            attack: cell.attack,
            block: cell.block,
            selection,
            cells_scored,
            time_us: start.elapsed().as_micros() as u64,
        })
    }
}
