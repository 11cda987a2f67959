//! Game state: board, line counters and turn order in one owned value
//!
//! Every stone goes through the same path: place on the board, update the
//! counters of the lines through the cell, then settle the status (win, draw
//! or next turn). The human always moves first; the caller asks for the
//! computer's reply right after a human move that did not end the game.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::board::{Board, CellState, Pos, Side};
use crate::config::AppConfig;
use crate::engine::{MoveResult, MoveScorer};
use crate::error::{ConfigError, GameError, GeometryError};
use crate::eval::LineWeights;
use crate::lines::{Catalog, LineCounters, LineId, LineState};
use crate::rules::{find_completed_line, WinResult};

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won { side: Side, line: LineId },
    /// Board filled without a completed line
    Draw,
}

/// What a committed move did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveEvent {
    /// The other side is to move
    Continue,
    Win { side: Side, line: LineId },
    Draw,
}

/// A move that was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub pos: Pos,
    pub side: Side,
    pub event: MoveEvent,
    /// Scoring details, for computer moves
    pub analysis: Option<MoveResult>,
}

/// Complete state of one game
#[derive(Debug, Clone)]
pub struct GameState {
    catalog: Arc<Catalog>,
    board: Board,
    counters: LineCounters,
    scorer: MoveScorer,
    turn: Side,
    status: GameStatus,
    history: Vec<(Pos, Side)>,
}

impl GameState {
    /// Standard 15x15 game, five in a row, default weights
    pub fn standard() -> Self {
        Self::with_catalog(Arc::new(Catalog::standard()), MoveScorer::new())
    }

    /// New game on an arbitrary geometry with the default weights.
    ///
    /// The default weights cover counts up to four, so runs longer than five
    /// score their extra counts as zero.
    pub fn new_game(size: usize, run_length: usize) -> Result<Self, GeometryError> {
        let catalog = Catalog::new(size, run_length)?;
        Ok(Self::with_catalog(Arc::new(catalog), MoveScorer::new()))
    }

    /// New game from a validated configuration
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let catalog = Catalog::new(config.board.size, config.board.run_length)?;
        let weights = LineWeights::new(config.scoring.attack.clone(), config.scoring.block.clone());
        Ok(Self::with_catalog(
            Arc::new(catalog),
            MoveScorer::with_weights(weights),
        ))
    }

    /// Empty game sharing an already built catalog
    pub fn with_catalog(catalog: Arc<Catalog>, scorer: MoveScorer) -> Self {
        let board = Board::new(catalog.size());
        let counters = LineCounters::new(&catalog);
        Self {
            catalog,
            board,
            counters,
            scorer,
            turn: Side::Human,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Start over with the same catalog and weights
    pub fn reset(&mut self) {
        *self = Self::with_catalog(Arc::clone(&self.catalog), self.scorer.clone());
        debug!("game reset");
    }

    /// Human places a stone.
    ///
    /// # Errors
    ///
    /// Checked in this order: `GameOver`, `OutOfBounds`, `CellOccupied`,
    /// `WrongTurn`. A rejected move leaves the state untouched.
    #[instrument(skip_all, fields(pos = %pos))]
    pub fn human_move(&mut self, pos: Pos) -> Result<MoveOutcome, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        if !self.board.contains(pos) {
            return Err(GameError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                size: self.board.size(),
            });
        }
        if !self.board.is_empty(pos) {
            return Err(GameError::CellOccupied {
                row: pos.row,
                col: pos.col,
            });
        }
        if self.turn != Side::Human {
            return Err(GameError::WrongTurn {
                expected: self.turn,
            });
        }

        let event = self.commit(pos, Side::Human)?;
        Ok(MoveOutcome {
            pos,
            side: Side::Human,
            event,
            analysis: None,
        })
    }

    /// Computer picks and places its stone.
    ///
    /// # Errors
    ///
    /// `NoLegalMove` on a full board, `GameOver` once decided, `WrongTurn`
    /// while the human is to move. The state is unchanged on error.
    #[instrument(skip(self))]
    pub fn computer_move(&mut self) -> Result<MoveOutcome, GameError> {
        let analysis = self.scorer.choose_move(self)?;
        debug!(
            pos = %analysis.best_move,
            score = analysis.score,
            attack = analysis.attack,
            block = analysis.block,
            selection = ?analysis.selection,
            "computer selected move"
        );

        let event = self.commit(analysis.best_move, Side::Computer)?;
        Ok(MoveOutcome {
            pos: analysis.best_move,
            side: Side::Computer,
            event,
            analysis: Some(analysis),
        })
    }

    /// Shared path for both sides: board, counters, status
    fn commit(&mut self, pos: Pos, side: Side) -> Result<MoveEvent, GameError> {
        self.board.place(pos, side)?;
        self.history.push((pos, side));

        let result = self
            .counters
            .apply_move(side, self.catalog.lines_through(pos));
        debug_assert_eq!(
            result.winner(),
            find_completed_line(&self.board, &self.catalog).map(|(s, _)| s),
            "incremental win detection disagrees with board scan"
        );

        let event = match result {
            WinResult::Win { side, line } => {
                self.status = GameStatus::Won { side, line };
                info!(winner = %side, moves = self.history.len(), "game won");
                MoveEvent::Win { side, line }
            }
            WinResult::NoWin if self.board.is_full() => {
                self.status = GameStatus::Draw;
                info!(moves = self.history.len(), "board full, game drawn");
                MoveEvent::Draw
            }
            WinResult::NoWin => {
                self.turn = side.opponent();
                MoveEvent::Continue
            }
        };
        debug!(side = %side, pos = %pos, ?event, "stone placed");
        Ok(event)
    }

    /// Occupancy of a cell, `OutOfBounds` if it is off this board
    pub fn cell_state(&self, pos: Pos) -> Result<CellState, GameError> {
        if !self.board.contains(pos) {
            return Err(GameError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                size: self.board.size(),
            });
        }
        Ok(self.board.get(pos))
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Side to move; after the game ends, the side that moved last
    #[inline]
    pub fn current_turn(&self) -> Side {
        self.turn
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<Side> {
        match self.status {
            GameStatus::Won { side, .. } => Some(side),
            _ => None,
        }
    }

    /// Cells of the completed line, once someone has won
    pub fn winning_cells(&self) -> Option<&[Pos]> {
        match self.status {
            GameStatus::Won { line, .. } => Some(self.catalog.line(line).cells()),
            _ => None,
        }
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().map(|&(pos, _)| pos)
    }

    /// Moves in the order they were played
    pub fn history(&self) -> &[(Pos, Side)] {
        &self.history
    }

    #[inline]
    pub fn line_state(&self, line: LineId, side: Side) -> LineState {
        self.counters.state(line, side)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Shared handle to the catalog, for starting further games
    pub fn catalog_handle(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[inline]
    pub fn counters(&self) -> &LineCounters {
        &self.counters
    }

    #[inline]
    pub fn scorer(&self) -> &MoveScorer {
        &self.scorer
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::Orientation;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn row_line(game: &GameState, start: Pos) -> LineId {
        game.catalog()
            .lines()
            .find(|(_, l)| l.orientation() == Orientation::Horizontal && l.cells()[0] == start)
            .map(|(id, _)| id)
            .unwrap()
    }

    /// Every line: a side with stones on it means the other side is dead,
    /// and open counts match the stones actually on the board.
    fn assert_counters_consistent(game: &GameState) {
        for (id, line) in game.catalog().lines() {
            for side in [Side::Human, Side::Computer] {
                let own = line
                    .cells()
                    .iter()
                    .filter(|&&p| game.cell_state(p) == Ok(CellState::Occupied(side)))
                    .count();
                let other = line
                    .cells()
                    .iter()
                    .filter(|&&p| game.cell_state(p) == Ok(CellState::Occupied(side.opponent())))
                    .count();

                match game.line_state(id, side) {
                    LineState::Open(n) => {
                        assert_eq!(n as usize, own);
                        assert_eq!(other, 0);
                        if n >= 1 {
                            assert_eq!(game.line_state(id, side.opponent()), LineState::Dead);
                        }
                    }
                    LineState::Dead => assert!(other > 0),
                }
            }
        }
    }

    #[test]
    fn test_first_human_move() {
        let mut game = GameState::standard();
        assert_eq!(game.current_turn(), Side::Human);

        let outcome = game.human_move(Pos::new(7, 7)).unwrap();
        assert_eq!(outcome.event, MoveEvent::Continue);
        assert_eq!(game.cell_state(Pos::new(7, 7)), Ok(CellState::Occupied(Side::Human)));
        assert_eq!(game.current_turn(), Side::Computer);
        assert!(!game.is_game_over());
    }

    #[test]
    fn test_human_completes_row() {
        let mut game = GameState::standard();
        let line = row_line(&game, Pos::new(0, 0));

        // Computer stones go on the bottom row, out of the way
        for col in 0..4 {
            game.human_move(Pos::new(0, col)).unwrap();
            game.commit(Pos::new(14, col * 2), Side::Computer).unwrap();
        }
        assert_eq!(game.line_state(line, Side::Human), LineState::Open(4));

        let outcome = game.human_move(Pos::new(0, 4)).unwrap();
        assert_eq!(outcome.event, MoveEvent::Win { side: Side::Human, line });
        assert_eq!(game.winner(), Some(Side::Human));
        assert_eq!(game.winning_cells().map(|c| c.len()), Some(5));
        assert!(game.is_game_over());
    }

    #[test]
    fn test_moves_rejected_after_win() {
        let mut game = GameState::standard();
        for col in 0..4 {
            game.human_move(Pos::new(0, col)).unwrap();
            game.commit(Pos::new(14, col * 2), Side::Computer).unwrap();
        }
        game.human_move(Pos::new(0, 4)).unwrap();

        let board = game.board().clone();
        assert_eq!(game.human_move(Pos::new(7, 7)), Err(GameError::GameOver));
        assert_eq!(game.computer_move(), Err(GameError::GameOver));
        assert_eq!(game.board(), &board);
    }

    #[test]
    fn test_occupied_cell_is_rejected_without_change() {
        let mut game = GameState::standard();
        game.human_move(Pos::new(7, 7)).unwrap();
        let reply = game.computer_move().unwrap();

        let board = game.board().clone();
        let counters = game.counters().clone();

        for pos in [Pos::new(7, 7), reply.pos] {
            assert_eq!(
                game.human_move(pos),
                Err(GameError::CellOccupied {
                    row: pos.row,
                    col: pos.col
                })
            );
        }
        assert_eq!(game.board(), &board);
        assert_eq!(game.counters(), &counters);
        assert_eq!(game.current_turn(), Side::Human);
    }

    #[test]
    fn test_out_of_bounds_and_wrong_turn() {
        let mut game = GameState::standard();
        assert!(matches!(
            game.human_move(Pos::new(15, 3)),
            Err(GameError::OutOfBounds { .. })
        ));

        game.human_move(Pos::new(3, 3)).unwrap();
        assert_eq!(
            game.human_move(Pos::new(4, 4)),
            Err(GameError::WrongTurn {
                expected: Side::Computer
            })
        );
    }

    #[test]
    fn test_cell_state_rejects_off_board_cells() {
        let mut game = GameState::standard();
        game.human_move(Pos::new(1, 0)).unwrap();

        // (0, 15) would alias (1, 0) through row * size + col
        assert_eq!(
            game.cell_state(Pos { row: 0, col: 15 }),
            Err(GameError::OutOfBounds {
                row: 0,
                col: 15,
                size: 15
            })
        );
        assert!(matches!(
            game.cell_state(Pos { row: 20, col: 20 }),
            Err(GameError::OutOfBounds { .. })
        ));
        assert_eq!(game.cell_state(Pos::new(1, 0)), Ok(CellState::Occupied(Side::Human)));
    }

    #[test]
    fn test_from_config_rejects_overflowing_weights() {
        let mut config = AppConfig::default();
        config.scoring.block[1] = i32::MAX;
        assert!(matches!(
            GameState::from_config(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_computer_move_kills_human_lines() {
        let mut game = GameState::standard();
        game.human_move(Pos::new(7, 7)).unwrap();
        let outcome = game.computer_move().unwrap();

        assert_eq!(outcome.side, Side::Computer);
        assert!(outcome.analysis.is_some());
        for &id in game.catalog().lines_through(outcome.pos) {
            assert_eq!(game.line_state(id, Side::Human), LineState::Dead);
        }
        assert_eq!(game.current_turn(), Side::Human);
    }

    #[test]
    fn test_computer_blocks_four() {
        let mut game = GameState::standard();
        for col in 0..4 {
            game.human_move(Pos::new(7, col)).unwrap();
            if col < 3 {
                game.commit(Pos::new(14, col * 3), Side::Computer).unwrap();
            }
        }
        let outcome = game.computer_move().unwrap();
        assert_eq!(outcome.pos, Pos::new(7, 4));
        assert_eq!(outcome.event, MoveEvent::Continue);
    }

    #[test]
    fn test_computer_completes_own_four() {
        let mut game = GameState::standard();
        let human = [(0, 0), (0, 1), (0, 2), (0, 3)];
        let computer = [(5, 0), (5, 1), (5, 2), (5, 3)];
        for (h, c) in human.iter().zip(computer.iter()) {
            game.human_move(Pos::new(h.0, h.1)).unwrap();
            game.commit(Pos::new(c.0, c.1), Side::Computer).unwrap();
        }
        game.human_move(Pos::new(9, 9)).unwrap();

        let outcome = game.computer_move().unwrap();
        assert_eq!(outcome.pos, Pos::new(5, 4));
        assert!(matches!(
            outcome.event,
            MoveEvent::Win {
                side: Side::Computer,
                ..
            }
        ));
        assert_eq!(game.winner(), Some(Side::Computer));
    }

    #[test]
    fn test_full_board_has_no_legal_move() {
        let mut game = GameState::standard();
        // Fill the board behind the game's back so no win or draw is recorded
        for idx in 0..225 {
            let side = if idx % 2 == 0 { Side::Human } else { Side::Computer };
            game.board.place(Pos::from_index(idx, 15), side).unwrap();
        }
        game.turn = Side::Computer;

        let board = game.board().clone();
        let counters = game.counters().clone();
        assert_eq!(game.computer_move(), Err(GameError::NoLegalMove));
        assert_eq!(game.board(), &board);
        assert_eq!(game.counters(), &counters);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_draw_on_small_board() {
        // 3x3 with runs of 3: fill without any line
        let mut game = GameState::new_game(3, 3).unwrap();
        let human = [(0, 0), (0, 2), (1, 2), (2, 1)];
        let computer = [(0, 1), (1, 1), (1, 0), (2, 2)];
        for (h, c) in human.iter().zip(computer.iter()) {
            assert_eq!(game.human_move(Pos::new(h.0, h.1)).unwrap().event, MoveEvent::Continue);
            assert_eq!(game.commit(Pos::new(c.0, c.1), Side::Computer).unwrap(), MoveEvent::Continue);
        }
        let outcome = game.human_move(Pos::new(2, 0)).unwrap();
        assert_eq!(outcome.event, MoveEvent::Draw);
        assert_eq!(game.status(), GameStatus::Draw);
        assert_eq!(game.winner(), None);
        assert_eq!(game.computer_move(), Err(GameError::NoLegalMove));
        assert_eq!(game.human_move(Pos::new(0, 0)), Err(GameError::GameOver));
    }

    #[test]
    fn test_reset_reuses_catalog() {
        let mut game = GameState::standard();
        let handle = game.catalog_handle();
        game.human_move(Pos::new(7, 7)).unwrap();
        game.computer_move().unwrap();

        game.reset();
        assert!(Arc::ptr_eq(&handle, &game.catalog_handle()));
        assert!(game.history().is_empty());
        assert_eq!(game.board().stone_count(), 0);
        assert_eq!(game.current_turn(), Side::Human);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_random_games_keep_invariants() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..20 {
            let mut game = GameState::standard();
            loop {
                let empty: Vec<Pos> = game.board().empty_cells().collect();
                let pos = empty[rng.random_range(0..empty.len())];
                let outcome = game.human_move(pos).unwrap();
                assert_counters_consistent(&game);
                if outcome.event != MoveEvent::Continue {
                    break;
                }

                let best = game.scorer().choose_move(&game).unwrap();
                let outcome = game.computer_move().unwrap();
                assert_eq!(outcome.pos, best.best_move);
                assert_counters_consistent(&game);
                if outcome.event != MoveEvent::Continue {
                    break;
                }
            }

            let scanned = find_completed_line(game.board(), game.catalog()).map(|(s, _)| s);
            assert_eq!(game.winner(), scanned);
            if let Some(&(_, last)) = game.history().last() {
                if let Some(winner) = game.winner() {
                    assert_eq!(winner, last);
                }
            }
        }
    }

    #[test]
    fn test_selected_cell_has_top_score() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut game = GameState::standard();

        for _ in 0..30 {
            let empty: Vec<Pos> = game.board().empty_cells().collect();
            let pos = empty[rng.random_range(0..empty.len())];
            if game.human_move(pos).unwrap().event != MoveEvent::Continue {
                break;
            }

            let top = crate::eval::score_board(
                game.board(),
                game.catalog(),
                game.counters(),
                game.scorer().weights(),
                Side::Computer,
            )
            .iter()
            .map(|(_, s)| s.attack.max(s.block))
            .max()
            .unwrap_or(0);

            let best = game.scorer().choose_move(&game).unwrap();
            assert_eq!(best.score, top);
            assert_eq!(best.attack.max(best.block), top);

            if game.computer_move().unwrap().event != MoveEvent::Continue {
                break;
            }
        }
    }
}
