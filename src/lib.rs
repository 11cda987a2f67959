//! Gomoku: human against a line-counting computer player
//!
//! Two sides take turns placing stones on a square board (15x15 by default).
//! The first to fill every cell of a line of five (in any row, column or
//! diagonal) wins. A full board with no such line is a draw.
//!
//! # Architecture
//!
//! - [`board`]: cell storage with one bitboard per side
//! - [`lines`]: catalog of every winning line and the per-side counters on them
//! - [`rules`]: win detection
//! - [`eval`]: attack/block weights and per-cell scores
//! - [`engine`]: one-ply move scorer for the computer
//! - [`game`]: turn order, move validation and game status
//! - [`config`]: TOML configuration
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GameState, MoveEvent, Pos};
//!
//! let mut game = GameState::standard();
//! let outcome = game.human_move(Pos::new(7, 7)).unwrap();
//! assert_eq!(outcome.event, MoveEvent::Continue);
//!
//! let reply = game.computer_move().unwrap();
//! println!("Computer plays {}", reply.pos);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod lines;
pub mod rules;
pub mod ui;

pub use board::{Board, CellState, Pos, Side, BOARD_SIZE, RUN_LENGTH};
pub use config::AppConfig;
pub use engine::{MoveResult, MoveScorer, Selection};
pub use error::{ConfigError, GameError, GeometryError};
pub use game::{GameState, GameStatus, MoveEvent, MoveOutcome};
pub use lines::{Catalog, LineId, LineState};
