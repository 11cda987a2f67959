//! Cell evaluation for the computer player
//!
//! - [`patterns`]: weight tables keyed by stones per line
//! - [`heuristic`]: attack/block score of a single cell

pub mod heuristic;
pub mod patterns;

pub use heuristic::{score_board, score_cell, CellScore};
pub use patterns::LineWeights;
