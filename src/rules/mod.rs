//! Game rules for plain Gomoku
//!
//! A side wins by filling every cell of a catalog line. Longer rows contain
//! such a line, so overlines win too. There are no captures and no forbidden
//! moves.

pub mod win;

pub use win::{find_completed_line, WinResult};
