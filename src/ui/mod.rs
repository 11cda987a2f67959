//! GUI module for the Gomoku game
//!
//! A native window built on egui/eframe. Clicking an empty intersection
//! plays the human stone and the computer answers in the same frame.

mod app;
mod board_view;
mod session;
mod theme;

pub use app::GomokuApp;
pub use session::Session;
