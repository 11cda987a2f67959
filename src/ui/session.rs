//! Session state for the Gomoku GUI

use tracing::warn;

use crate::engine::MoveResult;
use crate::game::{GameState, GameStatus, MoveEvent};
use crate::{Pos, Side};

/// One game as seen by the window: the state plus what to show beside it
pub struct Session {
    pub game: GameState,
    /// Scoring details of the computer's last reply
    pub last_analysis: Option<MoveResult>,
    /// Rejected click or end-of-game notice
    pub message: Option<String>,
}

impl Session {
    pub fn new(game: GameState) -> Self {
        Self {
            game,
            last_analysis: None,
            message: None,
        }
    }

    /// Clear the board, keeping geometry and weights
    pub fn new_game(&mut self) {
        self.game.reset();
        self.last_analysis = None;
        self.message = None;
    }

    /// Place the human stone at `pos` and, if the game goes on, play the
    /// computer's reply in the same step.
    pub fn play_at(&mut self, pos: Pos) {
        self.message = None;

        let outcome = match self.game.human_move(pos) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.message = Some(e.to_string());
                return;
            }
        };
        if outcome.event != MoveEvent::Continue {
            self.message = self.status_text();
            return;
        }

        match self.game.computer_move() {
            Ok(reply) => {
                self.last_analysis = reply.analysis;
                if reply.event != MoveEvent::Continue {
                    self.message = self.status_text();
                }
            }
            Err(e) => {
                warn!(error = %e, "computer could not reply");
                self.message = Some(e.to_string());
            }
        }
    }

    pub fn move_count(&self) -> usize {
        self.game.history().len()
    }

    /// End-of-game line for the side panel
    pub fn status_text(&self) -> Option<String> {
        match self.game.status() {
            GameStatus::InProgress => None,
            GameStatus::Won {
                side: Side::Human, ..
            } => Some("You win!".to_string()),
            GameStatus::Won {
                side: Side::Computer,
                ..
            } => Some("The computer wins".to_string()),
            GameStatus::Draw => Some("Board full: draw".to_string()),
        }
    }
}
