//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardFrame, BoardView};
use super::session::Session;
use super::theme::*;
use crate::engine::Selection;
use crate::game::{GameState, GameStatus};
use crate::Side;

/// Main Gomoku application
pub struct GomokuApp {
    session: Session,
    board_view: BoardView,
    show_debug: bool,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, game: GameState) -> Self {
        Self {
            session: Session::new(game),
            board_view: BoardView::default(),
            show_debug: false,
        }
    }

    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.session.new_game();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Scoring Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let catalog = self.session.game.catalog();
                    ui.label(format!(
                        "{0}x{0}, {1} in a row",
                        catalog.size(),
                        catalog.run_length()
                    ));
                });
            });
        });
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("status_panel")
            .resizable(false)
            .exact_width(250.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(14.0);
                ui.heading(RichText::new("GOMOKU").strong().color(TEXT_PRIMARY));
                ui.add_space(14.0);

                self.render_turn_card(ui);

                if self.session.game.is_game_over() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(msg) = self.session.message.clone() {
                    if !self.session.game.is_game_over() {
                        ui.add_space(10.0);
                        Self::render_message_card(ui, &msg);
                    }
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(40.0, 40.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 18.0, HUMAN_STONE_CORE);
                ui.add_space(10.0);

                ui.vertical(|ui| {
                    ui.label(RichText::new("YOU").size(18.0).strong().color(TEXT_PRIMARY));
                    let (text, color) = match self.session.game.status() {
                        GameStatus::InProgress => ("Your turn", STATUS_OK),
                        _ => ("Game over", STATUS_WARN),
                    };
                    ui.label(RichText::new(text).size(12.0).color(color));
                });
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.session.move_count()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let (title, accent) = match self.session.game.status() {
            GameStatus::Won {
                side: Side::Human, ..
            } => ("YOU WIN!", WIN_HIGHLIGHT),
            GameStatus::Won { .. } => ("COMPUTER WINS", STATUS_WARN),
            _ => ("DRAW", TEXT_SECONDARY),
        };

        Self::card_frame()
            .fill(GAME_OVER_BG)
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(TEXT_MUTED));
                    ui.add_space(6.0);
                    ui.label(RichText::new(title).size(18.0).strong().color(accent));
                    if let Some(msg) = self.session.status_text() {
                        ui.label(RichText::new(msg).size(11.0).color(TEXT_SECONDARY));
                    }
                    ui.add_space(10.0);
                    if ui.button("New Game").clicked() {
                        self.session.new_game();
                    }
                });
            });
    }

    /// Scores behind the computer's last reply
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SCORING").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = &self.session.last_analysis else {
                ui.label(RichText::new("No computer move yet").size(10.0).color(TEXT_MUTED));
                return;
            };

            let rule = match result.selection {
                Selection::First => "first empty cell",
                Selection::Block => "block",
                Selection::Attack => "attack",
            };
            ui.label(
                RichText::new(format!("{} by {}", result.best_move, rule))
                    .size(12.0)
                    .strong()
                    .color(WIN_HIGHLIGHT),
            );
            for line in [
                format!("Score: {}", result.score),
                format!("Attack: {}  Block: {}", result.attack, result.block),
                format!("{} cells in {}us", result.cells_scored, result.time_us),
            ] {
                ui.label(RichText::new(line).size(10.0).color(TEXT_SECONDARY));
            }
        });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Self::card_frame()
            .fill(MESSAGE_BG)
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let game = &self.session.game;
            let clicked = self.board_view.show(
                ui,
                BoardFrame {
                    board: game.board(),
                    last_move: game.last_move(),
                    winning_cells: game.winning_cells(),
                    game_over: game.is_game_over(),
                },
            );

            if let Some(pos) = clicked {
                self.session.play_at(pos);
            }
        });
    }

    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
            if i.key_pressed(egui::Key::N) {
                self.session.new_game();
            }
        });
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
