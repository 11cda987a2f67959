//! Board rendering for the Gomoku GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{Board, Pos, Side};

use super::theme::*;

/// What the board view needs to know besides the stones
pub struct BoardFrame<'a> {
    pub board: &'a Board,
    pub last_move: Option<Pos>,
    pub winning_cells: Option<&'a [Pos]>,
    pub game_over: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    board_rect: Rect,
    size: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
            size: crate::BOARD_SIZE,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked empty cell, if any
    pub fn show(&mut self, ui: &mut egui::Ui, frame: BoardFrame<'_>) -> Option<Pos> {
        let available = ui.available_size();
        let side_len = available.x.min(available.y) - 20.0;
        self.size = frame.board.size();
        self.cell_size = (side_len - 2.0 * BOARD_MARGIN) / (self.size as f32 - 1.0).max(1.0);

        let (response, painter) = ui.allocate_painter(Vec2::splat(side_len), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_center_mark(&painter);
        self.draw_stones(&painter, frame.board);

        if let Some(pos) = frame.last_move {
            self.draw_last_move_marker(&painter, pos);
        }
        if let Some(cells) = frame.winning_cells {
            self.draw_winning_line(&painter, cells);
        }

        if frame.game_over {
            return None;
        }
        let board_pos = response
            .hover_pos()
            .and_then(|p| self.screen_to_board(p))
            .filter(|&p| frame.board.is_empty(p))?;

        painter.circle_filled(
            self.board_to_screen(board_pos),
            self.stone_radius(),
            hover_preview(),
        );
        response.clicked().then_some(board_pos)
    }

    fn stone_radius(&self) -> f32 {
        self.cell_size * STONE_RADIUS_RATIO
    }

    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let extent = (self.size as f32 - 1.0) * self.cell_size;

        for i in 0..self.size {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            painter.line_segment([start, start + Vec2::new(0.0, extent)], stroke);

            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            painter.line_segment([start, start + Vec2::new(extent, 0.0)], stroke);
        }
    }

    /// Small cross on the centre intersection
    fn draw_center_mark(&self, painter: &Painter) {
        let mid = (self.size / 2) as u8;
        let center = self.board_to_screen(Pos::new(mid, mid));
        let stroke = Stroke::new(2.0, CENTER_MARK);
        painter.line_segment(
            [
                center - Vec2::new(CENTER_MARK_HALF, 0.0),
                center + Vec2::new(CENTER_MARK_HALF, 0.0),
            ],
            stroke,
        );
        painter.line_segment(
            [
                center - Vec2::new(0.0, CENTER_MARK_HALF),
                center + Vec2::new(0.0, CENTER_MARK_HALF),
            ],
            stroke,
        );
    }

    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for side in [Side::Human, Side::Computer] {
            for pos in board.stones(side) {
                self.draw_stone(painter, pos, side);
            }
        }
    }

    /// Radial gradient from the rim to an off-centre highlight
    fn draw_stone(&self, painter: &Painter, pos: Pos, side: Side) {
        let center = self.board_to_screen(pos);
        let radius = self.stone_radius();
        let (edge, core) = match side {
            Side::Human => (HUMAN_STONE_EDGE, HUMAN_STONE_CORE),
            Side::Computer => (COMPUTER_STONE_EDGE, COMPUTER_STONE_CORE),
        };
        let highlight = Vec2::new(-radius * 0.3, -radius * 0.3);

        for step in 0..STONE_GRADIENT_STEPS {
            let t = step as f32 / STONE_GRADIENT_STEPS as f32;
            let ring = radius * (1.0 - t);
            painter.circle_filled(center + highlight * t, ring, lerp_color(edge, core, t));
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        painter.circle_filled(
            self.board_to_screen(pos),
            LAST_MOVE_MARKER_RADIUS,
            LAST_MOVE_MARKER,
        );
    }

    fn draw_winning_line(&self, painter: &Painter, cells: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in cells.windows(2) {
            painter.line_segment(
                [self.board_to_screen(pair[0]), self.board_to_screen(pair[1])],
                stroke,
            );
        }
        for &pos in cells {
            painter.circle_stroke(self.board_to_screen(pos), self.stone_radius() + 3.0, stroke);
        }
    }

    /// Nearest intersection to a screen point, if it is on the board
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).round() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).round() as i32;

        Pos::is_valid(row, col, self.size).then(|| Pos::new(row as u8, col as u8))
    }

    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * self.cell_size,
                BOARD_MARGIN + pos.row as f32 * self.cell_size,
            )
    }
}
