//! Theme constants for the Gomoku GUI

use egui::Color32;

// Board
pub const BOARD_BG: Color32 = Color32::from_rgb(222, 184, 135);
pub const GRID_LINE: Color32 = Color32::from_rgb(0x66, 0x66, 0x66);
pub const CENTER_MARK: Color32 = Color32::from_rgb(50, 35, 20);

// Stones are drawn as radial gradients, edge colour first
pub const HUMAN_STONE_EDGE: Color32 = Color32::from_rgb(0x0a, 0x0a, 0x0a);
pub const HUMAN_STONE_CORE: Color32 = Color32::from_rgb(0x63, 0x67, 0x66);
pub const COMPUTER_STONE_EDGE: Color32 = Color32::from_rgb(0xb1, 0xb1, 0xb1);
pub const COMPUTER_STONE_CORE: Color32 = Color32::from_rgb(0xf9, 0xf9, 0xf9);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover_preview() -> Color32 {
    Color32::from_rgba_unmultiplied(20, 20, 20, 80)
}

// Panel
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const GAME_OVER_BG: Color32 = Color32::from_rgb(40, 70, 52);
pub const MESSAGE_BG: Color32 = Color32::from_rgb(86, 62, 32);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_WARN: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 30.0;
pub const STONE_RADIUS_RATIO: f32 = 0.45;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const CENTER_MARK_HALF: f32 = 5.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
/// Concentric rings used to fake the stone gradient
pub const STONE_GRADIENT_STEPS: usize = 8;

/// Linear blend from `a` (t = 0) to `b` (t = 1)
pub fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}
