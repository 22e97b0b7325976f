//! Theme constants for the Isolation GUI

use egui::Color32;

// Board colors - light and dark squares like a chessboard
pub const BOARD_BG: Color32 = Color32::from_rgb(45, 47, 52);
pub const CELL_LIGHT: Color32 = Color32::from_rgb(238, 216, 180);
pub const CELL_DARK: Color32 = Color32::from_rgb(181, 136, 99);
pub const CELL_BLOCKED: Color32 = Color32::from_rgb(70, 62, 58);
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 40, 20);

// Knights
pub const PLAYER_ONE: Color32 = Color32::from_rgb(25, 25, 30);
pub const PLAYER_ONE_HIGHLIGHT: Color32 = Color32::from_rgb(90, 90, 100);
pub const PLAYER_TWO: Color32 = Color32::from_rgb(250, 250, 252);
pub const PLAYER_TWO_SHADOW: Color32 = Color32::from_rgb(190, 190, 195);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const SUGGESTION_MARKER: Color32 = Color32::from_rgb(50, 170, 230);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Functions for colors that can't be const
pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 200, 120, 110)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

pub fn legal_target() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 200, 120, 60)
}

// Panels
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const DEBUG_CARD_BG: Color32 = Color32::from_rgb(30, 33, 38);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const GAME_OVER_BG: Color32 = Color32::from_rgb(45, 80, 55);
pub const GAME_OVER_BUTTON_BG: Color32 = Color32::from_rgb(60, 100, 70);
pub const GAME_OVER_TEXT: Color32 = Color32::from_rgb(180, 255, 180);
pub const MESSAGE_BG: Color32 = Color32::from_rgb(80, 60, 30);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const KNIGHT_RADIUS_RATIO: f32 = 0.36;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;
pub const TARGET_DOT_RATIO: f32 = 0.12;
