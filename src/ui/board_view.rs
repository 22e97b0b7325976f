//! Board rendering for the Isolation GUI

use crate::{GameState, Player, Pos};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Area covered by cells, margin excluded
    grid_rect: Rect,
    width: u8,
    height: u8,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 48.0,
            grid_rect: Rect::NOTHING,
            width: 0,
            height: 0,
        }
    }
}

/// Everything the view needs besides the state itself
pub struct BoardOverlay {
    pub last_move: Option<Pos>,
    pub suggested_move: Option<Pos>,
    /// Knight of the winner, highlighted once the game is over
    pub winner: Option<Player>,
    /// Accept clicks for the active player
    pub interactive: bool,
}

impl BoardView {
    /// Render the board and return the clicked cell if it is a legal move
    pub fn show(&mut self, ui: &mut egui::Ui, state: &GameState, overlay: &BoardOverlay) -> Option<Pos> {
        self.width = state.width();
        self.height = state.height();

        let available = ui.available_size() - Vec2::splat(20.0);
        let cols = f32::from(self.width);
        let rows = f32::from(self.height);
        self.cell_size = ((available.x - 2.0 * BOARD_MARGIN) / cols)
            .min((available.y - 2.0 * BOARD_MARGIN) / rows)
            .max(8.0);

        let size = Vec2::new(
            cols * self.cell_size + 2.0 * BOARD_MARGIN,
            rows * self.cell_size + 2.0 * BOARD_MARGIN,
        );
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        painter.rect_filled(response.rect, CornerRadius::same(4), BOARD_BG);
        self.grid_rect = response.rect.shrink(BOARD_MARGIN);

        self.draw_cells(&painter, state);
        self.draw_coordinates(&painter);

        // Legal targets for whoever is to move
        let legal = if overlay.interactive { state.legal_moves() } else { Vec::new() };
        for &pos in &legal {
            painter.circle_filled(
                self.cell_center(pos),
                self.cell_size * TARGET_DOT_RATIO,
                legal_target(),
            );
        }

        for player in [Player::One, Player::Two] {
            if let Some(pos) = state.position(player) {
                self.draw_knight(&painter, pos, player, overlay.winner == Some(player));
            }
        }

        if let Some(pos) = overlay.last_move {
            painter.circle_filled(self.cell_corner_marker(pos), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
        }

        if let Some(pos) = overlay.suggested_move {
            self.draw_suggestion(&painter, pos);
        }

        let mut clicked_pos = None;

        if overlay.interactive {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos) {
                    let is_valid = legal.contains(&board_pos);
                    let color = if is_valid { hover_valid() } else { hover_invalid() };
                    painter.rect_filled(self.cell_rect(board_pos).shrink(2.0), CornerRadius::same(3), color);

                    if response.clicked() && is_valid {
                        clicked_pos = Some(board_pos);
                    }
                }
            }
        }

        clicked_pos
    }

    /// Checkered cells, blocked ones greyed out
    fn draw_cells(&self, painter: &Painter, state: &GameState) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);

        for row in 0..self.height {
            for col in 0..self.width {
                let pos = Pos::new(row, col);
                let occupied = state.position(Player::One) == Some(pos)
                    || state.position(Player::Two) == Some(pos);

                let fill = if state.is_blocked(pos) && !occupied {
                    CELL_BLOCKED
                } else if (row + col) % 2 == 0 {
                    CELL_LIGHT
                } else {
                    CELL_DARK
                };

                let rect = self.cell_rect(pos);
                painter.rect_filled(rect, CornerRadius::ZERO, fill);
                painter.rect_stroke(rect, CornerRadius::ZERO, stroke, egui::StrokeKind::Inside);

                if state.is_blocked(pos) && !occupied {
                    // Cross out visited cells
                    let inner = rect.shrink(self.cell_size * 0.3);
                    let cross = Stroke::new(2.0, TEXT_MUTED);
                    painter.line_segment([inner.left_top(), inner.right_bottom()], cross);
                    painter.line_segment([inner.right_top(), inner.left_bottom()], cross);
                }
            }
        }
    }

    /// Column indices along the top, row indices down the left
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for col in 0..self.width {
            let x = self.grid_rect.min.x + (f32::from(col) + 0.5) * self.cell_size;
            let pos = Pos2::new(x, self.grid_rect.min.y - BOARD_MARGIN * 0.5);
            painter.text(pos, egui::Align2::CENTER_CENTER, col, font.clone(), TEXT_SECONDARY);
        }

        for row in 0..self.height {
            let y = self.grid_rect.min.y + (f32::from(row) + 0.5) * self.cell_size;
            let pos = Pos2::new(self.grid_rect.min.x - BOARD_MARGIN * 0.5, y);
            painter.text(pos, egui::Align2::CENTER_CENTER, row, font.clone(), TEXT_SECONDARY);
        }
    }

    fn draw_knight(&self, painter: &Painter, pos: Pos, player: Player, winner: bool) {
        let center = self.cell_center(pos);
        let radius = self.cell_size * KNIGHT_RADIUS_RATIO;

        // Shadow
        painter.circle_filled(
            center + Vec2::new(2.0, 2.0),
            radius,
            Color32::from_rgba_unmultiplied(0, 0, 0, 60),
        );

        let text = match player {
            Player::One => {
                painter.circle_filled(center, radius, PLAYER_ONE);
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.08, PLAYER_ONE_HIGHLIGHT));
                PLAYER_TWO
            }
            Player::Two => {
                painter.circle_filled(center, radius, PLAYER_TWO);
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, PLAYER_TWO_SHADOW));
                PLAYER_ONE
            }
        };

        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            player_label(player),
            egui::FontId::proportional(radius * 1.1),
            text,
        );

        if winner {
            painter.circle_stroke(center, radius + 3.0, Stroke::new(3.0, WIN_HIGHLIGHT));
        }
    }

    fn draw_suggestion(&self, painter: &Painter, pos: Pos) {
        let center = self.cell_center(pos);
        let radius = self.cell_size * KNIGHT_RADIUS_RATIO;
        painter.circle_stroke(center, radius, Stroke::new(3.0, SUGGESTION_MARKER));
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            "?",
            egui::FontId::proportional(14.0),
            SUGGESTION_MARKER,
        );
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        if !self.grid_rect.contains(screen_pos) {
            return None;
        }
        let relative = screen_pos - self.grid_rect.min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        if (0..i32::from(self.width)).contains(&col) && (0..i32::from(self.height)).contains(&row) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.grid_rect.min
            + Vec2::new(f32::from(pos.col) * self.cell_size, f32::from(pos.row) * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert board position to the screen coordinates of the cell centre
    pub fn cell_center(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }

    fn cell_corner_marker(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).left_top() + Vec2::splat(LAST_MOVE_MARKER_RADIUS + 3.0)
    }
}

fn player_label(player: Player) -> &'static str {
    match player {
        Player::One => "1",
        Player::Two => "2",
    }
}
