//! Board rendering for the sum-difference Gomoku GUI

use crate::{Board, Player, Pos, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 36.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked empty intersection, if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Player,
        last_move: Option<Pos>,
        winning_line: Option<&[Pos]>,
        interactive: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / (BOARD_SIZE as f32 - 1.0);

        let (response, painter) = ui.allocate_painter(
            Vec2::new(board_size, board_size),
            Sense::click(),
        );

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, board);

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, line);
        }

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos, winning_line.is_some());
        }

        let mut clicked_pos = None;

        if interactive {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos) {
                    let is_valid = board.is_empty(board_pos);
                    self.draw_hover_preview(&painter, board_pos, current_turn, is_valid);

                    if response.clicked() && is_valid {
                        clicked_pos = Some(board_pos);
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the 15x15 grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = (BOARD_SIZE as f32 - 1.0) * self.cell_size;

        for i in 0..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_star_points(&self, painter: &Painter) {
        for (row, col) in STAR_POINTS {
            let center = self.board_to_screen(Pos::new(row, col));
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Draw x (0-14, top) and y (0-14, left) labels
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(11.0);

        for i in 0..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            let pos = Pos2::new(self.board_rect.min.x + offset, self.board_rect.min.y + 14.0);
            painter.text(pos, egui::Align2::CENTER_CENTER, i.to_string(), font.clone(), GRID_LINE);

            let pos = Pos2::new(self.board_rect.min.x + 14.0, self.board_rect.min.y + offset);
            painter.text(pos, egui::Align2::CENTER_CENTER, i.to_string(), font.clone(), GRID_LINE);
        }
    }

    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for (pos, owner, value) in board.occupied() {
            self.draw_stone(painter, pos, owner, value);
        }
    }

    /// Draw a single stone with its value printed on it
    fn draw_stone(&self, painter: &Painter, pos: Pos, owner: Player, value: u8) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let is_black = owner == Player::Black;

        // Shadow
        painter.circle_filled(
            center + Vec2::new(2.0, 2.0),
            radius,
            Color32::from_rgba_unmultiplied(0, 0, 0, if is_black { 60 } else { 40 }),
        );

        painter.circle_filled(center, radius, stone_fill(is_black));

        if is_black {
            let highlight_offset = Vec2::new(-radius * 0.35, -radius * 0.35);
            painter.circle_filled(center + highlight_offset, radius * 0.15, BLACK_STONE_HIGHLIGHT);
        } else {
            painter.circle_stroke(center, radius * 0.9, Stroke::new(radius * 0.08, WHITE_STONE_SHADOW));
        }

        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            value.to_string(),
            egui::FontId::proportional(radius.max(8.0)),
            stone_text(is_black),
        );
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos, game_won: bool) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        if game_won {
            // Ring around the stone that completed the win
            painter.circle_stroke(center, radius + 5.0, Stroke::new(4.0, WIN_HIGHLIGHT));
        } else {
            painter.circle_filled(
                center + Vec2::new(radius * 0.6, -radius * 0.6),
                LAST_MOVE_MARKER_RADIUS,
                LAST_MOVE_MARKER,
            );
        }
    }

    /// Connect the stones of the winning group
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(3.0, WIN_HIGHLIGHT.gamma_multiply(0.7));

        for pair in line.windows(2) {
            let start = self.board_to_screen(pair[0]);
            let end = self.board_to_screen(pair[1]);
            painter.line_segment([start, end], stroke);
        }

        for pos in line {
            let center = self.board_to_screen(*pos);
            let radius = self.cell_size * STONE_RADIUS_RATIO + 2.0;
            painter.circle_stroke(center, radius, stroke);
        }
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Player, is_valid: bool) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        let color = if !is_valid {
            hover_invalid()
        } else {
            match turn {
                Player::Black => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
                Player::White => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
            }
        };

        painter.circle_filled(center, radius, color);
    }

    /// Convert screen coordinates to the nearest intersection
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN) / self.cell_size;

        Pos::checked(y.round() as i32, x.round() as i32)
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.col as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.row as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}

/// Paint a numbered stone filling `rect`, used by the stone picker and side panel
pub fn paint_stone_icon(painter: &Painter, rect: Rect, owner: Player, value: u8, hovered: bool) {
    let is_black = owner == Player::Black;
    let radius = rect.width().min(rect.height()) * 0.4;

    if hovered {
        painter.circle_stroke(rect.center(), radius + 3.0, Stroke::new(2.0, STATUS_OK));
    }
    painter.circle_filled(rect.center(), radius, stone_fill(is_black));
    painter.circle_stroke(rect.center(), radius, Stroke::new(1.0, GRID_LINE));
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        value.to_string(),
        egui::FontId::proportional(radius),
        stone_text(is_black),
    );
}
