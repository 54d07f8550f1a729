use std::time::{Duration, Instant};

use common::games::tictactoe::{BOARD_SIZE, Mark, TicTacToeGameState};
use eframe::egui;

use crate::colors::Palette;

#[derive(Default)]
pub struct BoardView {
    shake_until: Option<Instant>,
}

impl BoardView {
    const CELL_SIZE: f32 = 100.0;
    const LINE_WIDTH: f32 = 2.0;
    const MARK_WIDTH: f32 = 6.0;
    const MARK_PADDING: f32 = 22.0;
    const SHAKE_DURATION: Duration = Duration::from_millis(200);
    const SHAKE_AMPLITUDE: f32 = 6.0;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn shake(&mut self, now: Instant) {
        self.shake_until = Some(now + Self::SHAKE_DURATION);
    }

    fn shake_offset(&mut self, now: Instant) -> f32 {
        let Some(until) = self.shake_until else {
            return 0.0;
        };
        if now >= until {
            self.shake_until = None;
            return 0.0;
        }
        let remaining = until.duration_since(now).as_secs_f32();
        (remaining * 80.0).sin() * Self::SHAKE_AMPLITUDE
    }

    fn cell_rect(board_rect: egui::Rect, index: usize) -> egui::Rect {
        let x = (index % BOARD_SIZE) as f32;
        let y = (index / BOARD_SIZE) as f32;
        egui::Rect::from_min_size(
            egui::pos2(
                board_rect.left() + x * Self::CELL_SIZE,
                board_rect.top() + y * Self::CELL_SIZE,
            ),
            egui::vec2(Self::CELL_SIZE, Self::CELL_SIZE),
        )
    }

    fn cell_at(board_rect: egui::Rect, pos: egui::Pos2) -> Option<usize> {
        if !board_rect.contains(pos) {
            return None;
        }
        let x = ((pos.x - board_rect.left()) / Self::CELL_SIZE) as usize;
        let y = ((pos.y - board_rect.top()) / Self::CELL_SIZE) as usize;
        Some(y.min(BOARD_SIZE - 1) * BOARD_SIZE + x.min(BOARD_SIZE - 1))
    }

    /// Paints the board and returns the cell clicked this frame, if any.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        state: &TicTacToeGameState,
        palette: &Palette,
        accepts_input: bool,
        now: Instant,
    ) -> Option<usize> {
        let side = Self::CELL_SIZE * BOARD_SIZE as f32;
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::click());

        let offset = self.shake_offset(now);
        if self.shake_until.is_some() {
            ui.ctx().request_repaint();
        }
        let board_rect = rect.translate(egui::vec2(offset, 0.0));

        let painter = ui.painter();
        painter.rect_filled(board_rect, 8.0, palette.board_background);

        if let Some(line) = state.winning_line() {
            for index in line.cells() {
                let cell = Self::cell_rect(board_rect, index).shrink(4.0);
                painter.rect_filled(cell, 6.0, palette.win_highlight);
            }
        }

        let grid_stroke = egui::Stroke::new(Self::LINE_WIDTH, palette.grid_line);
        for i in 1..BOARD_SIZE {
            let x = board_rect.left() + i as f32 * Self::CELL_SIZE;
            painter.line_segment(
                [egui::pos2(x, board_rect.top()), egui::pos2(x, board_rect.bottom())],
                grid_stroke,
            );
            let y = board_rect.top() + i as f32 * Self::CELL_SIZE;
            painter.line_segment(
                [egui::pos2(board_rect.left(), y), egui::pos2(board_rect.right(), y)],
                grid_stroke,
            );
        }

        let hovered = if accepts_input {
            response
                .hover_pos()
                .and_then(|pos| Self::cell_at(board_rect, pos))
                .filter(|&index| state.is_cell_empty(index))
        } else {
            None
        };
        if let Some(index) = hovered {
            let cell = Self::cell_rect(board_rect, index).shrink(4.0);
            painter.rect_filled(cell, 6.0, palette.hover);
        }

        for (index, cell) in state.board().cells().iter().enumerate() {
            if let Some(mark) = cell.mark() {
                self.draw_mark(painter, Self::cell_rect(board_rect, index), mark, palette);
            }
        }

        if response.clicked() {
            return response
                .interact_pointer_pos()
                .and_then(|pos| Self::cell_at(board_rect, pos));
        }
        None
    }

    fn draw_mark(
        &self,
        painter: &egui::Painter,
        cell_rect: egui::Rect,
        mark: Mark,
        palette: &Palette,
    ) {
        let inner = cell_rect.shrink(Self::MARK_PADDING);
        let stroke = egui::Stroke::new(Self::MARK_WIDTH, palette.mark_color(mark == Mark::X));
        match mark {
            Mark::X => {
                painter.line_segment([inner.left_top(), inner.right_bottom()], stroke);
                painter.line_segment([inner.right_top(), inner.left_bottom()], stroke);
            }
            Mark::O => {
                painter.circle_stroke(inner.center(), inner.width() / 2.0, stroke);
            }
        }
    }
}
