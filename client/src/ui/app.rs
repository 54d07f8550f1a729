use std::time::Instant;

use common::config::FileContentConfigProvider;
use eframe::egui;

use crate::colors::{self, Palette};
use crate::config::{Difficulty, Theme};
use crate::match_controller::{ClickOutcome, HUMAN_MARK, MatchController};

use super::board_view::BoardView;

pub struct TicTacToeApp {
    controller: MatchController<FileContentConfigProvider>,
    board_view: BoardView,
}

impl TicTacToeApp {
    pub fn new(controller: MatchController<FileContentConfigProvider>) -> Self {
        Self {
            controller,
            board_view: BoardView::new(),
        }
    }

    fn accepts_input(&self) -> bool {
        let state = self.controller.state();
        if state.is_over() {
            return false;
        }
        !self.controller.config().vs_computer || state.current_player() == HUMAN_MARK
    }

    fn handle_click(&mut self, index: usize, now: Instant) {
        match self.controller.click_cell(index, now) {
            ClickOutcome::Played => crate::log!("Cell {} played", index),
            ClickOutcome::GameOver => self.board_view.shake(now),
            ClickOutcome::Ignored => {}
        }
    }

    fn render_scoreboard(&self, ui: &mut egui::Ui) {
        let scores = self.controller.scoreboard();
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(format!("X: {}", scores.x_wins)).strong());
            ui.separator();
            ui.label(egui::RichText::new(format!("O: {}", scores.o_wins)).strong());
            ui.separator();
            ui.label(egui::RichText::new(format!("Draws: {}", scores.draws)).strong());
            ui.separator();
            ui.label(format!("Games: {}", scores.games_played()));
        });
    }

    fn render_controls(&mut self, ui: &mut egui::Ui, now: Instant) {
        ui.horizontal(|ui| {
            if ui.button("New game").clicked() {
                self.controller.new_game();
            }
            if ui.button("Clear scores").clicked() {
                self.controller.clear_scores();
            }
        });

        ui.add_space(8.0);

        let config = self.controller.config().clone();

        let mut vs_computer = config.vs_computer;
        if ui.checkbox(&mut vs_computer, "Play vs computer").changed() {
            self.controller.set_vs_computer(vs_computer, now);
        }

        let mut start_with_o = config.start_with_o;
        let start_with_o_checkbox = egui::Checkbox::new(&mut start_with_o, "Start with O");
        if ui
            .add_enabled(!config.vs_computer, start_with_o_checkbox)
            .changed()
        {
            self.controller.set_start_with_o(start_with_o);
        }

        let mut light_theme = config.theme == Theme::Light;
        if ui.checkbox(&mut light_theme, "Light theme").changed() {
            self.controller
                .set_theme(if light_theme { Theme::Light } else { Theme::Dark });
        }

        let mut sound_enabled = config.sound_enabled;
        if ui.checkbox(&mut sound_enabled, "Sound").changed() {
            self.controller.set_sound_enabled(sound_enabled);
        }

        let mut difficulty = config.difficulty;
        ui.add_enabled_ui(config.vs_computer, |ui| {
            egui::ComboBox::from_label("Difficulty")
                .selected_text(difficulty.label())
                .show_ui(ui, |ui| {
                    for option in [Difficulty::Easy, Difficulty::Hard] {
                        ui.selectable_value(&mut difficulty, option, option.label());
                    }
                });
        });
        if difficulty != config.difficulty {
            self.controller.set_difficulty(difficulty);
        }
    }

    fn play_sound_cues(&mut self) {
        for cue in self.controller.take_sound_cues() {
            crate::log!("Sound: {}", cue.name());
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        if let Some(index) = self.controller.tick(now) {
            crate::log!("Computer played cell {}", index);
        }

        let theme = self.controller.config().theme;
        ctx.set_visuals(colors::visuals(theme));
        let palette = Palette::for_theme(theme);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.heading("Tic-Tac-Toe");
                ui.add_space(8.0);

                let mut status = self.controller.status_text();
                if self.controller.is_computer_thinking() {
                    status.push_str(" (computer is thinking...)");
                }
                ui.label(egui::RichText::new(status).size(20.0));
                ui.add_space(12.0);

                let accepts_input = self.accepts_input();
                let clicked = self
                    .board_view
                    .show(ui, self.controller.state(), &palette, accepts_input, now);
                if let Some(index) = clicked {
                    self.handle_click(index, now);
                }

                ui.add_space(12.0);
                self.render_scoreboard(ui);
                ui.separator();
                self.render_controls(ui, now);
            });
        });

        if let Some(wait) = self.controller.computer_move_due_in(now) {
            ctx.request_repaint_after(wait);
        }

        self.play_sound_cues();
    }
}
