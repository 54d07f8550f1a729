//! Round flow between the player, the computer opponent and the stored preferences.
//!
//! The controller owns the single live [`TicTacToeGameState`] and replaces its contents on
//! every new round. It never draws anything; the UI reads it after each call.

use std::time::{Duration, Instant};

use common::config::{ConfigContentProvider, ConfigManager};
use common::games::SessionRng;
use common::games::tictactoe::{Mark, TicTacToeGameState, calculate_move};

use crate::config::{Config, Difficulty, Theme};
use crate::scoreboard::Scoreboard;

pub const HUMAN_MARK: Mark = Mark::X;
pub const COMPUTER_MARK: Mark = Mark::O;
pub const COMPUTER_MOVE_DELAY: Duration = Duration::from_millis(350);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Click,
    Win,
    Draw,
}

impl SoundCue {
    pub fn name(self) -> &'static str {
        match self {
            SoundCue::Click => "click",
            SoundCue::Win => "win",
            SoundCue::Draw => "draw",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Played,
    /// Occupied cell, or not the human's turn against the computer.
    Ignored,
    /// The round already ended; the UI shakes the board.
    GameOver,
}

pub struct MatchController<P: ConfigContentProvider> {
    state: TicTacToeGameState,
    config: Config,
    config_manager: ConfigManager<P, Config>,
    rng: SessionRng,
    pending_computer_move_at: Option<Instant>,
    sound_cues: Vec<SoundCue>,
}

impl<P: ConfigContentProvider> MatchController<P> {
    pub fn new(config_manager: ConfigManager<P, Config>, rng: SessionRng) -> Self {
        let config = match config_manager.get_config() {
            Ok(config) => config,
            Err(e) => {
                crate::log!("Failed to load settings, using defaults: {}", e);
                Config::default()
            }
        };

        let state = TicTacToeGameState::new(Self::start_player_for(&config));

        Self {
            state,
            config,
            config_manager,
            rng,
            pending_computer_move_at: None,
            sound_cues: Vec::new(),
        }
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.config.scores
    }

    fn start_player_for(config: &Config) -> Mark {
        if config.vs_computer {
            return HUMAN_MARK;
        }
        if config.start_with_o { Mark::O } else { Mark::X }
    }

    /// Against the computer the human is always X and always starts.
    pub fn start_player(&self) -> Mark {
        Self::start_player_for(&self.config)
    }

    pub fn is_computer_thinking(&self) -> bool {
        self.pending_computer_move_at.is_some()
    }

    pub fn click_cell(&mut self, index: usize, now: Instant) -> ClickOutcome {
        if self.state.is_over() {
            return ClickOutcome::GameOver;
        }

        if !self.state.is_cell_empty(index) {
            return ClickOutcome::Ignored;
        }

        if self.config.vs_computer && self.state.current_player() != HUMAN_MARK {
            return ClickOutcome::Ignored;
        }

        self.cue(SoundCue::Click);
        self.state.play(index);
        self.handle_game_end_if_needed();

        if !self.state.is_over() && self.config.vs_computer {
            self.schedule_computer_move(now);
        }

        ClickOutcome::Played
    }

    fn schedule_computer_move(&mut self, now: Instant) {
        self.pending_computer_move_at = Some(now + COMPUTER_MOVE_DELAY);
    }

    /// Time left before the scheduled computer move, if one is pending.
    pub fn computer_move_due_in(&self, now: Instant) -> Option<Duration> {
        self.pending_computer_move_at
            .map(|at| at.saturating_duration_since(now))
    }

    /// Plays the scheduled computer move once its delay has passed. Returns the cell played.
    pub fn tick(&mut self, now: Instant) -> Option<usize> {
        let due_at = self.pending_computer_move_at?;
        if now < due_at {
            return None;
        }
        self.pending_computer_move_at = None;

        if !self.config.vs_computer
            || self.state.is_over()
            || self.state.current_player() != COMPUTER_MARK
        {
            return None;
        }

        let bot_type = self.config.difficulty.bot_type();
        let index = calculate_move(bot_type, &self.state, COMPUTER_MARK, &mut self.rng)?;
        self.state.play(index);
        self.handle_game_end_if_needed();
        Some(index)
    }

    fn handle_game_end_if_needed(&mut self) {
        if !self.state.is_over() {
            return;
        }

        let winner = self.state.winner();
        self.config.scores.record(winner);
        self.cue(if winner.is_some() { SoundCue::Win } else { SoundCue::Draw });

        match winner {
            Some(mark) => crate::log!("Player {} wins", mark),
            None => crate::log!("Round ended in a tie"),
        }
        self.persist();
    }

    pub fn new_game(&mut self) {
        self.pending_computer_move_at = None;
        let start = self.start_player();
        self.state.reset(start);
        self.cue(SoundCue::Click);
    }

    pub fn clear_scores(&mut self) {
        self.config.scores.clear();
        self.persist();
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.config.theme = theme;
        self.persist();
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.config.sound_enabled = enabled;
        self.persist();
    }

    /// Takes effect for the start player on the next round. Turning it on while O is to move
    /// hands that move to the computer right away.
    pub fn set_vs_computer(&mut self, enabled: bool, now: Instant) {
        self.config.vs_computer = enabled;
        if !enabled {
            self.pending_computer_move_at = None;
        } else if !self.state.is_over() && self.state.current_player() == COMPUTER_MARK {
            self.schedule_computer_move(now);
        }
        self.persist();
    }

    pub fn set_start_with_o(&mut self, enabled: bool) {
        self.config.start_with_o = enabled;
        self.persist();
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = self.config_manager.set_config(&self.config) {
            crate::log!("Failed to save settings: {}", e);
        }
    }

    fn cue(&mut self, cue: SoundCue) {
        if self.config.sound_enabled {
            self.sound_cues.push(cue);
        }
    }

    pub fn take_sound_cues(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.sound_cues)
    }

    pub fn status_text(&self) -> String {
        if let Some(winner) = self.state.winner() {
            format!("Player {} wins!", winner)
        } else if self.state.is_over() {
            "It's a tie.".to_string()
        } else {
            format!("Player {}, your turn", self.state.current_player())
        }
    }
}
