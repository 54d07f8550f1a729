use common::config::default_on_invalid;
use common::games::tictactoe::Mark;
use serde::{Deserialize, Serialize};

/// Cumulative results across rounds. Outlives any single game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scoreboard {
    #[serde(deserialize_with = "default_on_invalid")]
    pub x_wins: u32,
    #[serde(deserialize_with = "default_on_invalid")]
    pub o_wins: u32,
    #[serde(deserialize_with = "default_on_invalid")]
    pub draws: u32,
}

impl Scoreboard {
    /// `None` counts as a draw.
    pub fn record(&mut self, winner: Option<Mark>) {
        let counter = match winner {
            Some(Mark::X) => &mut self.x_wins,
            Some(Mark::O) => &mut self.o_wins,
            None => &mut self.draws,
        };
        *counter = counter.saturating_add(1);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn games_played(&self) -> u64 {
        self.x_wins as u64 + self.o_wins as u64 + self.draws as u64
    }
}
