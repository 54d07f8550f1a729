use common::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer, default_on_invalid,
};
use common::games::tictactoe::BotType;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::scoreboard::Scoreboard;

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

fn get_default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path_override: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path_override.unwrap_or_else(get_default_config_path))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Hard,
}

impl Difficulty {
    pub fn bot_type(self) -> BotType {
        match self {
            Difficulty::Easy => BotType::Random,
            Difficulty::Hard => BotType::Minimax,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Everything the client remembers between launches. Game state itself is never stored.
///
/// Each entry loads on its own: an unreadable value falls back to that entry's default and
/// leaves the others, scores included, intact.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub scores: Scoreboard,
    #[serde(deserialize_with = "default_on_invalid")]
    pub theme: Theme,
    #[serde(deserialize_with = "default_on_invalid_true")]
    pub sound_enabled: bool,
    #[serde(deserialize_with = "default_on_invalid")]
    pub vs_computer: bool,
    #[serde(deserialize_with = "default_on_invalid")]
    pub start_with_o: bool,
    #[serde(deserialize_with = "default_on_invalid")]
    pub difficulty: Difficulty,
}

fn default_on_invalid_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<bool> = default_on_invalid(deserializer)?;
    Ok(value.unwrap_or(true))
}

impl Validate for Config {
    /// Entries are independent of each other, and every value that deserializes is usable,
    /// so there are no cross-field rules to check.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scores: Scoreboard::default(),
            theme: Theme::Dark,
            sound_enabled: true,
            vs_computer: false,
            start_with_o: false,
            difficulty: Difficulty::Hard,
        }
    }
}
