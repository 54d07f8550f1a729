mod main_config;

pub use main_config::{Config, Difficulty, Theme, get_config_manager};
