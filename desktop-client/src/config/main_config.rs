use common::config::Validate;
use common::engine::PlayerColor;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct PlayerDefaults {
    pub name: String,
    pub color: PlayerColor,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub tick_interval_ms: u32,
    pub level_dir: String,
    pub scores_file: String,
    pub player_one: PlayerDefaults,
    pub player_two: PlayerDefaults,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.tick_interval_ms < 50 {
            return Err("tick_interval_ms must be at least 50".to_string());
        }
        if self.tick_interval_ms > 1000 {
            return Err("tick_interval_ms must not exceed 1000".to_string());
        }
        if self.level_dir.trim().is_empty() {
            return Err("level_dir must not be empty".to_string());
        }
        if self.scores_file.trim().is_empty() {
            return Err("scores_file must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_interval_ms: 150,
            level_dir: "levels".to_string(),
            scores_file: "scores.yaml".to_string(),
            player_one: PlayerDefaults {
                name: "Player1".to_string(),
                color: PlayerColor::new(51, 102, 255),
            },
            player_two: PlayerDefaults {
                name: "Player2".to_string(),
                color: PlayerColor::new(230, 57, 57),
            },
        }
    }
}
