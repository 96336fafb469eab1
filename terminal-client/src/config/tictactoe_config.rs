use std::time::Duration;

use arcade_common::games::GameMode;
use arcade_common::games::tictactoe::{Difficulty, Mark};
use arcade_common::storage::Validate;
use serde::{Deserialize, Serialize};

use super::MAX_BOT_DELAY_MS;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct TicTacToeConfig {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub first_mark: Mark,
    pub computer_mark: Mark,
    pub bot_delay_ms: u64,
}

impl TicTacToeConfig {
    pub fn bot_delay(&self) -> Duration {
        Duration::from_millis(self.bot_delay_ms)
    }
}

impl Validate for TicTacToeConfig {
    fn validate(&self) -> Result<(), String> {
        if self.first_mark == Mark::Empty {
            return Err("TicTacToe first_mark must be X or O".to_string());
        }
        if self.computer_mark == Mark::Empty {
            return Err("TicTacToe computer_mark must be X or O".to_string());
        }
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!(
                "TicTacToe bot_delay_ms must not exceed {}",
                MAX_BOT_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::VsComputer,
            difficulty: Difficulty::Medium,
            first_mark: Mark::X,
            computer_mark: Mark::O,
            bot_delay_ms: 500,
        }
    }
}
