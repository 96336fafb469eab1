use std::time::Duration;

use arcade_common::games::GameMode;
use arcade_common::storage::Validate;
use serde::{Deserialize, Serialize};

use super::MAX_BOT_DELAY_MS;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct LaddersConfig {
    pub mode: GameMode,
    pub bot_delay_ms: u64,
}

impl LaddersConfig {
    pub fn bot_delay(&self) -> Duration {
        Duration::from_millis(self.bot_delay_ms)
    }
}

impl Validate for LaddersConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!(
                "Ladders bot_delay_ms must not exceed {}",
                MAX_BOT_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Default for LaddersConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Local,
            bot_delay_ms: 1000,
        }
    }
}
