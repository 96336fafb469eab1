mod ladders_config;
mod settings;
mod tictactoe_config;

pub use ladders_config::LaddersConfig;
pub use settings::{Settings, default_data_dir, get_settings_manager};
pub use tictactoe_config::TicTacToeConfig;

pub(crate) const MAX_BOT_DELAY_MS: u64 = 10_000;
