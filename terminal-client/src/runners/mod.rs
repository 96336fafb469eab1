mod ladders_runner;
mod scores_command;
mod snake_runner;
mod tictactoe_runner;

use arcade_common::scores::Scoreboard;
use arcade_common::storage::FileKeyValueStore;

pub use ladders_runner::run_ladders_game;
pub use scores_command::run_scores_command;
pub use snake_runner::run_snake_game;
pub use tictactoe_runner::run_tictactoe_game;

pub type FileScoreboard = Scoreboard<FileKeyValueStore>;

/// Score persistence never ends a game; failures are logged and shown.
fn report_store_error(context: &str, error: String) {
    arcade_common::log!("{}: {}", context, error);
    println!("Warning: {}: {}", context, error);
}
