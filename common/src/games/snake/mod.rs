mod game_state;
mod settings;
mod snake;
mod types;

pub use game_state::SnakeGameState;
pub use settings::{FOOD_SCORE, GRID_SIZE, INITIAL_TICK_MS, MIN_TICK_MS, SnakeSettings, TICK_DECREMENT_MS};
pub use snake::Snake;
pub use types::{DeathReason, Direction, Point, TickOutcome};
