mod game_mode;
mod session_rng;

pub mod snake;
pub mod snakes_ladders;
pub mod tictactoe;

pub use game_mode::GameMode;
pub use session_rng::SessionRng;
