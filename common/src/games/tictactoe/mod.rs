//! Tic-tac-toe on a 3x3 board: outcome detection, a full minimax search and
//! the difficulty tiers built on top of it.

mod board;
mod bot_controller;
mod game_state;
mod minimax;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT, SIDE, apply_move};
pub use bot_controller::{
    MEDIUM_OPTIMAL_PROBABILITY, calculate_minimax_move, calculate_random_move, select_move,
    select_move_for,
};
pub use game_state::TicTacToeGameState;
pub use minimax::{SearchResult, WIN_SCORE, find_best_move};
pub use types::{Difficulty, GameOutcome, Line, Mark, WIN_LINES};
pub use win_detector::{check_win, evaluate};
