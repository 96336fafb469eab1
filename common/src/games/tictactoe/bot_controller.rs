use crate::games::SessionRng;
use crate::log_debug;
use super::board::Board;
use super::minimax::find_best_move;
use super::types::{Difficulty, Mark};

/// Share of Medium moves that come from the full search. Rolled again on
/// every move, so the apparent skill varies turn to turn.
pub const MEDIUM_OPTIMAL_PROBABILITY: f64 = 0.6;

/// Picks a cell for the side to move on `board` (X on even counts).
///
/// The board must be undecided and have an empty cell; the answer on a
/// decided board is meaningless.
pub fn select_move(board: &Board, difficulty: Difficulty, rng: &mut SessionRng) -> Option<usize> {
    select_move_for(board, board.mark_to_move(), difficulty, rng)
}

/// Like [`select_move`] with the computer's mark given explicitly, for games
/// where O opens.
pub fn select_move_for(
    board: &Board,
    computer: Mark,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Option<usize> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(board, rng),
        Difficulty::Medium => {
            if rng.chance(MEDIUM_OPTIMAL_PROBABILITY) {
                calculate_minimax_move(board, computer)
            } else {
                calculate_random_move(board, rng)
            }
        }
        Difficulty::Hard => calculate_minimax_move(board, computer),
    }
}

pub fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = board.available_moves();
    rng.pick(&available_moves).copied()
}

pub fn calculate_minimax_move(board: &Board, computer: Mark) -> Option<usize> {
    let result = find_best_move(board, computer);
    log_debug!(
        "minimax for {}: move {:?}, score {}, {} nodes",
        computer,
        result.best_move,
        result.score,
        result.nodes
    );
    result.best_move
}
