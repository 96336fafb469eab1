use super::board::Board;
use super::types::{GameOutcome, Mark};
use super::win_detector::evaluate;

pub const WIN_SCORE: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` when the root position is already decided.
    pub best_move: Option<usize>,
    pub score: i32,
    pub nodes: u64,
}

/// Full-depth minimax for `computer`, who is to move at the root.
///
/// Ties go to the lowest cell index.
pub fn find_best_move(board: &Board, computer: Mark) -> SearchResult {
    let mut nodes = 1;
    let outcome = evaluate(board);
    if outcome.is_terminal() {
        return SearchResult {
            best_move: None,
            score: terminal_score(outcome, 0, computer),
            nodes,
        };
    }

    let mut scratch = *board;
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in board.available_moves() {
        scratch.set(index, computer);
        let score = minimax(&mut scratch, 1, false, computer, &mut nodes);
        scratch.set(index, Mark::Empty);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    SearchResult {
        best_move,
        score: best_score,
        nodes,
    }
}

fn minimax(
    board: &mut Board,
    depth: i32,
    is_maximizing: bool,
    computer: Mark,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    let outcome = evaluate(board);
    if outcome.is_terminal() {
        return terminal_score(outcome, depth, computer);
    }

    let Some(human) = computer.opponent() else {
        return 0;
    };

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in board.available_moves() {
            board.set(index, computer);
            let eval = minimax(board, depth + 1, false, computer, nodes);
            board.set(index, Mark::Empty);
            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in board.available_moves() {
            board.set(index, human);
            let eval = minimax(board, depth + 1, true, computer, nodes);
            board.set(index, Mark::Empty);
            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}

fn terminal_score(outcome: GameOutcome, depth: i32, computer: Mark) -> i32 {
    match outcome {
        GameOutcome::Win(mark, _) if mark == computer => WIN_SCORE - depth,
        GameOutcome::Win(_, _) => depth - WIN_SCORE,
        GameOutcome::Draw | GameOutcome::Ongoing => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board_is_a_draw_with_perfect_play() {
        let result = find_best_move(&Board::new(), Mark::X);

        assert_eq!(result.score, 0);
        assert_eq!(result.best_move, Some(0));
    }

    #[test]
    fn test_takes_immediate_win() {
        // X to move, 2 completes the top row
        let result = find_best_move(&board("XX. OO. ..."), Mark::X);

        assert_eq!(result.best_move, Some(2));
        assert_eq!(result.score, WIN_SCORE - 1);
    }

    #[test]
    fn test_blocks_opponent_win() {
        // O to move, X threatens 0-1-2
        let result = find_best_move(&board("XX. .O. ..."), Mark::O);

        assert_eq!(result.best_move, Some(2));
    }

    #[test]
    fn test_prefers_faster_win() {
        // X can win at 2 immediately or set up a slower win elsewhere
        let result = find_best_move(&board("XX. O.. O.."), Mark::X);

        assert_eq!(result.best_move, Some(2));
        assert_eq!(result.score, 9);
    }

    #[test]
    fn test_lost_position_delays_the_loss() {
        // O to move, X threatens both 2 and 3; any reply loses at depth 2
        let result = find_best_move(&board("XX. .O. X.O"), Mark::O);

        assert_eq!(result.score, 2 - WIN_SCORE);
        assert!(result.best_move.is_some());
    }

    #[test]
    fn test_terminal_root_has_no_move() {
        let won = find_best_move(&board("XXX OO. ..."), Mark::O);
        assert_eq!(won.best_move, None);
        assert_eq!(won.score, -WIN_SCORE);

        let drawn = find_best_move(&board("XOX XOO OXX"), Mark::X);
        assert_eq!(drawn.best_move, None);
        assert_eq!(drawn.score, 0);
    }

    #[test]
    fn test_search_does_not_mutate_input() {
        let b = board("X.. .O. ...");
        let before = b;

        let _ = find_best_move(&b, Mark::X);

        assert_eq!(b, before);
    }

    #[test]
    fn test_node_count_is_bounded() {
        let result = find_best_move(&Board::new(), Mark::X);

        assert!(result.nodes > 9);
        assert!(result.nodes < 1_000_000);
    }
}
