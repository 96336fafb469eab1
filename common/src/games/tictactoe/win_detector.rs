use super::board::Board;
use super::types::{GameOutcome, Line, Mark, WIN_LINES};

pub fn check_win(board: &Board) -> Option<(Mark, Line)> {
    let cells = board.cells();
    WIN_LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let mark = cells[a];
        if mark != Mark::Empty && mark == cells[b] && mark == cells[c] {
            Some((mark, line))
        } else {
            None
        }
    })
}

pub fn evaluate(board: &Board) -> GameOutcome {
    if let Some((mark, line)) = check_win(board) {
        return GameOutcome::Win(mark, line);
    }

    if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::Ongoing
    }
}
