use std::fmt;
use std::str::FromStr;

use crate::error::IllegalMove;
use super::types::Mark;
use super::win_detector::evaluate;

pub const CELL_COUNT: usize = 9;
pub const SIDE: usize = 3;

/// A 3x3 board stored row-major, index 0 top-left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_cell(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    /// Empty cell indices in ascending order.
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| **cell != Mark::Empty).count()
    }

    pub fn is_full(&self) -> bool {
        self.filled_count() == CELL_COUNT
    }

    /// X moves on an even number of marks, O on an odd one.
    pub fn mark_to_move(&self) -> Mark {
        if self.filled_count() % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }
}

/// Returns a copy of `board` with `mark` placed at `index`.
///
/// Rejected when the index is off the board, the game is already decided, or
/// the cell is taken. Placing `Mark::Empty` is nobody's move and is rejected
/// as `NotYourTurn`.
pub fn apply_move(board: &Board, index: usize, mark: Mark) -> Result<Board, IllegalMove> {
    if index >= CELL_COUNT {
        return Err(IllegalMove::OutOfBounds(index));
    }
    if evaluate(board).is_terminal() {
        return Err(IllegalMove::GameOver);
    }
    if !board.is_empty_cell(index) {
        return Err(IllegalMove::CellOccupied(index));
    }
    if mark == Mark::Empty {
        return Err(IllegalMove::NotYourTurn);
    }

    let mut next = *board;
    next.set(index, mark);
    Ok(next)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(SIDE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in cells {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

/// Parses nine cells from `X`, `O` and `.`/`_`/`-`; whitespace is ignored.
impl FromStr for Board {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Mark::Empty; CELL_COUNT];
        let mut count = 0;
        for ch in s.chars().filter(|c| !c.is_whitespace()) {
            if count == CELL_COUNT {
                return Err(format!("Board has more than {} cells", CELL_COUNT));
            }
            cells[count] = match ch {
                'X' | 'x' => Mark::X,
                'O' | 'o' => Mark::O,
                '.' | '_' | '-' => Mark::Empty,
                other => return Err(format!("Unexpected board character: {:?}", other)),
            };
            count += 1;
        }
        if count != CELL_COUNT {
            return Err(format!("Board needs {} cells, got {}", CELL_COUNT, count));
        }
        Ok(Self { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::GameOutcome;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let b = Board::new();

        assert_eq!(b.available_moves(), (0..9).collect::<Vec<_>>());
        assert_eq!(b.mark_to_move(), Mark::X);
        assert!(!b.is_full());
    }

    #[test]
    fn test_mark_to_move_follows_parity() {
        assert_eq!(board("X........").mark_to_move(), Mark::O);
        assert_eq!(board("XO.......").mark_to_move(), Mark::X);
    }

    #[test]
    fn test_apply_move_completes_top_row() {
        let b = board("XX. OO. ...");

        let next = apply_move(&b, 2, Mark::X).unwrap();

        assert_eq!(evaluate(&next), GameOutcome::Win(Mark::X, [0, 1, 2]));
        assert_eq!(evaluate(&b), GameOutcome::Ongoing);
    }

    #[test]
    fn test_apply_move_occupied_cell_rejected() {
        let b = board("X........");

        assert_eq!(apply_move(&b, 0, Mark::O), Err(IllegalMove::CellOccupied(0)));
        assert_eq!(b, board("X........"));
    }

    #[test]
    fn test_apply_move_after_win_rejected() {
        let b = board("XXX OO. ...");

        assert_eq!(apply_move(&b, 5, Mark::O), Err(IllegalMove::GameOver));
    }

    #[test]
    fn test_apply_move_on_draw_rejected() {
        let b = board("XOX XOO OXX");

        assert_eq!(apply_move(&b, 0, Mark::O), Err(IllegalMove::GameOver));
    }

    #[test]
    fn test_apply_move_out_of_bounds_rejected() {
        assert_eq!(
            apply_move(&Board::new(), 9, Mark::X),
            Err(IllegalMove::OutOfBounds(9))
        );
    }

    #[test]
    fn test_apply_empty_mark_rejected() {
        assert_eq!(
            apply_move(&Board::new(), 4, Mark::Empty),
            Err(IllegalMove::NotYourTurn)
        );
    }

    #[test]
    fn test_parse_and_display() {
        let b = board("XO. .X. ..O");

        assert_eq!(b.to_string(), "XO.\n.X.\n..O");
        assert!("XO".parse::<Board>().is_err());
        assert!("XOXOXOXOXO".parse::<Board>().is_err());
        assert!("XOZ......".parse::<Board>().is_err());
    }
}
