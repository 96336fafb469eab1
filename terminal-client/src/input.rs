use arcade_common::games::snake::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicTacToeInput {
    /// Zero-based cell index.
    Place(usize),
    Reset,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeInput {
    Turn(Direction),
    Pause,
    Reset,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaddersInput {
    Roll,
    Reset,
    ClearScores,
    Quit,
}

/// Cells are typed 1..=9 as laid out on the rendered board.
pub fn parse_tictactoe_input(line: &str) -> Option<TicTacToeInput> {
    match line.trim().to_ascii_lowercase().as_str() {
        "q" | "quit" => Some(TicTacToeInput::Quit),
        "r" | "reset" => Some(TicTacToeInput::Reset),
        other => match other.parse::<usize>() {
            Ok(cell) if (1..=9).contains(&cell) => Some(TicTacToeInput::Place(cell - 1)),
            _ => None,
        },
    }
}

pub fn parse_snake_input(line: &str) -> Option<SnakeInput> {
    match line.trim().to_ascii_lowercase().as_str() {
        "w" => Some(SnakeInput::Turn(Direction::Up)),
        "a" => Some(SnakeInput::Turn(Direction::Left)),
        "s" => Some(SnakeInput::Turn(Direction::Down)),
        "d" => Some(SnakeInput::Turn(Direction::Right)),
        "p" | "" => Some(SnakeInput::Pause),
        "r" => Some(SnakeInput::Reset),
        "q" => Some(SnakeInput::Quit),
        _ => None,
    }
}

pub fn parse_ladders_input(line: &str) -> Option<LaddersInput> {
    match line.trim().to_ascii_lowercase().as_str() {
        "" | "roll" => Some(LaddersInput::Roll),
        "r" => Some(LaddersInput::Reset),
        "c" => Some(LaddersInput::ClearScores),
        "q" => Some(LaddersInput::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tictactoe_cells_are_one_based() {
        assert_eq!(parse_tictactoe_input("1"), Some(TicTacToeInput::Place(0)));
        assert_eq!(parse_tictactoe_input(" 9 "), Some(TicTacToeInput::Place(8)));
        assert_eq!(parse_tictactoe_input("0"), None);
        assert_eq!(parse_tictactoe_input("10"), None);
        assert_eq!(parse_tictactoe_input("x"), None);
    }

    #[test]
    fn test_tictactoe_commands() {
        assert_eq!(parse_tictactoe_input("Q"), Some(TicTacToeInput::Quit));
        assert_eq!(parse_tictactoe_input("reset"), Some(TicTacToeInput::Reset));
    }

    #[test]
    fn test_snake_wasd() {
        assert_eq!(parse_snake_input("w"), Some(SnakeInput::Turn(Direction::Up)));
        assert_eq!(parse_snake_input("A"), Some(SnakeInput::Turn(Direction::Left)));
        assert_eq!(parse_snake_input("s"), Some(SnakeInput::Turn(Direction::Down)));
        assert_eq!(parse_snake_input("d"), Some(SnakeInput::Turn(Direction::Right)));
        assert_eq!(parse_snake_input(""), Some(SnakeInput::Pause));
        assert_eq!(parse_snake_input("jump"), None);
    }

    #[test]
    fn test_ladders_empty_line_rolls() {
        assert_eq!(parse_ladders_input(""), Some(LaddersInput::Roll));
        assert_eq!(parse_ladders_input("c"), Some(LaddersInput::ClearScores));
        assert_eq!(parse_ladders_input("r"), Some(LaddersInput::Reset));
        assert_eq!(parse_ladders_input("q"), Some(LaddersInput::Quit));
        assert_eq!(parse_ladders_input("z"), None);
    }
}
