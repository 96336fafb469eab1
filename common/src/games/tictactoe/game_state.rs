use crate::error::IllegalMove;
use crate::games::{GameMode, SessionRng};
use crate::log;
use super::board::{Board, apply_move};
use super::bot_controller::select_move_for;
use super::types::{Difficulty, GameOutcome, Line, Mark};
use super::win_detector::evaluate;

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub mode: GameMode,
    pub first_mark: Mark,
    /// Only consulted in [`GameMode::VsComputer`].
    pub computer_mark: Mark,
    pub current_mark: Mark,
    pub outcome: GameOutcome,
    pub last_move: Option<usize>,
}

impl TicTacToeGameState {
    /// `Mark::Empty` for either mark falls back to X opening and O being the
    /// computer.
    pub fn new(mode: GameMode, first_mark: Mark, computer_mark: Mark) -> Self {
        let first_mark = if first_mark == Mark::Empty { Mark::X } else { first_mark };
        let computer_mark = if computer_mark == Mark::Empty { Mark::O } else { computer_mark };

        Self {
            board: Board::new(),
            mode,
            first_mark,
            computer_mark,
            current_mark: first_mark,
            outcome: GameOutcome::Ongoing,
            last_move: None,
        }
    }

    pub fn local() -> Self {
        Self::new(GameMode::Local, Mark::X, Mark::O)
    }

    pub fn vs_computer(computer_mark: Mark) -> Self {
        Self::new(GameMode::VsComputer, Mark::X, computer_mark)
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::VsComputer
            && !self.is_over()
            && self.current_mark == self.computer_mark
    }

    pub fn winning_line(&self) -> Option<Line> {
        match self.outcome {
            GameOutcome::Win(_, line) => Some(line),
            _ => None,
        }
    }

    /// Places the current mark at `index`. On rejection nothing changes.
    pub fn place_mark(&mut self, index: usize) -> Result<GameOutcome, IllegalMove> {
        if self.is_over() {
            return Err(IllegalMove::GameOver);
        }

        self.board = apply_move(&self.board, index, self.current_mark)?;
        self.last_move = Some(index);
        self.outcome = evaluate(&self.board);

        match self.outcome {
            GameOutcome::Ongoing => self.switch_turn(),
            GameOutcome::Win(mark, line) => log!("tictactoe: {} wins on {:?}", mark, line),
            GameOutcome::Draw => log!("tictactoe: draw"),
        }

        Ok(self.outcome)
    }

    /// A move coming from a person. Refused while the computer is to play.
    pub fn place_human_mark(&mut self, index: usize) -> Result<GameOutcome, IllegalMove> {
        if self.is_computer_turn() {
            return Err(IllegalMove::NotYourTurn);
        }
        self.place_mark(index)
    }

    /// Chooses and plays the computer's move, returning the chosen cell.
    pub fn play_computer_turn(
        &mut self,
        difficulty: Difficulty,
        rng: &mut SessionRng,
    ) -> Result<usize, IllegalMove> {
        if self.is_over() {
            return Err(IllegalMove::GameOver);
        }
        if !self.is_computer_turn() {
            return Err(IllegalMove::NotYourTurn);
        }

        let index = select_move_for(&self.board, self.computer_mark, difficulty, rng)
            .ok_or(IllegalMove::GameOver)?;
        self.place_mark(index)?;
        Ok(index)
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_mark = self.first_mark;
        self.outcome = GameOutcome::Ongoing;
        self.last_move = None;
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: &mut TicTacToeGameState, moves: &[usize]) {
        for &index in moves {
            state.place_mark(index).unwrap();
        }
    }

    #[test]
    fn test_new_game_starts_with_x() {
        let state = TicTacToeGameState::local();

        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.outcome, GameOutcome::Ongoing);
        assert!(!state.is_computer_turn());
    }

    #[test]
    fn test_turns_alternate() {
        let mut state = TicTacToeGameState::local();

        state.place_mark(4).unwrap();
        assert_eq!(state.current_mark, Mark::O);

        state.place_mark(0).unwrap();
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.last_move, Some(0));
    }

    #[test]
    fn test_completing_line_wins() {
        let mut state = TicTacToeGameState::local();
        play(&mut state, &[0, 3, 1, 4]);

        let outcome = state.place_mark(2).unwrap();

        assert_eq!(outcome, GameOutcome::Win(Mark::X, [0, 1, 2]));
        assert_eq!(state.winning_line(), Some([0, 1, 2]));
        assert!(state.is_over());
    }

    #[test]
    fn test_filling_last_cell_draws() {
        let mut state = TicTacToeGameState::local();
        // X O X / X O O / O X X
        play(&mut state, &[0, 1, 2, 4, 3, 5, 7, 6]);

        let outcome = state.place_mark(8).unwrap();

        assert_eq!(outcome, GameOutcome::Draw);
    }

    #[test]
    fn test_occupied_cell_rejected_without_state_change() {
        let mut state = TicTacToeGameState::local();
        state.place_mark(4).unwrap();
        let board_before = state.board;

        let result = state.place_mark(4);

        assert_eq!(result, Err(IllegalMove::CellOccupied(4)));
        assert_eq!(state.board, board_before);
        assert_eq!(state.current_mark, Mark::O);
    }

    #[test]
    fn test_moves_after_win_rejected() {
        let mut state = TicTacToeGameState::local();
        play(&mut state, &[0, 3, 1, 4, 2]);
        let board_before = state.board;

        assert_eq!(state.place_mark(8), Err(IllegalMove::GameOver));
        assert_eq!(state.board, board_before);
    }

    #[test]
    fn test_reset_returns_to_first_mark() {
        let mut state = TicTacToeGameState::new(GameMode::Local, Mark::O, Mark::X);
        play(&mut state, &[0, 1, 2]);

        state.reset();

        assert_eq!(state.board, Board::new());
        assert_eq!(state.current_mark, Mark::O);
        assert_eq!(state.outcome, GameOutcome::Ongoing);
        assert_eq!(state.last_move, None);
    }

    #[test]
    fn test_empty_marks_fall_back_to_defaults() {
        let state = TicTacToeGameState::new(GameMode::VsComputer, Mark::Empty, Mark::Empty);

        assert_eq!(state.first_mark, Mark::X);
        assert_eq!(state.computer_mark, Mark::O);
    }

    #[test]
    fn test_human_cannot_play_computer_turn() {
        let mut state = TicTacToeGameState::vs_computer(Mark::X);

        assert!(state.is_computer_turn());
        assert_eq!(state.place_human_mark(0), Err(IllegalMove::NotYourTurn));
    }

    #[test]
    fn test_computer_plays_only_on_its_turn() {
        let mut state = TicTacToeGameState::vs_computer(Mark::O);
        let mut rng = SessionRng::new(5);

        assert_eq!(
            state.play_computer_turn(Difficulty::Hard, &mut rng),
            Err(IllegalMove::NotYourTurn)
        );

        state.place_human_mark(0).unwrap();
        let index = state.play_computer_turn(Difficulty::Hard, &mut rng).unwrap();

        // only the centre holds against a corner opening
        assert_eq!(index, 4);
        assert_eq!(state.current_mark, Mark::X);
    }

    #[test]
    fn test_computer_as_o_when_o_opens() {
        let mut state = TicTacToeGameState::new(GameMode::VsComputer, Mark::O, Mark::O);
        let mut rng = SessionRng::new(6);

        let index = state.play_computer_turn(Difficulty::Hard, &mut rng).unwrap();

        assert_eq!(state.board.get(index), Some(Mark::O));
        assert_eq!(state.current_mark, Mark::X);
    }

    #[test]
    fn test_hard_computer_never_loses_to_random_human() {
        for seed in 0..20 {
            let mut state = TicTacToeGameState::vs_computer(Mark::O);
            let mut rng = SessionRng::new(seed);

            while !state.is_over() {
                if state.is_computer_turn() {
                    state.play_computer_turn(Difficulty::Hard, &mut rng).unwrap();
                } else {
                    let moves = state.board.available_moves();
                    let index = *rng.pick(&moves).unwrap();
                    state.place_human_mark(index).unwrap();
                }
            }

            assert_ne!(state.outcome.winner(), Some(Mark::X), "seed {}", seed);
        }
    }
}
