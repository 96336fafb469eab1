use crate::error::IllegalMove;
use crate::games::{GameMode, SessionRng};
use crate::log;
use super::board::{DIE_FACES, FINAL_CELL, Jump, JumpKind, START_CELL, jump_from, walk};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(&self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    fn slot(&self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

/// Everything that happened during one turn, in order, for the front-end to
/// animate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub player: Player,
    pub roll: u8,
    pub path: Vec<usize>,
    pub jump: Option<(JumpKind, Jump)>,
    pub final_cell: usize,
    pub winner: Option<Player>,
}

#[derive(Debug, Clone)]
pub struct LaddersGameState {
    pub mode: GameMode,
    pub positions: [usize; 2],
    pub current_player: Player,
    pub winner: Option<Player>,
    pub last_roll: Option<u8>,
}

impl LaddersGameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            positions: [START_CELL; 2],
            current_player: Player::One,
            winner: None,
            last_roll: None,
        }
    }

    pub fn position(&self, player: Player) -> usize {
        self.positions[player.slot()]
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Player two is automated in [`GameMode::VsComputer`].
    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::VsComputer && !self.is_over() && self.current_player == Player::Two
    }

    pub fn roll_die(rng: &mut SessionRng) -> u8 {
        rng.random_range(1..=DIE_FACES)
    }

    pub fn play_human_turn(&mut self, rng: &mut SessionRng) -> Result<TurnReport, IllegalMove> {
        if self.is_over() {
            return Err(IllegalMove::GameOver);
        }
        if self.is_computer_turn() {
            return Err(IllegalMove::NotYourTurn);
        }
        let roll = Self::roll_die(rng);
        self.advance(roll)
    }

    pub fn play_computer_turn(&mut self, rng: &mut SessionRng) -> Result<TurnReport, IllegalMove> {
        if self.is_over() {
            return Err(IllegalMove::GameOver);
        }
        if !self.is_computer_turn() {
            return Err(IllegalMove::NotYourTurn);
        }
        let roll = Self::roll_die(rng);
        self.advance(roll)
    }

    /// Moves the current player `roll` cells, applies at most one snake or
    /// ladder, then either declares the winner or passes the turn.
    pub fn advance(&mut self, roll: u8) -> Result<TurnReport, IllegalMove> {
        if self.is_over() {
            return Err(IllegalMove::GameOver);
        }
        if !(1..=DIE_FACES).contains(&roll) {
            return Err(IllegalMove::InvalidRoll(roll));
        }

        let player = self.current_player;
        let path = walk(self.position(player), roll);
        let landed = path.last().copied().unwrap_or(self.position(player));

        let jump = jump_from(landed);
        let final_cell = jump.map(|(_, j)| j.to).unwrap_or(landed);

        self.positions[player.slot()] = final_cell;
        self.last_roll = Some(roll);

        if final_cell == FINAL_CELL {
            self.winner = Some(player);
            log!("ladders: player {} wins", player.number());
        } else {
            self.current_player = player.other();
        }

        Ok(TurnReport {
            player,
            roll,
            path,
            jump,
            final_cell,
            winner: self.winner,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.mode);
    }
}
