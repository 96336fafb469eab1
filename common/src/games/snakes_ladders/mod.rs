mod board;
mod game_state;

pub use board::{
    BOARD_SIDE, DIE_FACES, FINAL_CELL, Jump, JumpKind, LADDERS, SNAKES, START_CELL, cell_number,
    jump_from, walk,
};
pub use game_state::{LaddersGameState, Player, TurnReport};
