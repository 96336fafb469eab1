use crate::render::render_scores;

use super::FileScoreboard;

pub fn run_scores_command(scoreboard: &FileScoreboard, reset: bool) -> Result<(), String> {
    if reset {
        scoreboard.reset_all()?;
        arcade_common::log!("scores: all tallies reset");
        println!("All scores reset.");
    }

    let tictactoe = scoreboard.tictactoe.load()?;
    let snake = scoreboard.snake.load()?;
    let ladders = scoreboard.ladders.load()?;
    println!("{}", render_scores(&tictactoe, &snake, &ladders));

    Ok(())
}
