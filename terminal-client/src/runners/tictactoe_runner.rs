use arcade_common::IllegalMove;
use arcade_common::games::SessionRng;
use arcade_common::games::tictactoe::{Mark, TicTacToeGameState};
use arcade_common::{log, log_debug};

use crate::config::TicTacToeConfig;
use crate::console::Console;
use crate::input::{TicTacToeInput, parse_tictactoe_input};
use crate::render::{describe_tictactoe_outcome, render_tictactoe};

use super::{FileScoreboard, report_store_error};

fn describe_rejection(error: IllegalMove) -> String {
    match error {
        IllegalMove::CellOccupied(index) => format!("Cell {} is already taken", index + 1),
        other => other.to_string(),
    }
}

fn record_result(scoreboard: &FileScoreboard, state: &TicTacToeGameState) {
    let Some(winner) = state.outcome.winner() else {
        return;
    };
    match scoreboard.record_tictactoe_win(winner) {
        Ok(tally) => println!("Wins  X: {}  O: {}", tally.wins(Mark::X), tally.wins(Mark::O)),
        Err(e) => report_store_error("Failed to save tic-tac-toe tally", e),
    }
}

pub async fn run_tictactoe_game(
    console: &mut Console,
    scoreboard: &FileScoreboard,
    cfg: &TicTacToeConfig,
    rng: &mut SessionRng,
) -> std::io::Result<()> {
    let mut state = TicTacToeGameState::new(cfg.mode, cfg.first_mark, cfg.computer_mark);
    let mut message: Option<String> = None;

    log!(
        "tictactoe: {:?} game, {} difficulty, {} opens, seed {}",
        cfg.mode,
        cfg.difficulty,
        state.first_mark,
        rng.seed()
    );

    loop {
        console.clear_screen();
        println!("{}\n", render_tictactoe(&state));
        if let Some(text) = message.take() {
            println!("{}", text);
        }

        if state.is_over() {
            println!("{}", describe_tictactoe_outcome(&state.outcome));
            record_result(scoreboard, &state);
            console.prompt("Enter for a new game, q to quit:");
            match console.read_line().await? {
                None => break,
                Some(line) if parse_tictactoe_input(&line) == Some(TicTacToeInput::Quit) => break,
                Some(_) => state.reset(),
            }
            continue;
        }

        if state.is_computer_turn() {
            println!("Computer ({}) is thinking...", state.computer_mark);
            tokio::time::sleep(cfg.bot_delay()).await;
            match state.play_computer_turn(cfg.difficulty, rng) {
                Ok(index) => log_debug!("tictactoe: computer played cell {}", index),
                Err(e) => {
                    log!("tictactoe: computer could not move: {}", e);
                    break;
                }
            }
            continue;
        }

        console.prompt(&format!("{} to move (1-9, r reset, q quit):", state.current_mark));
        let Some(line) = console.read_line().await? else {
            break;
        };

        match parse_tictactoe_input(&line) {
            Some(TicTacToeInput::Place(index)) => {
                if let Err(e) = state.place_human_mark(index) {
                    message = Some(describe_rejection(e));
                }
            }
            Some(TicTacToeInput::Reset) => state.reset(),
            Some(TicTacToeInput::Quit) => break,
            None => message = Some(format!("Unknown input '{}'", line)),
        }
    }

    Ok(())
}
