use arcade_common::games::SessionRng;
use arcade_common::games::snakes_ladders::{LaddersGameState, Player, TurnReport};
use arcade_common::log;

use crate::config::LaddersConfig;
use crate::console::Console;
use crate::input::{LaddersInput, parse_ladders_input};
use crate::render::{describe_turn, render_ladders};

use super::{FileScoreboard, report_store_error};

fn print_tally(scoreboard: &FileScoreboard) {
    match scoreboard.ladders.load() {
        Ok(tally) => println!(
            "Wins  1: {}  2: {}",
            tally.wins(Player::One),
            tally.wins(Player::Two)
        ),
        Err(e) => report_store_error("Failed to read snakes and ladders tally", e),
    }
}

fn after_turn(scoreboard: &FileScoreboard, report: &TurnReport) -> String {
    if let Some(winner) = report.winner
        && let Err(e) = scoreboard.record_ladders_win(winner)
    {
        report_store_error("Failed to save snakes and ladders tally", e);
    }
    describe_turn(report)
}

pub async fn run_ladders_game(
    console: &mut Console,
    scoreboard: &FileScoreboard,
    cfg: &LaddersConfig,
    rng: &mut SessionRng,
) -> std::io::Result<()> {
    let mut state = LaddersGameState::new(cfg.mode);
    let mut message: Option<String> = None;

    log!("ladders: {:?} game, seed {}", cfg.mode, rng.seed());

    loop {
        console.clear_screen();
        println!("{}", render_ladders(&state));
        print_tally(scoreboard);
        if let Some(text) = message.take() {
            println!("{}", text);
        }

        if state.is_computer_turn() {
            println!("Computer is rolling...");
            tokio::time::sleep(cfg.bot_delay()).await;
            match state.play_computer_turn(rng) {
                Ok(report) => message = Some(after_turn(scoreboard, &report)),
                Err(e) => {
                    log!("ladders: computer could not move: {}", e);
                    break;
                }
            }
            continue;
        }

        let prompt = if state.is_over() {
            "Game over. r new game, c clear wins, q quit:".to_string()
        } else {
            format!(
                "Player {}: Enter to roll, r reset, c clear wins, q quit:",
                state.current_player.number()
            )
        };
        console.prompt(&prompt);
        let Some(line) = console.read_line().await? else {
            break;
        };

        match parse_ladders_input(&line) {
            Some(LaddersInput::Roll) => match state.play_human_turn(rng) {
                Ok(report) => message = Some(after_turn(scoreboard, &report)),
                Err(e) => message = Some(e.to_string()),
            },
            Some(LaddersInput::Reset) => state.reset(),
            Some(LaddersInput::ClearScores) => {
                if let Err(e) = scoreboard.ladders.reset() {
                    report_store_error("Failed to clear snakes and ladders tally", e);
                }
            }
            Some(LaddersInput::Quit) => break,
            None => message = Some(format!("Unknown input '{}'", line)),
        }
    }

    Ok(())
}
