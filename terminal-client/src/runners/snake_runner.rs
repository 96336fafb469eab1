use std::time::Duration;

use arcade_common::games::SessionRng;
use arcade_common::games::snake::{SnakeGameState, SnakeSettings, TickOutcome};
use arcade_common::log;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

use crate::console::Console;
use crate::input::{SnakeInput, parse_snake_input};
use crate::render::render_snake;

use super::{FileScoreboard, report_store_error};

const CONTROLS: &str = "w/a/s/d + Enter to steer, p pause, r reset, q quit";

fn new_ticker(period: Duration) -> Interval {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

fn draw(console: &Console, state: &SnakeGameState, high_score: u32) {
    console.clear_screen();
    println!("{}", render_snake(state, high_score));
    println!("{}", CONTROLS);
}

fn submit_score(scoreboard: &FileScoreboard, score: u32, high_score: u32) -> u32 {
    match scoreboard.submit_snake_score(score) {
        Ok((record, true)) => {
            log!("snake: new high score {}", record.high_score);
            record.high_score
        }
        Ok((record, false)) => record.high_score,
        Err(e) => {
            report_store_error("Failed to save snake high score", e);
            high_score.max(score)
        }
    }
}

pub async fn run_snake_game(
    console: &mut Console,
    scoreboard: &FileScoreboard,
    rng: &mut SessionRng,
) -> std::io::Result<()> {
    let mut state = SnakeGameState::new(SnakeSettings::default(), rng);
    let mut high_score = match scoreboard.snake.load() {
        Ok(record) => record.high_score,
        Err(e) => {
            report_store_error("Failed to read snake high score", e);
            0
        }
    };
    let mut ticker = new_ticker(state.tick_interval);

    log!("snake: new game, seed {}", rng.seed());
    draw(console, &state, high_score);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let outcome = state.update(rng);
                match outcome {
                    TickOutcome::Ate => ticker = new_ticker(state.tick_interval),
                    TickOutcome::Died(_) => {
                        high_score = submit_score(scoreboard, state.score, high_score);
                    }
                    TickOutcome::Idle | TickOutcome::Moved => {}
                }
                if outcome != TickOutcome::Idle {
                    draw(console, &state, high_score);
                }
            }
            line = console.read_line() => {
                let Some(line) = line? else {
                    break;
                };
                match parse_snake_input(&line) {
                    Some(SnakeInput::Turn(direction)) => {
                        state.set_direction(direction);
                    }
                    Some(SnakeInput::Pause) => state.toggle_pause(),
                    Some(SnakeInput::Reset) => {
                        state.reset(rng);
                        ticker = new_ticker(state.tick_interval);
                    }
                    Some(SnakeInput::Quit) => break,
                    None => {}
                }
                draw(console, &state, high_score);
            }
        }
    }

    Ok(())
}
