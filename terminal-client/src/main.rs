mod cli;
mod config;
mod console;
mod input;
mod render;
mod runners;

use arcade_common::games::SessionRng;
use arcade_common::scores::Scoreboard;
use arcade_common::storage::FileKeyValueStore;
use arcade_common::{log, logger};
use clap::Parser;

use cli::{Args, Command};
use config::{Settings, default_data_dir, get_settings_manager};
use console::Console;

fn session_rng(seed: Option<u64>) -> SessionRng {
    match seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Arcade".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let data_dir = args.data_dir.clone().unwrap_or_else(default_data_dir);
    let store = FileKeyValueStore::new(data_dir);
    log!("Using data directory {}", store.directory().display());

    let settings_manager = get_settings_manager(store.clone());
    let settings = match settings_manager.load_or_create() {
        Ok(settings) => settings,
        Err(e) => {
            log!("Failed to load settings, using defaults for this session: {}", e);
            eprintln!("Settings could not be read, using defaults: {}", e);
            Settings::default()
        }
    };

    let scoreboard = Scoreboard::new(store);
    let mut console = Console::new();

    match args.command {
        Command::TicTacToe(ttt) => {
            let cfg = ttt.apply_to(&settings.tictactoe);
            let mut rng = session_rng(ttt.seed.seed);
            runners::run_tictactoe_game(&mut console, &scoreboard, &cfg, &mut rng).await?;
        }
        Command::Snake(seed) => {
            let mut rng = session_rng(seed.seed);
            runners::run_snake_game(&mut console, &scoreboard, &mut rng).await?;
        }
        Command::Ladders(ladders) => {
            let cfg = ladders.apply_to(&settings.ladders);
            let mut rng = session_rng(ladders.seed.seed);
            runners::run_ladders_game(&mut console, &scoreboard, &cfg, &mut rng).await?;
        }
        Command::Scores { reset } => {
            runners::run_scores_command(&scoreboard, reset)?;
        }
    }

    Ok(())
}
