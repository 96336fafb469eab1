use std::path::PathBuf;

use arcade_common::games::GameMode;
use arcade_common::games::tictactoe::Difficulty;
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};

use crate::config::{LaddersConfig, TicTacToeConfig};

#[derive(Parser, Debug)]
#[command(name = "arcade", version, about = "Tic-tac-toe, snake and snakes & ladders in the terminal")]
pub struct Args {
    /// Where settings and scores are kept. Defaults to a folder next to the executable.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Also log engine traces.
    #[arg(long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true)]
    pub use_log_prefix: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(name = "tictactoe")]
    TicTacToe(TicTacToeArgs),
    Snake(SeedArgs),
    Ladders(LaddersArgs),
    Scores {
        /// Zero every tally before printing.
        #[arg(long)]
        reset: bool,
    },
}

#[derive(ClapArgs, Debug)]
pub struct SeedArgs {
    /// Seed for a reproducible session.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(ClapArgs, Debug)]
pub struct TicTacToeArgs {
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    #[arg(long, value_enum)]
    pub difficulty: Option<DifficultyArg>,

    /// The computer opens the game.
    #[arg(long)]
    pub computer_first: bool,

    #[command(flatten)]
    pub seed: SeedArgs,
}

#[derive(ClapArgs, Debug)]
pub struct LaddersArgs {
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    #[command(flatten)]
    pub seed: SeedArgs,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeArg {
    Local,
    Computer,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Local => GameMode::Local,
            ModeArg::Computer => GameMode::VsComputer,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(difficulty: DifficultyArg) -> Self {
        match difficulty {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

impl TicTacToeArgs {
    /// Stored settings with this session's flags applied on top.
    pub fn apply_to(&self, stored: &TicTacToeConfig) -> TicTacToeConfig {
        let mut cfg = stored.clone();
        if let Some(mode) = self.mode {
            cfg.mode = mode.into();
        }
        if let Some(difficulty) = self.difficulty {
            cfg.difficulty = difficulty.into();
        }
        if self.computer_first {
            cfg.mode = GameMode::VsComputer;
            cfg.first_mark = cfg.computer_mark;
        }
        cfg
    }
}

impl LaddersArgs {
    pub fn apply_to(&self, stored: &LaddersConfig) -> LaddersConfig {
        let mut cfg = stored.clone();
        if let Some(mode) = self.mode {
            cfg.mode = mode.into();
        }
        cfg
    }
}
