//! Win tallies and high scores, each stored under its own fixed key.

use serde::{Deserialize, Serialize};

use crate::games::snakes_ladders::Player;
use crate::games::tictactoe::Mark;
use crate::storage::{KeyValueStore, Record, RecordManager, Validate};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeTally {
    #[serde(rename = "X", default)]
    pub x: u32,
    #[serde(rename = "O", default)]
    pub o: u32,
}

impl TicTacToeTally {
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
            Mark::Empty => 0,
        }
    }

    pub fn record_win(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x = self.x.saturating_add(1),
            Mark::O => self.o = self.o.saturating_add(1),
            Mark::Empty => {}
        }
    }
}

impl Validate for TicTacToeTally {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl Record for TicTacToeTally {
    const KEY: &'static str = "tictactoe-scores";
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakeHighScore {
    pub high_score: u32,
}

impl SnakeHighScore {
    /// Keeps `score` if it beats the record. Returns whether it did.
    pub fn submit(&mut self, score: u32) -> bool {
        if score > self.high_score {
            self.high_score = score;
            true
        } else {
            false
        }
    }
}

impl Validate for SnakeHighScore {
    fn validate(&self) -> Result<(), String> {
        if self.high_score % crate::games::snake::FOOD_SCORE != 0 {
            return Err(format!(
                "High score {} is not a multiple of {}",
                self.high_score,
                crate::games::snake::FOOD_SCORE
            ));
        }
        Ok(())
    }
}

impl Record for SnakeHighScore {
    const KEY: &'static str = "snake-highscore";
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaddersTally {
    #[serde(rename = "1", default)]
    pub player_one: u32,
    #[serde(rename = "2", default)]
    pub player_two: u32,
}

impl LaddersTally {
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player_one,
            Player::Two => self.player_two,
        }
    }

    pub fn record_win(&mut self, player: Player) {
        match player {
            Player::One => self.player_one = self.player_one.saturating_add(1),
            Player::Two => self.player_two = self.player_two.saturating_add(1),
        }
    }
}

impl Validate for LaddersTally {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl Record for LaddersTally {
    const KEY: &'static str = "snakes-scores";
}

/// All persisted scores behind one store. Read once at startup, written after
/// every finished game.
pub struct Scoreboard<TStore>
where
    TStore: KeyValueStore + Clone,
{
    pub tictactoe: RecordManager<TStore, TicTacToeTally>,
    pub snake: RecordManager<TStore, SnakeHighScore>,
    pub ladders: RecordManager<TStore, LaddersTally>,
}

impl<TStore> Scoreboard<TStore>
where
    TStore: KeyValueStore + Clone,
{
    pub fn new(store: TStore) -> Self {
        Self {
            tictactoe: RecordManager::yaml(store.clone()),
            snake: RecordManager::yaml(store.clone()),
            ladders: RecordManager::yaml(store),
        }
    }

    pub fn record_tictactoe_win(&self, mark: Mark) -> Result<TicTacToeTally, String> {
        self.tictactoe.update(|tally| tally.record_win(mark))
    }

    /// Returns the stored high score and whether `score` set a new one.
    pub fn submit_snake_score(&self, score: u32) -> Result<(SnakeHighScore, bool), String> {
        let mut record = self.snake.load()?;
        if record.submit(score) {
            self.snake.save(&record)?;
            return Ok((record, true));
        }
        Ok((record, false))
    }

    pub fn record_ladders_win(&self, player: Player) -> Result<LaddersTally, String> {
        self.ladders.update(|tally| tally.record_win(player))
    }

    pub fn reset_all(&self) -> Result<(), String> {
        self.tictactoe.reset()?;
        self.snake.reset()?;
        self.ladders.reset()?;
        Ok(())
    }
}
