use std::time::Duration;

pub const GRID_SIZE: usize = 15;
pub const INITIAL_TICK_MS: u64 = 160;
pub const TICK_DECREMENT_MS: u64 = 2;
pub const MIN_TICK_MS: u64 = 50;
pub const FOOD_SCORE: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeSettings {
    pub grid_size: usize,
    pub initial_tick: Duration,
    pub tick_decrement: Duration,
    pub min_tick: Duration,
    pub food_score: u32,
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            initial_tick: Duration::from_millis(INITIAL_TICK_MS),
            tick_decrement: Duration::from_millis(TICK_DECREMENT_MS),
            min_tick: Duration::from_millis(MIN_TICK_MS),
            food_score: FOOD_SCORE,
        }
    }
}

impl SnakeSettings {
    pub fn start_point(&self) -> super::Point {
        super::Point::new(self.grid_size / 2, self.grid_size / 2)
    }
}
