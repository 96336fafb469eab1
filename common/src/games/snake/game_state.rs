use std::time::Duration;

use crate::games::SessionRng;
use crate::{log, log_debug};
use super::settings::SnakeSettings;
use super::snake::Snake;
use super::types::{DeathReason, Direction, Point, TickOutcome};

#[derive(Clone, Debug)]
pub struct SnakeGameState {
    pub snake: Snake,
    /// `None` only once the snake covers the whole grid.
    pub food: Option<Point>,
    pub score: u32,
    pub tick_interval: Duration,
    pub paused: bool,
    pub game_end_reason: Option<DeathReason>,
    pub settings: SnakeSettings,
}

impl SnakeGameState {
    /// A fresh game, paused until the player starts it.
    pub fn new(settings: SnakeSettings, rng: &mut SessionRng) -> Self {
        let snake = Snake::new(settings.start_point(), Direction::Up);
        let mut state = Self {
            snake,
            food: None,
            score: 0,
            tick_interval: settings.initial_tick,
            paused: true,
            game_end_reason: None,
            settings,
        };
        state.spawn_food(rng);
        state
    }

    pub fn is_over(&self) -> bool {
        self.game_end_reason.is_some()
    }

    pub fn is_running(&self) -> bool {
        !self.paused && !self.is_over()
    }

    /// Queues a turn for the next tick. Reversing onto the direction applied
    /// on the last tick is refused, as is steering a finished game.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.is_over() || direction.is_opposite(&self.snake.direction) {
            return false;
        }
        self.snake.pending_direction = Some(direction);
        true
    }

    pub fn toggle_pause(&mut self) {
        if !self.is_over() {
            self.paused = !self.paused;
        }
    }

    pub fn update(&mut self, rng: &mut SessionRng) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Idle;
        }

        if let Some(direction) = self.snake.pending_direction.take() {
            self.snake.direction = direction;
        }

        let next_head = match self.next_head() {
            Ok(point) => point,
            Err(reason) => {
                self.game_end_reason = Some(reason);
                self.paused = true;
                log!("snake: game over ({:?}) with score {}", reason, self.score);
                return TickOutcome::Died(reason);
            }
        };

        self.snake.push_head(next_head);

        if self.food == Some(next_head) {
            self.score += self.settings.food_score;
            self.tick_interval = self
                .tick_interval
                .saturating_sub(self.settings.tick_decrement)
                .max(self.settings.min_tick);
            log_debug!(
                "snake: ate at ({}, {}), score {}, tick {:?}",
                next_head.x,
                next_head.y,
                self.score,
                self.tick_interval
            );
            self.spawn_food(rng);
            TickOutcome::Ate
        } else {
            self.snake.drop_tail();
            TickOutcome::Moved
        }
    }

    /// Back to the initial layout, already running.
    pub fn reset(&mut self, rng: &mut SessionRng) {
        let settings = self.settings.clone();
        *self = Self::new(settings, rng);
        self.paused = false;
    }

    // The whole pre-move body counts, tail included.
    fn next_head(&self) -> Result<Point, DeathReason> {
        let next = self
            .snake
            .head()
            .step(self.snake.direction, self.settings.grid_size)
            .ok_or(DeathReason::WallCollision)?;

        if self.snake.occupies(&next) {
            return Err(DeathReason::SelfCollision);
        }
        Ok(next)
    }

    fn spawn_food(&mut self, rng: &mut SessionRng) {
        let size = self.settings.grid_size;
        let free: Vec<Point> = (0..size)
            .flat_map(|y| (0..size).map(move |x| Point::new(x, y)))
            .filter(|p| !self.snake.occupies(p))
            .collect();
        self.food = rng.pick(&free).copied();
    }
}
