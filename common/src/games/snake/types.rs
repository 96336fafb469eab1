#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell in `direction`, or `None` when it would leave a
    /// square grid of side `size`.
    pub fn step(&self, direction: Direction, size: usize) -> Option<Point> {
        match direction {
            Direction::Up => self.y.checked_sub(1).map(|y| Point::new(self.x, y)),
            Direction::Down => (self.y + 1 < size).then(|| Point::new(self.x, self.y + 1)),
            Direction::Left => self.x.checked_sub(1).map(|x| Point::new(x, self.y)),
            Direction::Right => (self.x + 1 < size).then(|| Point::new(self.x + 1, self.y)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Paused or already over; nothing moved.
    Idle,
    Moved,
    Ate,
    Died(DeathReason),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_inside_grid() {
        let p = Point::new(5, 5);

        assert_eq!(p.step(Direction::Up, 15), Some(Point::new(5, 4)));
        assert_eq!(p.step(Direction::Down, 15), Some(Point::new(5, 6)));
        assert_eq!(p.step(Direction::Left, 15), Some(Point::new(4, 5)));
        assert_eq!(p.step(Direction::Right, 15), Some(Point::new(6, 5)));
    }

    #[test]
    fn test_step_off_grid() {
        assert_eq!(Point::new(0, 0).step(Direction::Up, 15), None);
        assert_eq!(Point::new(0, 0).step(Direction::Left, 15), None);
        assert_eq!(Point::new(14, 14).step(Direction::Down, 15), None);
        assert_eq!(Point::new(14, 14).step(Direction::Right, 15), None);
    }
}
