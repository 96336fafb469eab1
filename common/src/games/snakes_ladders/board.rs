pub const START_CELL: usize = 1;
pub const FINAL_CELL: usize = 100;
pub const BOARD_SIDE: usize = 10;
pub const DIE_FACES: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jump {
    pub from: usize,
    pub to: usize,
}

const fn jump(from: usize, to: usize) -> Jump {
    Jump { from, to }
}

pub const SNAKES: [Jump; 8] = [
    jump(17, 7),
    jump(54, 34),
    jump(62, 19),
    jump(64, 60),
    jump(87, 36),
    jump(93, 73),
    jump(95, 75),
    jump(98, 79),
];

pub const LADDERS: [Jump; 7] = [
    jump(4, 14),
    jump(9, 31),
    jump(21, 42),
    jump(28, 84),
    jump(51, 67),
    jump(72, 91),
    jump(80, 99),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Snake,
    Ladder,
}

/// The snake or ladder starting on `cell`, if any.
pub fn jump_from(cell: usize) -> Option<(JumpKind, Jump)> {
    if let Some(snake) = SNAKES.iter().find(|s| s.from == cell) {
        return Some((JumpKind::Snake, *snake));
    }
    LADDERS
        .iter()
        .find(|l| l.from == cell)
        .map(|ladder| (JumpKind::Ladder, *ladder))
}

/// Cells visited one step at a time from `start`. Reaching the final cell
/// with steps left turns the walk around; walking back stops on the start
/// cell.
pub fn walk(start: usize, steps: u8) -> Vec<usize> {
    let mut path = Vec::with_capacity(steps as usize);
    let mut current = start;
    let mut forward = true;

    for _ in 0..steps {
        if current >= FINAL_CELL {
            forward = false;
        }
        if !forward && current <= START_CELL {
            break;
        }
        current = if forward { current + 1 } else { current - 1 };
        path.push(current);
    }

    path
}

/// Cell number shown at `display_index` (row-major from the top-left). Rows
/// alternate direction so that 1 is bottom-left and 100 top-left.
pub fn cell_number(display_index: usize) -> usize {
    let row = display_index / BOARD_SIDE;
    let col = display_index % BOARD_SIDE;
    let row_start = FINAL_CELL - row * BOARD_SIDE;
    if row % 2 == 0 {
        row_start - col
    } else {
        row_start - (BOARD_SIDE - 1) + col
    }
}
