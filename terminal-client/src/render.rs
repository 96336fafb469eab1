use arcade_common::games::snake::{DeathReason, Point, SnakeGameState};
use arcade_common::games::snakes_ladders::{
    BOARD_SIDE, JumpKind, LaddersGameState, Player, TurnReport, cell_number,
};
use arcade_common::games::tictactoe::{GameOutcome, Mark, SIDE, TicTacToeGameState};
use arcade_common::scores::{LaddersTally, SnakeHighScore, TicTacToeTally};

const ROW_SEPARATOR: &str = "---+---+---";

/// Free cells show the number to type; the winning line is bracketed.
pub fn render_tictactoe(state: &TicTacToeGameState) -> String {
    let winning_line = state.winning_line();
    let mut rows = Vec::with_capacity(SIDE);

    for row in 0..SIDE {
        let cells: Vec<String> = (0..SIDE)
            .map(|col| {
                let index = row * SIDE + col;
                let mark = state.board.get(index).unwrap_or_default();
                let on_line = winning_line.is_some_and(|line| line.contains(&index));
                match mark {
                    Mark::Empty => format!(" {} ", index + 1),
                    _ if on_line => format!("[{}]", mark),
                    _ => format!(" {} ", mark),
                }
            })
            .collect();
        rows.push(cells.join("|"));
    }

    rows.join(&format!("\n{}\n", ROW_SEPARATOR))
}

pub fn describe_tictactoe_outcome(outcome: &GameOutcome) -> String {
    match outcome {
        GameOutcome::Ongoing => String::new(),
        GameOutcome::Draw => "Draw!".to_string(),
        GameOutcome::Win(mark, line) => {
            let cells: Vec<String> = line.iter().map(|i| (i + 1).to_string()).collect();
            format!("{} wins on {}!", mark, cells.join("-"))
        }
    }
}

pub fn render_snake(state: &SnakeGameState, high_score: u32) -> String {
    let size = state.settings.grid_size;
    let head = state.snake.head();
    let border = format!("+{}+", "-".repeat(size));
    let mut out = String::with_capacity((size + 3) * (size + 4));

    out.push_str(&border);
    out.push('\n');
    for y in 0..size {
        out.push('|');
        for x in 0..size {
            let point = Point::new(x, y);
            let ch = if point == head {
                '@'
            } else if state.snake.occupies(&point) {
                'o'
            } else if state.food == Some(point) {
                '*'
            } else {
                ' '
            };
            out.push(ch);
        }
        out.push_str("|\n");
    }
    out.push_str(&border);
    out.push('\n');
    out.push_str(&format!("Score: {}  High score: {}", state.score, high_score));

    let status = match state.game_end_reason {
        Some(DeathReason::WallCollision) => Some("Game over: hit the wall"),
        Some(DeathReason::SelfCollision) => Some("Game over: bit itself"),
        None if state.paused => Some("Paused"),
        None => None,
    };
    if let Some(status) = status {
        out.push('\n');
        out.push_str(status);
    }

    out
}

fn ladders_token(state: &LaddersGameState, cell: usize) -> char {
    let one = state.position(Player::One) == cell;
    let two = state.position(Player::Two) == cell;
    match (one, two) {
        (true, true) => '*',
        (true, false) => '1',
        (false, true) => '2',
        (false, false) => ' ',
    }
}

/// 100 sits top-left; rows snake back and forth down to 1.
pub fn render_ladders(state: &LaddersGameState) -> String {
    let mut rows = Vec::with_capacity(BOARD_SIDE + 1);

    for row in 0..BOARD_SIDE {
        let cells: Vec<String> = (0..BOARD_SIDE)
            .map(|col| {
                let cell = cell_number(row * BOARD_SIDE + col);
                format!("{:>3}{}", cell, ladders_token(state, cell))
            })
            .collect();
        rows.push(cells.join(" "));
    }

    rows.push(format!(
        "Player 1: {}  Player 2: {}",
        state.position(Player::One),
        state.position(Player::Two)
    ));
    rows.join("\n")
}

pub fn describe_turn(report: &TurnReport) -> String {
    let from = report
        .path
        .first()
        .map(|first| first.saturating_sub(1))
        .unwrap_or(report.final_cell);
    let landed = report.path.last().copied().unwrap_or(report.final_cell);
    let mut text = format!(
        "Player {} rolled {}: {} -> {}",
        report.player.number(),
        report.roll,
        from,
        landed
    );

    if let Some((kind, jump)) = report.jump {
        let name = match kind {
            JumpKind::Snake => "snake",
            JumpKind::Ladder => "ladder",
        };
        text.push_str(&format!(", {} to {}", name, jump.to));
    }
    if let Some(winner) = report.winner {
        text.push_str(&format!(". Player {} wins!", winner.number()));
    }

    text
}

pub fn render_scores(tictactoe: &TicTacToeTally, snake: &SnakeHighScore, ladders: &LaddersTally) -> String {
    [
        format!(
            "Tic-tac-toe      X: {}  O: {}",
            tictactoe.wins(Mark::X),
            tictactoe.wins(Mark::O)
        ),
        format!("Snake            high score: {}", snake.high_score),
        format!(
            "Snakes & ladders 1: {}  2: {}",
            ladders.wins(Player::One),
            ladders.wins(Player::Two)
        ),
    ]
    .join("\n")
}
