use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Line-oriented stdin shared by every game loop.
pub struct Console {
    lines: Lines<BufReader<Stdin>>,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// Next trimmed line, or `None` on end of input. Cancel safe, so it can
    /// sit in a `select!` next to a timer.
    pub async fn read_line(&mut self) -> std::io::Result<Option<String>> {
        let line = self.lines.next_line().await?;
        Ok(line.map(|l| l.trim().to_string()))
    }

    pub fn prompt(&self, text: &str) {
        print!("{} ", text);
        let _ = std::io::stdout().flush();
    }

    pub fn clear_screen(&self) {
        print!("\x1B[2J\x1B[H");
        let _ = std::io::stdout().flush();
    }
}
