use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Two people sharing the same terminal.
    #[default]
    Local,
    VsComputer,
}
