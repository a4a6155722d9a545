use serde::{Deserialize, Serialize};

use crate::symbol::deserialize_board;
use crate::*;

/// Overall game status reported by the engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Initial,
    Running,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn as_str(self) -> &'static str {
        use GameStatus::*;
        match self {
            Initial => "Initial",
            Running => "Running",
            Won => "Won",
            Lost => "Lost",
        }
    }

    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }
}

/// Authoritative board state pushed by the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: GameStatus,
    /// Remaining mines, only meaningful while [`GameStatus::Running`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bombs: Option<i32>,
    /// Row-major cell symbols.
    #[serde(deserialize_with = "deserialize_board")]
    pub board: Vec<CellSymbol>,
}

impl Snapshot {
    /// Parses the engine's raw output. Line breaks are dropped first since
    /// the engine may pretty-print or wrap the board.
    pub fn parse(raw: &str) -> Result<Self> {
        let flat: String = raw.chars().filter(|&c| c != '\r' && c != '\n').collect();
        Ok(serde_json::from_str(&flat)?)
    }

    /// Remaining mines if the snapshot carries a meaningful count.
    pub fn mines_left(&self) -> Option<i32> {
        self.bombs.filter(|_| self.state.is_running())
    }
}
