use serde::{Deserialize, Serialize};

/// Which button finished a press, as understood by the engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveButton {
    #[serde(rename = "left")]
    Left,
    #[serde(rename = "right")]
    Right,
    /// No single button was tracked during the press.
    #[serde(rename = "N/A")]
    NotApplicable,
}

/// A completed click, reported to the engine on every pointer release.
///
/// Releases outside the board use `-1` for both coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    #[serde(rename = "coordinatesY")]
    pub row: i32,
    #[serde(rename = "coordinatesX")]
    pub col: i32,
    pub button: MoveButton,
}

impl MoveRequest {
    pub const OFF_BOARD: i32 = -1;

    pub fn at((row, col): (u16, u16), button: MoveButton) -> Self {
        Self {
            row: row.into(),
            col: col.into(),
            button,
        }
    }

    pub const fn off_board(button: MoveButton) -> Self {
        Self {
            row: Self::OFF_BOARD,
            col: Self::OFF_BOARD,
            button,
        }
    }
}
