use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use sweepview_protocol::MoveButton;

use crate::*;

bitflags! {
    /// Mirrors `MouseEvent.buttons`.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct MouseButtons: u16 {
        const LEFT    = 1;
        const RIGHT   = 1 << 1;
        const MIDDLE  = 1 << 2;
        const BACK    = 1 << 3;
        const FORWARD = 1 << 4;
    }
}

/// Button tracked for the duration of one press.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Button {
    Left,
    Right,
}

impl Button {
    /// Only a lone left or lone right button counts, chords are ignored.
    pub fn from_buttons(buttons: MouseButtons) -> Option<Self> {
        match buttons {
            MouseButtons::LEFT => Some(Self::Left),
            MouseButtons::RIGHT => Some(Self::Right),
            _ => None,
        }
    }
}

impl From<Button> for MoveButton {
    fn from(button: Button) -> Self {
        match button {
            Button::Left => MoveButton::Left,
            Button::Right => MoveButton::Right,
        }
    }
}

/// One pointer event as seen by the board.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerInput {
    pub pos: PixelPos,
    pub buttons: MouseButtons,
}

impl PointerInput {
    pub fn new(pos: impl Into<PixelPos>, buttons: MouseButtons) -> Self {
        Self {
            pos: pos.into(),
            buttons,
        }
    }
}

/// Pointer bookkeeping for the current interaction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerState {
    /// Last known position, off the board until the first event.
    pub pos: PixelPos,
    pub pressed: bool,
    pub button: Option<Button>,
}

impl PointerState {
    pub fn move_button(&self) -> MoveButton {
        self.button.map_or(MoveButton::NotApplicable, MoveButton::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_single_buttons_are_tracked() {
        assert_eq!(Button::from_buttons(MouseButtons::LEFT), Some(Button::Left));
        assert_eq!(Button::from_buttons(MouseButtons::RIGHT), Some(Button::Right));
        assert_eq!(
            Button::from_buttons(MouseButtons::LEFT | MouseButtons::RIGHT),
            None
        );
        assert_eq!(Button::from_buttons(MouseButtons::MIDDLE), None);
        assert_eq!(Button::from_buttons(MouseButtons::empty()), None);
    }

    #[test]
    fn fresh_pointer_is_off_board_and_released() {
        let state = PointerState::default();

        assert_eq!(state.pos, PixelPos::OFF_BOARD);
        assert!(!state.pressed);
        assert_eq!(state.button, None);
        assert_eq!(state.move_button(), MoveButton::NotApplicable);
    }
}
