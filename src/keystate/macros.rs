//! Text macros: a key press types out a fixed string.

use heapless::Vec;

use super::Keyboard;
use super::Keyish;
use crate::text::from_ascii;

/// The emoji shortcodes bound in the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MacroId {
    ThumbsUp,
    ThumbsDown,
    Joy,
    Rocket,
}

impl MacroId {
    pub const fn text(self) -> &'static str {
        match self {
            Self::ThumbsUp => ":+1:",
            Self::ThumbsDown => ":-1:",
            Self::Joy => ":joy:",
            Self::Rocket => ":rocket:",
        }
    }
}

/// Plays the macro text one character per scan, so consecutive reports
/// never coalesce two characters. Release does not cut playback short; the
/// string always lands exactly once per press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MacroState {
    Idle { id: MacroId },
    Playing { id: MacroId, pos: usize },
    /// Played to the end but the key is still down
    Spent { id: MacroId },
}

impl Keyish for MacroState {
    fn is_finished(&self) -> bool {
        matches!(self, MacroState::Idle { .. })
    }
}

impl MacroState {
    pub fn new(id: MacroId) -> Self {
        Self::Idle { id }
    }

    pub fn macro_transition(&mut self, pressed: bool) {
        match *self {
            Self::Idle { id } if pressed => *self = Self::Playing { id, pos: 0 },
            Self::Idle { .. } => (),

            Self::Playing { id, pos } => {
                if pos + 1 < id.text().len() {
                    *self = Self::Playing { id, pos: pos + 1 };
                } else if pressed {
                    *self = Self::Spent { id };
                } else {
                    *self = Self::Idle { id };
                }
            }

            Self::Spent { id } if !pressed => *self = Self::Idle { id },
            Self::Spent { .. } => (),
        }
    }

    /// Codes for the character under the cursor, shift chord included.
    pub fn get_keys(&self) -> Vec<Keyboard, 2> {
        let mut keys = Vec::new();
        if let Self::Playing { id, pos } = self {
            if let Some((code, shifted)) = from_ascii(id.text().as_bytes()[*pos]) {
                if shifted {
                    keys.push(Keyboard::LeftShift).ok();
                }
                keys.push(code).ok();
            }
        }
        keys
    }
}
