use super::Keyboard;
use super::Keyish;

/// Plain key, one usage code while pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    Unpressed { key: Keyboard },
    Pressed { key: Keyboard },
}

impl Keyish for ButtonState {
    fn is_finished(&self) -> bool {
        matches!(self, ButtonState::Unpressed { .. })
    }
}

impl ButtonState {
    pub fn new(key: Keyboard) -> Self {
        Self::Unpressed { key }
    }

    pub fn key_transition(&mut self, pressed: bool) {
        match *self {
            Self::Unpressed { key } if pressed => *self = Self::Pressed { key },
            Self::Pressed { key } if !pressed => *self = Self::Unpressed { key },
            _ => (),
        }
    }

    pub fn get_key(&self) -> Option<Keyboard> {
        match self {
            Self::Unpressed { .. } => None,
            Self::Pressed { key } => Some(*key),
        }
    }
}

/// Several usage codes sent together while pressed, e.g. shifted symbols
/// or the undo/redo shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChordState {
    Unpressed { keys: &'static [Keyboard] },
    Pressed { keys: &'static [Keyboard] },
}

impl Keyish for ChordState {
    fn is_finished(&self) -> bool {
        matches!(self, ChordState::Unpressed { .. })
    }
}

impl ChordState {
    pub fn new(keys: &'static [Keyboard]) -> Self {
        Self::Unpressed { keys }
    }

    pub fn chord_transition(&mut self, pressed: bool) {
        match *self {
            Self::Unpressed { keys } if pressed => *self = Self::Pressed { keys },
            Self::Pressed { keys } if !pressed => *self = Self::Unpressed { keys },
            _ => (),
        }
    }

    pub fn get_keys(&self) -> &'static [Keyboard] {
        match self {
            Self::Unpressed { .. } => &[],
            Self::Pressed { keys } => keys,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn button_unpressed() {
        let mut state = ButtonState::new(Keyboard::A);
        assert_eq!(state.get_key(), None);
        assert!(state.is_finished());
        state.key_transition(false);
        assert_eq!(state.get_key(), None);
        assert!(state.is_finished());
    }

    #[test]
    fn button_press_release() {
        let mut state = ButtonState::new(Keyboard::A);
        state.key_transition(true);
        assert_eq!(state.get_key(), Some(Keyboard::A));
        assert!(!state.is_finished());
        state.key_transition(true);
        assert_eq!(state.get_key(), Some(Keyboard::A));
        state.key_transition(false);
        assert_eq!(state.get_key(), None);
        assert!(state.is_finished());
    }

    #[test]
    fn chord_press_release() {
        let mut state = ChordState::new(&[Keyboard::LeftGUI, Keyboard::Z]);
        assert_eq!(state.get_keys(), &[]);
        state.chord_transition(true);
        assert_eq!(state.get_keys(), &[Keyboard::LeftGUI, Keyboard::Z]);
        state.chord_transition(false);
        assert_eq!(state.get_keys(), &[]);
        assert!(state.is_finished());
    }
}
