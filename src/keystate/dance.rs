//! Tap dance: one physical key resolving to different codes for a single
//! tap, a hold, or a quick double tap.

use super::Duration;
use super::Instant;
use super::Keyboard;
use super::Keyish;

#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DanceConfig {
    /// Time after the last press before an unfinished dance is classified
    pub tapping_term: Duration,
}

/// Codes a dance key can resolve to, per classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DanceAction {
    pub tap: Keyboard,
    pub hold: Keyboard,
    pub double_tap: Keyboard,
}

/// What happened over one dance sequence, observed when it finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DanceSequence {
    /// Presses seen so far
    pub count: u8,
    /// Another key was pressed before the dance finished
    pub interrupted: bool,
    /// The dance key is still down
    pub pressed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DanceKind {
    SingleTap,
    SingleHold,
    DoubleTap,
    /// Anything the dance does not map, e.g. a triple tap. Resolves to no
    /// code at all.
    Unhandled,
}

impl DanceSequence {
    /// An interrupted single press is a tap: the user was typing through
    /// the dance. An uninterrupted press still down at the tapping term is
    /// a hold. Everything past a clean double tap is left unhandled.
    pub fn classify(&self) -> DanceKind {
        match self.count {
            1 if self.interrupted || !self.pressed => DanceKind::SingleTap,
            1 => DanceKind::SingleHold,
            2 if !self.interrupted && !self.pressed => DanceKind::DoubleTap,
            _ => DanceKind::Unhandled,
        }
    }
}

impl DanceAction {
    fn code(&self, kind: DanceKind) -> Option<Keyboard> {
        match kind {
            DanceKind::SingleTap => Some(self.tap),
            DanceKind::SingleHold => Some(self.hold),
            DanceKind::DoubleTap => Some(self.double_tap),
            DanceKind::Unhandled => None,
        }
    }
}

/// The sequence record lives inside the in-flight state and dies with it,
/// so a finished dance can never leak into the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DanceState {
    Unpressed {
        action: DanceAction,
    },
    /// Collecting taps until the tapping term runs out or another key
    /// interrupts
    Dancing {
        action: DanceAction,
        seq: DanceSequence,
        deadline: Instant,
    },
    /// Classified; the resolved code is registered until release
    Resolved {
        action: DanceAction,
        kind: DanceKind,
        pressed: bool,
    },
}

impl Keyish for DanceState {
    fn is_finished(&self) -> bool {
        matches!(self, DanceState::Unpressed { .. })
    }
}

impl DanceState {
    pub fn new(action: DanceAction) -> Self {
        Self::Unpressed { action }
    }

    pub fn dance_transition(
        &mut self,
        pressed: bool,
        interrupted: bool,
        now: Instant,
        config: &DanceConfig,
    ) {
        match *self {
            Self::Unpressed { action } if pressed => {
                *self = Self::Dancing {
                    action,
                    seq: DanceSequence {
                        count: 1,
                        interrupted: false,
                        pressed: true,
                    },
                    deadline: now + config.tapping_term,
                }
            }
            Self::Unpressed { .. } => (),

            Self::Dancing {
                action,
                mut seq,
                mut deadline,
            } => {
                if now >= deadline {
                    *self = Self::resolve(action, seq);
                    return;
                }
                if pressed && !seq.pressed {
                    seq.count = seq.count.saturating_add(1);
                    deadline = now + config.tapping_term;
                }
                seq.pressed = pressed;
                if interrupted {
                    seq.interrupted = true;
                    *self = Self::resolve(action, seq);
                } else {
                    *self = Self::Dancing {
                        action,
                        seq,
                        deadline,
                    };
                }
            }

            Self::Resolved {
                action,
                pressed: was_pressed,
                ..
            } => {
                if !pressed {
                    // reset: unregister whatever was registered
                    *self = Self::Unpressed { action };
                } else if !was_pressed {
                    // a fresh press after a released resolution opens the
                    // next sequence
                    *self = Self::Dancing {
                        action,
                        seq: DanceSequence {
                            count: 1,
                            interrupted: false,
                            pressed: true,
                        },
                        deadline: now + config.tapping_term,
                    }
                }
            }
        }
    }

    fn resolve(action: DanceAction, seq: DanceSequence) -> Self {
        Self::Resolved {
            action,
            kind: seq.classify(),
            pressed: seq.pressed,
        }
    }

    pub fn get_key(&self) -> Option<Keyboard> {
        match self {
            Self::Unpressed { .. } | Self::Dancing { .. } => None,
            Self::Resolved { action, kind, .. } => action.code(*kind),
        }
    }
}
