//! Per-key state machines and the keymap that drives them once per scan.

use heapless::Vec;
pub use usbd_human_interface_device::page::Keyboard;

pub mod button;
pub mod dance;
pub mod layer;
pub mod macros;
/// Shorthand for `use keystate::Keyboard::*` plus the common modifier names
pub mod prelude;

use button::{ButtonState, ChordState};
use dance::{DanceAction, DanceConfig, DanceState};
use layer::LayerState;
use macros::{MacroId, MacroState};

/// Something which is like a key (button, layer, dance etc)
trait Keyish {
    /// Whether this can move on to the current layer, or the MCU go to
    /// sleep (if all keys are finished)
    fn is_finished(&self) -> bool;
}

pub type Layer = u8;
pub type Duration = u64;
pub type Instant = u64;

/// What a position on one layer does. The layout is a grid of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    Key(Keyboard),
    Chord(&'static [Keyboard]),
    MomentaryLayer(Layer),
    Macro(MacroId),
    Dance(DanceAction),
    /// Falls through to the next active layer below
    Transparent,
}

/// Actual keys containing key-state
#[derive(Debug, PartialEq, Eq)]
enum KeyState {
    Button(ButtonState),
    Chord(ChordState),
    Layer(LayerState),
    Macro(MacroState),
    Dance(DanceState),
    Transparent,
}

impl KeyState {
    fn new(action: KeyAction) -> Self {
        match action {
            KeyAction::Key(key) => KeyState::Button(ButtonState::new(key)),
            KeyAction::Chord(keys) => KeyState::Chord(ChordState::new(keys)),
            KeyAction::MomentaryLayer(layer) => KeyState::Layer(LayerState::new(layer)),
            KeyAction::Macro(id) => KeyState::Macro(MacroState::new(id)),
            KeyAction::Dance(action) => KeyState::Dance(DanceState::new(action)),
            KeyAction::Transparent => KeyState::Transparent,
        }
    }
}

impl Keyish for KeyState {
    fn is_finished(&self) -> bool {
        match self {
            KeyState::Button(button) => button.is_finished(),
            KeyState::Chord(chord) => chord.is_finished(),
            KeyState::Layer(layer) => layer.is_finished(),
            KeyState::Macro(macro_) => macro_.is_finished(),
            KeyState::Dance(dance) => dance.is_finished(),
            KeyState::Transparent => true,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Keys<const LAYERS: usize> {
    current: Layer,
    layers: [KeyState; LAYERS],
}

#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeymapFlags {
    pub rollover: bool,
}

#[derive(Debug)]
pub struct Keymap<const SIZE: usize, const LAYERS: usize> {
    dance_config: DanceConfig,
    layers: Vec<Layer, LAYERS>,
    keys: [Keys<LAYERS>; SIZE],
    /// Previous scan, for spotting fresh presses that interrupt a dance
    held: [bool; SIZE],
    pub flags: KeymapFlags,
}

impl<const SIZE: usize, const LAYERS: usize> Keymap<SIZE, LAYERS> {
    pub fn new(keymap: [[KeyAction; SIZE]; LAYERS], tapping_term: Duration) -> Self {
        let keys: [Keys<LAYERS>; SIZE] = core::array::from_fn(|key| Keys {
            current: 0,
            layers: core::array::from_fn(|layer| KeyState::new(keymap[layer][key])),
        });
        Keymap {
            dance_config: DanceConfig { tapping_term },
            keys,
            layers: Default::default(),
            held: [false; SIZE],
            flags: Default::default(),
        }
    }

    /// Run every position through its state machine for one scan,
    /// collecting the usage codes to report. Overflowing `ROLLOVER` sets
    /// the rollover flag instead of dropping silently.
    pub fn process<const ROLLOVER: usize>(
        &mut self,
        keypresses: &[bool; SIZE],
        keys: &mut Vec<Keyboard, ROLLOVER>,
        now: Instant,
    ) {
        let fresh_presses = self
            .held
            .iter()
            .zip(keypresses)
            .filter(|(held, pressed)| !**held && **pressed)
            .count();

        for (i, (key, &pressed)) in self.keys.iter_mut().zip(keypresses).enumerate() {
            if key.layers[key.current as usize].is_finished() {
                key.current = latch_layer(&self.layers, &key.layers);
            }
            let fresh_here = !self.held[i] && pressed;
            let interrupted = fresh_presses > usize::from(fresh_here);

            match &mut key.layers[key.current as usize] {
                KeyState::Button(state) => {
                    state.key_transition(pressed);
                    if let Some(key) = state.get_key() {
                        if keys.push(key).is_err() {
                            self.flags.rollover = true;
                        }
                    }
                }
                KeyState::Chord(state) => {
                    state.chord_transition(pressed);
                    for key in state.get_keys() {
                        if keys.push(*key).is_err() {
                            self.flags.rollover = true;
                        }
                    }
                }
                KeyState::Layer(state) => state.layer_transition(pressed, &mut self.layers),
                KeyState::Macro(state) => {
                    state.macro_transition(pressed);
                    for key in state.get_keys() {
                        if keys.push(key).is_err() {
                            self.flags.rollover = true;
                        }
                    }
                }
                KeyState::Dance(state) => {
                    state.dance_transition(pressed, interrupted, now, &self.dance_config);
                    if let Some(key) = state.get_key() {
                        if keys.push(key).is_err() {
                            self.flags.rollover = true;
                        }
                    }
                }
                KeyState::Transparent => (),
            }
        }
        self.held = *keypresses;
    }
}

/// Topmost active layer whose action for this key is not transparent,
/// falling back to base.
fn latch_layer<const LAYERS: usize>(active: &Vec<Layer, LAYERS>, layers: &[KeyState; LAYERS]) -> Layer {
    active
        .iter()
        .rev()
        .copied()
        .find(|layer| !matches!(layers[*layer as usize], KeyState::Transparent))
        .unwrap_or(0)
}
