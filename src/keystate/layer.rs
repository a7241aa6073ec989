use super::Keyish;
use super::Layer;

use heapless::Vec;

/// Momentary layer key. While pressed its target layer sits on the active
/// stack; the topmost stack entry wins when keys latch a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayerState {
    Unpressed { layer: Layer },
    Active { layer: Layer },
}

impl Keyish for LayerState {
    fn is_finished(&self) -> bool {
        matches!(self, LayerState::Unpressed { .. })
    }
}

impl LayerState {
    pub fn new(layer: Layer) -> Self {
        Self::Unpressed { layer }
    }

    pub fn layer_transition<const N: usize>(&mut self, pressed: bool, layers: &mut Vec<Layer, N>) {
        match *self {
            Self::Unpressed { layer } if pressed => {
                layers.retain(|active| active != &layer);
                layers.push(layer).ok();
                *self = Self::Active { layer };
            }
            Self::Active { layer } if !pressed => {
                layers.retain(|active| active != &layer);
                *self = Self::Unpressed { layer };
            }
            _ => (),
        }
    }
}
