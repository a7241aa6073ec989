//! Board-level configuration shared with the firmware half.

use crate::keystate::Duration;

/// Wire protocol between the two halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SplitTransport {
    I2c,
    Serial,
}

/// Which half owns the USB connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Hand {
    Left,
    Right,
}

pub const SPLIT_TRANSPORT: SplitTransport = SplitTransport::I2c;

pub const MASTER_HAND: Hand = Hand::Left;

/// Number of taps for a tap-toggle layer key
pub const TAPPING_TOGGLE: u8 = 2;

/// Milliseconds. Set conservatively as the dance keys only gate caps lock
/// and shift.
pub const TAPPING_TERM: Duration = 250;
