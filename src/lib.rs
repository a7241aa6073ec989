//! Keymap logic for a handwired Dactyl Manuform 5x7.
//!
//! Everything that decides *what* the keyboard sends lives here and runs on
//! the host for testing: the three-layer layout, the emoji text macros and
//! the shift/caps tap dance. Matrix scanning, debouncing and the USB/I2C
//! plumbing belong to the firmware half driving [`keystate::Keymap::process`].

#![no_std]

pub mod config;
pub mod keymap;
pub mod keystate;
pub mod layout;
pub mod text;
