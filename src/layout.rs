//! The three-layer grid for the Dactyl Manuform 5x7.
//!
//! Rows are doubled up for the split: the left half is rows 0 to 5, the
//! right half rows 6 to 11, each 7 columns wide with the thumb cluster on
//! the last two rows of its half. Unwired positions are `___`.

use crate::config;
use crate::keymap::make_keymap;
use crate::keystate::dance::DanceAction;
use crate::keystate::{KeyAction, Keyboard, Keymap, Layer};

pub const ROWS: usize = 12;
pub const COLS: usize = 7;
pub const SIZE: usize = ROWS * COLS;
pub const LAYERS: usize = 3;

pub const QWERTY: Layer = 0;
pub const NAV: Layer = 1;
pub const NUMPAD: Layer = 2;

pub type KeymapT = Keymap<SIZE, LAYERS>;

/// Scan index of a matrix position.
pub const fn index(row: usize, col: usize) -> usize {
    row * COLS + col
}

/// Shift on a tap or a hold, caps lock on a double tap.
pub const SHIFT_CAPS: DanceAction = DanceAction {
    tap: Keyboard::LeftShift,
    hold: Keyboard::LeftShift,
    double_tap: Keyboard::CapsLock,
};

/// Enter on a tap, shift while held.
pub const SHIFT_ENTER: DanceAction = DanceAction {
    tap: Keyboard::ReturnEnter,
    hold: Keyboard::RightShift,
    double_tap: Keyboard::ReturnEnter,
};

const UNDO: &[Keyboard] = &[Keyboard::LeftGUI, Keyboard::Z];
const REDO: &[Keyboard] = &[Keyboard::LeftShift, Keyboard::LeftGUI, Keyboard::Z];

pub fn keymap() -> KeymapT {
    #[rustfmt::skip]
    let map: [[KeyAction; SIZE]; LAYERS] = [
        make_keymap![
            // Left hand
            Esc,               (S 1),   (S 2),   (S 3),           (S 4),    (S 5),           (S 6),
            Tab,               Q,       W,       E,               R,        T,               LBrc,
            (D SHIFT_CAPS),    A,       S,       D,               F,        G,               (S 9),
            LCtl,              Z,       X,       C,               V,        B,               ___,
            ___,               ___,     ___,     (M ThumbsDown),  LAlt,     LGui,            Ent,
            ___,               ___,     ___,     (L NAV),         (L NUMPAD), (M ThumbsDown), (M ThumbsUp),
            // Right hand
            (S 7),             (S 8),   (S 9),   (S 0),           Min,      Eql,             Grv,
            RBrc,              Y,       U,       I,               O,        P,               Bsl,
            (S 0),             H,       J,       K,               L,        Scln,            Quot,
            ___,               N,       M,       Comm,            Dot,      Slsh,            (D SHIFT_ENTER),
            Spc,               Bsp,     (C UNDO), (C REDO),       ___,      ___,             ___,
            (L NAV),           (L NUMPAD), Home, End,             ___,      ___,             ___,
        ],
        make_keymap![
            // Left hand
            Trns,    F1,      F2,          F3,       F4,            F5,      F6,
            Trns,    Trns,    Trns,        Trns,     Trns,          Trns,    Trns,
            Trns,    Trns,    (M Rocket),  (M Joy),  (M ThumbsUp),  Trns,    Trns,
            Trns,    Trns,    Trns,        Trns,     Trns,          Trns,    ___,
            ___,     ___,     ___,         Trns,     Trns,          Trns,    Trns,
            ___,     ___,     ___,         Trns,     Trns,          Trns,    Trns,
            // Right hand
            F7,      F8,      F9,          F10,      F11,           F12,     Trns,
            Trns,    Trns,    Trns,        Up,       Trns,          Trns,    Trns,
            Trns,    Trns,    Left,        Down,     Right,         Trns,    Trns,
            ___,     Trns,    Trns,        Trns,     Trns,          Trns,    Trns,
            Trns,    Trns,    Trns,        Trns,     ___,           ___,     ___,
            Trns,    Trns,    Trns,        Trns,     ___,           ___,     ___,
        ],
        make_keymap![
            // Left hand
            Trns,    Trns,    Trns,    Trns,    Trns,    Trns,    Trns,
            Trns,    Trns,    Trns,    Trns,    Trns,    Trns,    Trns,
            Trns,    Trns,    Trns,    Trns,    Trns,    Trns,    Trns,
            Trns,    Trns,    Trns,    Trns,    Trns,    Trns,    ___,
            ___,     ___,     ___,     Trns,    Trns,    Trns,    Trns,
            ___,     ___,     ___,     Trns,    Trns,    Trns,    Trns,
            // Right hand
            Trns,    Trns,    NumLk,   Trns,    KPMns,   KPPls,   Trns,
            Trns,    Trns,    7,       8,       9,       Trns,    Trns,
            Trns,    Trns,    4,       5,       6,       KPAst,   Trns,
            ___,     1,       2,       3,       KPSls,   Trns,    Trns,
            0,       KPDot,   Trns,    Trns,    ___,     ___,     ___,
            Trns,    Trns,    Trns,    Trns,    ___,     ___,     ___,
        ],
    ];
    Keymap::new(map, config::TAPPING_TERM)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use heapless::Vec;

    use super::*;
    use crate::keystate::Instant;

    fn scan(keymap: &mut KeymapT, presses: &[bool; SIZE], now: Instant) -> Vec<Keyboard, 8> {
        let mut keys = Vec::new();
        keymap.process(presses, &mut keys, now);
        keys
    }

    fn press_one(keymap: &mut KeymapT, row: usize, col: usize, now: Instant) -> Vec<Keyboard, 8> {
        let mut presses = [false; SIZE];
        presses[index(row, col)] = true;
        scan(keymap, &presses, now)
    }

    #[test]
    fn grid_shape() {
        assert_eq!(SIZE, 84);
        // both halves carry the same dimensions
        assert_eq!(ROWS % 2, 0);
        let _ = keymap();
    }

    #[test]
    fn base_letters_and_thumbs() {
        let mut km = keymap();
        assert_eq!(press_one(&mut km, 1, 1, 0), [Keyboard::Q]);
        let mut km = keymap();
        assert_eq!(press_one(&mut km, 7, 5, 0), [Keyboard::P]);
        let mut km = keymap();
        assert_eq!(press_one(&mut km, 4, 6, 0), [Keyboard::ReturnEnter]);
        let mut km = keymap();
        assert_eq!(press_one(&mut km, 10, 0, 0), [Keyboard::Space]);
    }

    #[test]
    fn base_shifted_symbols() {
        let mut km = keymap();
        // ! on the left number row
        assert_eq!(
            press_one(&mut km, 0, 1, 0),
            [Keyboard::LeftShift, Keyboard::Keyboard1]
        );
        let mut km = keymap();
        // ( on the right number row
        assert_eq!(
            press_one(&mut km, 6, 2, 0),
            [Keyboard::LeftShift, Keyboard::Keyboard9]
        );
    }

    #[test]
    fn undo_redo_chords() {
        let mut km = keymap();
        assert_eq!(
            press_one(&mut km, 10, 2, 0),
            [Keyboard::LeftGUI, Keyboard::Z]
        );
        let mut km = keymap();
        assert_eq!(
            press_one(&mut km, 10, 3, 0),
            [Keyboard::LeftShift, Keyboard::LeftGUI, Keyboard::Z]
        );
    }

    #[test]
    fn nav_layer_arrows() {
        let mut km = keymap();
        let mut presses = [false; SIZE];
        presses[index(5, 3)] = true; // left nav thumb
        assert_eq!(scan(&mut km, &presses, 0), []);
        presses[index(8, 3)] = true;
        assert_eq!(scan(&mut km, &presses, 1), [Keyboard::DownArrow]);
    }

    #[test]
    fn nav_layer_is_transparent_for_letters() {
        let mut km = keymap();
        let mut presses = [false; SIZE];
        presses[index(5, 3)] = true;
        assert_eq!(scan(&mut km, &presses, 0), []);
        presses[index(1, 1)] = true;
        assert_eq!(scan(&mut km, &presses, 1), [Keyboard::Q]);
    }

    #[test]
    fn numpad_layer_digits() {
        let mut km = keymap();
        let mut presses = [false; SIZE];
        presses[index(5, 4)] = true; // left numpad thumb
        assert_eq!(scan(&mut km, &presses, 0), []);
        presses[index(8, 3)] = true;
        assert_eq!(scan(&mut km, &presses, 1), [Keyboard::Keyboard5]);
        presses[index(8, 3)] = false;
        presses[index(10, 1)] = true;
        assert_eq!(scan(&mut km, &presses, 2), [Keyboard::KeypadDot]);
    }

    #[test]
    fn nav_layer_macros() {
        let mut km = keymap();
        let mut presses = [false; SIZE];
        presses[index(5, 3)] = true;
        assert_eq!(scan(&mut km, &presses, 0), []);
        // rocket macro starts with a shifted colon
        presses[index(2, 2)] = true;
        assert_eq!(
            scan(&mut km, &presses, 1),
            [Keyboard::LeftShift, Keyboard::Semicolon]
        );
        assert_eq!(scan(&mut km, &presses, 2), [Keyboard::R]);
    }

    #[test]
    fn shift_caps_dance_on_home_pinky() {
        let mut km = keymap();
        let mut presses = [false; SIZE];
        presses[index(2, 0)] = true;
        assert_eq!(scan(&mut km, &presses, 0), []);
        assert_eq!(
            scan(&mut km, &presses, config::TAPPING_TERM),
            [Keyboard::LeftShift]
        );
        presses[index(2, 0)] = false;
        assert_eq!(scan(&mut km, &presses, config::TAPPING_TERM + 10), []);
    }

    #[test]
    fn shift_enter_tap() {
        let mut km = keymap();
        let mut presses = [false; SIZE];
        presses[index(9, 6)] = true;
        assert_eq!(scan(&mut km, &presses, 0), []);
        presses[index(9, 6)] = false;
        assert_eq!(scan(&mut km, &presses, 50), []);
        // classified as a tap at the tapping term
        assert_eq!(
            scan(&mut km, &presses, config::TAPPING_TERM),
            [Keyboard::ReturnEnter]
        );
        assert_eq!(scan(&mut km, &presses, config::TAPPING_TERM + 10), []);
    }
}
