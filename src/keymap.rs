//! Declarative construction of keymap grids

// Export as pub so that it can be used from macro
#[doc(hidden)]
pub use paste::paste;
#[doc(hidden)]
pub use usbd_human_interface_device::page::Keyboard;

/// A row-major list of key tokens, expanded through [`make_action!`].
#[macro_export]
macro_rules! make_keymap {
    // To allow `make_keymap![...]` be the same as `make_keymap!([...])`
    ( $( $t:tt ),* $(,)? ) => {[ $( $crate::keymap::make_action!($t) ),* ]};
}

#[rustfmt::skip]
#[macro_export]
macro_rules! make_code {
    // Shorthands
    (Esc) => { $crate::keymap::Keyboard::Escape };
    (Eql) => { $crate::keymap::Keyboard::Equal };
    (Min) => { $crate::keymap::Keyboard::Minus };
    (Grv) => { $crate::keymap::Keyboard::Grave };
    (Bsl) => { $crate::keymap::Keyboard::Backslash };
    (Bsp) => { $crate::keymap::Keyboard::DeleteBackspace };
    (Ent) => { $crate::keymap::Keyboard::ReturnEnter };
    (Spc) => { $crate::keymap::Keyboard::Space };
    (LBrc) => { $crate::keymap::Keyboard::LeftBrace };
    (RBrc) => { $crate::keymap::Keyboard::RightBrace };
    (Scln) => { $crate::keymap::Keyboard::Semicolon };
    (Quot) => { $crate::keymap::Keyboard::Apostrophe };
    (Comm) => { $crate::keymap::Keyboard::Comma };
    (Slsh) => { $crate::keymap::Keyboard::ForwardSlash };
    (Caps) => { $crate::keymap::Keyboard::CapsLock };

    (LSft) => { $crate::keymap::Keyboard::LeftShift };
    (LCtl) => { $crate::keymap::Keyboard::LeftControl };
    (LAlt) => { $crate::keymap::Keyboard::LeftAlt };
    (LGui) => { $crate::keymap::Keyboard::LeftGUI };
    (RSft) => { $crate::keymap::Keyboard::RightShift };
    (RCtl) => { $crate::keymap::Keyboard::RightControl };
    (RAlt) => { $crate::keymap::Keyboard::RightAlt };
    (RGui) => { $crate::keymap::Keyboard::RightGUI };

    // Do nothing
    (___) => { $crate::keymap::Keyboard::NoEventIndicated };

    (Left) => { $crate::keymap::Keyboard::LeftArrow };
    (Down) => { $crate::keymap::Keyboard::DownArrow };
    (Up) => { $crate::keymap::Keyboard::UpArrow };
    (Right) => { $crate::keymap::Keyboard::RightArrow };

    (NumLk) => { $crate::keymap::Keyboard::KeypadNumLockAndClear };
    (KPSls) => { $crate::keymap::Keyboard::KeypadDivide };
    (KPAst) => { $crate::keymap::Keyboard::KeypadMultiply };
    (KPMns) => { $crate::keymap::Keyboard::KeypadSubtract };
    (KPPls) => { $crate::keymap::Keyboard::KeypadAdd };
    (KPEnt) => { $crate::keymap::Keyboard::KeypadEnter };
    (KPDot) => { $crate::keymap::Keyboard::KeypadDot };
    (KP0) => { $crate::keymap::Keyboard::Keypad0 };
    (KP1) => { $crate::keymap::Keyboard::Keypad1 };
    (KP2) => { $crate::keymap::Keyboard::Keypad2 };
    (KP3) => { $crate::keymap::Keyboard::Keypad3 };
    (KP4) => { $crate::keymap::Keyboard::Keypad4 };
    (KP5) => { $crate::keymap::Keyboard::Keypad5 };
    (KP6) => { $crate::keymap::Keyboard::Keypad6 };
    (KP7) => { $crate::keymap::Keyboard::Keypad7 };
    (KP8) => { $crate::keymap::Keyboard::Keypad8 };
    (KP9) => { $crate::keymap::Keyboard::Keypad9 };

    // Have numbers translate to number keys
    ($n:literal) => {
        $crate::keymap::paste! { $crate::keymap::Keyboard::[<Keyboard $n>] }
    };

    // Fallback
    ($i:ident) => {
        $crate::keymap::Keyboard::$i
    };
}

/// One key token to a [`KeyAction`](crate::keystate::KeyAction):
/// `(S x)` shifted, `(C chord)` chord constant, `(L n)` momentary layer,
/// `(M id)` text macro, `(D dance)` dance constant, `Trns` transparent,
/// anything else through [`make_code!`].
#[macro_export]
macro_rules! make_action {
    ((S $t:tt)) => {
        $crate::keystate::KeyAction::Chord(&[
            $crate::keymap::Keyboard::LeftShift,
            $crate::keymap::make_code!($t),
        ])
    };
    ((C $chord:expr)) => {
        $crate::keystate::KeyAction::Chord($chord)
    };
    ((L $layer:expr)) => {
        $crate::keystate::KeyAction::MomentaryLayer($layer)
    };
    ((M $id:ident)) => {
        $crate::keystate::KeyAction::Macro($crate::keystate::macros::MacroId::$id)
    };
    ((D $dance:expr)) => {
        $crate::keystate::KeyAction::Dance($dance)
    };
    (Trns) => {
        $crate::keystate::KeyAction::Transparent
    };
    ($t:tt) => {
        $crate::keystate::KeyAction::Key($crate::keymap::make_code!($t))
    };
}

// Export the macros
pub use make_action;
pub use make_code;
pub use make_keymap;
