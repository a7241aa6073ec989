//! ASCII to HID usage translation, en-US layout.

use usbd_human_interface_device::page::Keyboard;

/// Usage code for an ASCII byte, plus whether it needs a shift chord.
/// Bytes with no usage on an en-US keyboard map to `None`.
#[rustfmt::skip]
pub fn from_ascii(ascii: u8) -> Option<(Keyboard, bool)> {
    let (code, shifted) = match ascii {
        b'a' | b'A' => (Keyboard::A, ascii.is_ascii_uppercase()),
        b'b' | b'B' => (Keyboard::B, ascii.is_ascii_uppercase()),
        b'c' | b'C' => (Keyboard::C, ascii.is_ascii_uppercase()),
        b'd' | b'D' => (Keyboard::D, ascii.is_ascii_uppercase()),
        b'e' | b'E' => (Keyboard::E, ascii.is_ascii_uppercase()),
        b'f' | b'F' => (Keyboard::F, ascii.is_ascii_uppercase()),
        b'g' | b'G' => (Keyboard::G, ascii.is_ascii_uppercase()),
        b'h' | b'H' => (Keyboard::H, ascii.is_ascii_uppercase()),
        b'i' | b'I' => (Keyboard::I, ascii.is_ascii_uppercase()),
        b'j' | b'J' => (Keyboard::J, ascii.is_ascii_uppercase()),
        b'k' | b'K' => (Keyboard::K, ascii.is_ascii_uppercase()),
        b'l' | b'L' => (Keyboard::L, ascii.is_ascii_uppercase()),
        b'm' | b'M' => (Keyboard::M, ascii.is_ascii_uppercase()),
        b'n' | b'N' => (Keyboard::N, ascii.is_ascii_uppercase()),
        b'o' | b'O' => (Keyboard::O, ascii.is_ascii_uppercase()),
        b'p' | b'P' => (Keyboard::P, ascii.is_ascii_uppercase()),
        b'q' | b'Q' => (Keyboard::Q, ascii.is_ascii_uppercase()),
        b'r' | b'R' => (Keyboard::R, ascii.is_ascii_uppercase()),
        b's' | b'S' => (Keyboard::S, ascii.is_ascii_uppercase()),
        b't' | b'T' => (Keyboard::T, ascii.is_ascii_uppercase()),
        b'u' | b'U' => (Keyboard::U, ascii.is_ascii_uppercase()),
        b'v' | b'V' => (Keyboard::V, ascii.is_ascii_uppercase()),
        b'w' | b'W' => (Keyboard::W, ascii.is_ascii_uppercase()),
        b'x' | b'X' => (Keyboard::X, ascii.is_ascii_uppercase()),
        b'y' | b'Y' => (Keyboard::Y, ascii.is_ascii_uppercase()),
        b'z' | b'Z' => (Keyboard::Z, ascii.is_ascii_uppercase()),
        b'1' => (Keyboard::Keyboard1, false),
        b'2' => (Keyboard::Keyboard2, false),
        b'3' => (Keyboard::Keyboard3, false),
        b'4' => (Keyboard::Keyboard4, false),
        b'5' => (Keyboard::Keyboard5, false),
        b'6' => (Keyboard::Keyboard6, false),
        b'7' => (Keyboard::Keyboard7, false),
        b'8' => (Keyboard::Keyboard8, false),
        b'9' => (Keyboard::Keyboard9, false),
        b'0' => (Keyboard::Keyboard0, false),
        b'!' => (Keyboard::Keyboard1, true),
        b'@' => (Keyboard::Keyboard2, true),
        b'#' => (Keyboard::Keyboard3, true),
        b'$' => (Keyboard::Keyboard4, true),
        b'%' => (Keyboard::Keyboard5, true),
        b'^' => (Keyboard::Keyboard6, true),
        b'&' => (Keyboard::Keyboard7, true),
        b'*' => (Keyboard::Keyboard8, true),
        b'(' => (Keyboard::Keyboard9, true),
        b')' => (Keyboard::Keyboard0, true),
        b'-' => (Keyboard::Minus, false),
        b'_' => (Keyboard::Minus, true),
        b'=' => (Keyboard::Equal, false),
        b'+' => (Keyboard::Equal, true),
        b'[' => (Keyboard::LeftBrace, false),
        b'{' => (Keyboard::LeftBrace, true),
        b']' => (Keyboard::RightBrace, false),
        b'}' => (Keyboard::RightBrace, true),
        b'\\' => (Keyboard::Backslash, false),
        b'|' => (Keyboard::Backslash, true),
        b';' => (Keyboard::Semicolon, false),
        b':' => (Keyboard::Semicolon, true),
        b'\'' => (Keyboard::Apostrophe, false),
        b'"' => (Keyboard::Apostrophe, true),
        b'`' => (Keyboard::Grave, false),
        b'~' => (Keyboard::Grave, true),
        b',' => (Keyboard::Comma, false),
        b'<' => (Keyboard::Comma, true),
        b'.' => (Keyboard::Dot, false),
        b'>' => (Keyboard::Dot, true),
        b'/' => (Keyboard::ForwardSlash, false),
        b'?' => (Keyboard::ForwardSlash, true),
        b' ' => (Keyboard::Space, false),
        b'\n' => (Keyboard::ReturnEnter, false),
        b'\t' => (Keyboard::Tab, false),
        _ => return None,
    };
    Some((code, shifted))
}
