//! Mapping from raw hook events to the core key model.

use scrollshot_core::KeyCode;

/// Translate an rdev key into the core key model.
///
/// Returns `None` for keys the binding model does not cover (punctuation,
/// lock keys, media keys); the listener ignores those entirely, so they
/// neither satisfy nor disturb a combination.
pub fn key_code(key: rdev::Key) -> Option<KeyCode> {
    use rdev::Key;

    let code = match key {
        Key::ShiftLeft => KeyCode::ShiftLeft,
        Key::ShiftRight => KeyCode::ShiftRight,
        Key::ControlLeft => KeyCode::ControlLeft,
        Key::ControlRight => KeyCode::ControlRight,
        Key::Alt => KeyCode::AltLeft,
        Key::AltGr => KeyCode::AltRight,
        Key::MetaLeft => KeyCode::MetaLeft,
        Key::MetaRight => KeyCode::MetaRight,

        Key::KeyA => KeyCode::Char('A'),
        Key::KeyB => KeyCode::Char('B'),
        Key::KeyC => KeyCode::Char('C'),
        Key::KeyD => KeyCode::Char('D'),
        Key::KeyE => KeyCode::Char('E'),
        Key::KeyF => KeyCode::Char('F'),
        Key::KeyG => KeyCode::Char('G'),
        Key::KeyH => KeyCode::Char('H'),
        Key::KeyI => KeyCode::Char('I'),
        Key::KeyJ => KeyCode::Char('J'),
        Key::KeyK => KeyCode::Char('K'),
        Key::KeyL => KeyCode::Char('L'),
        Key::KeyM => KeyCode::Char('M'),
        Key::KeyN => KeyCode::Char('N'),
        Key::KeyO => KeyCode::Char('O'),
        Key::KeyP => KeyCode::Char('P'),
        Key::KeyQ => KeyCode::Char('Q'),
        Key::KeyR => KeyCode::Char('R'),
        Key::KeyS => KeyCode::Char('S'),
        Key::KeyT => KeyCode::Char('T'),
        Key::KeyU => KeyCode::Char('U'),
        Key::KeyV => KeyCode::Char('V'),
        Key::KeyW => KeyCode::Char('W'),
        Key::KeyX => KeyCode::Char('X'),
        Key::KeyY => KeyCode::Char('Y'),
        Key::KeyZ => KeyCode::Char('Z'),

        Key::Num0 => KeyCode::Char('0'),
        Key::Num1 => KeyCode::Char('1'),
        Key::Num2 => KeyCode::Char('2'),
        Key::Num3 => KeyCode::Char('3'),
        Key::Num4 => KeyCode::Char('4'),
        Key::Num5 => KeyCode::Char('5'),
        Key::Num6 => KeyCode::Char('6'),
        Key::Num7 => KeyCode::Char('7'),
        Key::Num8 => KeyCode::Char('8'),
        Key::Num9 => KeyCode::Char('9'),

        Key::F1 => KeyCode::Function(1),
        Key::F2 => KeyCode::Function(2),
        Key::F3 => KeyCode::Function(3),
        Key::F4 => KeyCode::Function(4),
        Key::F5 => KeyCode::Function(5),
        Key::F6 => KeyCode::Function(6),
        Key::F7 => KeyCode::Function(7),
        Key::F8 => KeyCode::Function(8),
        Key::F9 => KeyCode::Function(9),
        Key::F10 => KeyCode::Function(10),
        Key::F11 => KeyCode::Function(11),
        Key::F12 => KeyCode::Function(12),

        Key::Space => KeyCode::Space,
        Key::Return => KeyCode::Enter,
        Key::Tab => KeyCode::Tab,
        Key::Backspace => KeyCode::Backspace,
        Key::Escape => KeyCode::Escape,
        Key::CapsLock => KeyCode::CapsLock,
        Key::Pause => KeyCode::Pause,
        Key::PageUp => KeyCode::PageUp,
        Key::PageDown => KeyCode::PageDown,
        Key::Home => KeyCode::Home,
        Key::End => KeyCode::End,
        Key::Insert => KeyCode::Insert,
        Key::Delete => KeyCode::Delete,
        Key::UpArrow => KeyCode::UpArrow,
        Key::DownArrow => KeyCode::DownArrow,
        Key::LeftArrow => KeyCode::LeftArrow,
        Key::RightArrow => KeyCode::RightArrow,

        Key::Kp0 => KeyCode::Numpad(0),
        Key::Kp1 => KeyCode::Numpad(1),
        Key::Kp2 => KeyCode::Numpad(2),
        Key::Kp3 => KeyCode::Numpad(3),
        Key::Kp4 => KeyCode::Numpad(4),
        Key::Kp5 => KeyCode::Numpad(5),
        Key::Kp6 => KeyCode::Numpad(6),
        Key::Kp7 => KeyCode::Numpad(7),
        Key::Kp8 => KeyCode::Numpad(8),
        Key::Kp9 => KeyCode::Numpad(9),
        Key::KpMultiply => KeyCode::KpMultiply,
        Key::KpPlus => KeyCode::KpPlus,
        Key::KpMinus => KeyCode::KpMinus,

        Key::Unknown(code) => KeyCode::Unknown(code),

        _ => return None,
    };

    Some(code)
}
