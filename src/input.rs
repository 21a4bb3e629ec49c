//! Input handling - event translation

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Key modifier flags
pub mod key_flags {
    pub const CONTROL: u32 = 0x1000_0000;
    pub const META: u32 = 0x2000_0000;
    pub const SHIFT: u32 = 0x4000_0000;
    pub const SPEC: u32 = 0x8000_0000;
}

/// Codes for special (non-character) keys
pub mod special {
    pub const HOME: u32 = 0x47;
    pub const UP: u32 = 0x48;
    pub const PAGE_UP: u32 = 0x49;
    pub const LEFT: u32 = 0x4b;
    pub const RIGHT: u32 = 0x4d;
    pub const END: u32 = 0x4f;
    pub const DOWN: u32 = 0x50;
    pub const PAGE_DOWN: u32 = 0x51;
    pub const DELETE: u32 = 0x53;

    /// Function key F`n`
    pub const fn f(n: u8) -> u32 {
        0x3a + n as u32
    }
}

/// Represents a key input with modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key(pub u32);

impl Key {
    /// Backspace
    pub const BACKSPACE: Key = Key(0x7f);

    /// Create a key from a character
    pub fn char(ch: char) -> Self {
        Key(ch as u32)
    }

    /// Create a control key (C-x)
    pub fn ctrl(ch: char) -> Self {
        Key(key_flags::CONTROL | ch.to_ascii_lowercase() as u32)
    }

    /// Create a meta key (M-x)
    pub fn meta(ch: char) -> Self {
        Key(key_flags::META | ch.to_ascii_lowercase() as u32)
    }

    /// Create a special key (function keys, arrows, etc.)
    pub fn special(code: u32) -> Self {
        Key(key_flags::SPEC | code)
    }

    /// Create a shifted special key (selection-extending motion)
    #[cfg(test)]
    pub fn shift_special(code: u32) -> Self {
        Key(key_flags::SPEC | key_flags::SHIFT | code)
    }

    /// Create a control special key (C-Home, C-End)
    pub fn ctrl_special(code: u32) -> Self {
        Key(key_flags::SPEC | key_flags::CONTROL | code)
    }

    /// Enter
    pub fn enter() -> Self {
        Key::ctrl('m')
    }

    /// Tab
    pub fn tab() -> Self {
        Key::ctrl('i')
    }

    /// Escape
    pub fn escape() -> Self {
        Key::ctrl('[')
    }

    /// Get the raw key code
    pub fn code(&self) -> u32 {
        self.0
    }

    /// Same key without the shift flag
    pub fn without_shift(&self) -> Key {
        Key(self.0 & !key_flags::SHIFT)
    }

    /// Check if this is a control key
    pub fn is_ctrl(&self) -> bool {
        self.0 & key_flags::CONTROL != 0
    }

    /// Check if this is a meta key
    pub fn is_meta(&self) -> bool {
        self.0 & key_flags::META != 0
    }

    /// Check if shift is held (special keys only)
    pub fn is_shift(&self) -> bool {
        self.0 & key_flags::SHIFT != 0
    }

    /// Check if this is a special key
    pub fn is_special(&self) -> bool {
        self.0 & key_flags::SPEC != 0
    }

    /// Get the base character (without modifiers)
    pub fn base_char(&self) -> Option<char> {
        if self.is_special() {
            return None;
        }
        char::from_u32(self.0 & 0x00FF_FFFF)
    }

    /// Check if this is a printable self-insert character
    pub fn is_self_insert(&self) -> bool {
        if self.0 & 0xF000_0000 != 0 {
            return false;
        }
        match char::from_u32(self.0) {
            Some(ch) => ch >= ' ' && ch != '\x7f',
            None => false,
        }
    }

    /// Convert key to a human-readable string (e.g., "C-f", "S-Right")
    pub fn display_name(&self) -> String {
        match *self {
            k if k == Key::enter() => return "Enter".to_string(),
            k if k == Key::tab() => return "Tab".to_string(),
            k if k == Key::escape() => return "Esc".to_string(),
            _ => {}
        }

        let mut result = String::new();

        if self.is_ctrl() {
            result.push_str("C-");
        }
        if self.is_meta() {
            result.push_str("M-");
        }
        if self.is_shift() {
            result.push_str("S-");
        }

        if self.is_special() {
            let code = self.0 & 0xFF;
            let special_name = match code {
                special::HOME => "Home",
                special::UP => "Up",
                special::PAGE_UP => "PageUp",
                special::LEFT => "Left",
                special::RIGHT => "Right",
                special::END => "End",
                special::DOWN => "Down",
                special::PAGE_DOWN => "PageDown",
                special::DELETE => "Delete",
                n if (0x3b..=0x46).contains(&n) => {
                    return format!("{}F{}", result, n - 0x3a);
                }
                _ => return format!("{}special-0x{:02x}", result, code),
            };
            result.push_str(special_name);
            return result;
        }

        match self.0 & 0x00FF_FFFF {
            0x7f => result.push_str("Backspace"),
            0x20 => result.push_str("SPC"),
            base => match char::from_u32(base) {
                Some(ch) => result.push(ch),
                None => result.push_str(&format!("0x{:x}", base)),
            },
        }

        result
    }
}

/// An input event the editor reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A key press
    Key(Key),
    /// Bracketed paste (typed-ahead text or dropped file paths)
    Paste(String),
    /// Terminal resized to (cols, rows)
    Resize(u16, u16),
}

/// Translate a crossterm event to an editor input
pub fn translate_event(event: Event) -> Option<Input> {
    match event {
        Event::Key(key_event) => translate_key(key_event).map(Input::Key),
        Event::Paste(text) => Some(Input::Paste(text)),
        Event::Resize(cols, rows) => Some(Input::Resize(cols, rows)),
        _ => None,
    }
}

/// Translate a crossterm KeyEvent to our Key representation
pub fn translate_key(event: KeyEvent) -> Option<Key> {
    let KeyEvent {
        code,
        modifiers,
        kind,
        ..
    } = event;

    // Only process key press events, ignore release and repeat
    // This is critical on Windows where crossterm sends all event types
    if kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let alt = modifiers.contains(KeyModifiers::ALT);
    let shift = modifiers.contains(KeyModifiers::SHIFT);

    let special_key = |code: u32| {
        let mut flags = key_flags::SPEC;
        if ctrl {
            flags |= key_flags::CONTROL;
        }
        if shift {
            flags |= key_flags::SHIFT;
        }
        Some(Key(flags | code))
    };

    match code {
        KeyCode::Char(ch) => {
            if ctrl && alt {
                Some(Key(
                    key_flags::META | key_flags::CONTROL | ch.to_ascii_lowercase() as u32,
                ))
            } else if ctrl {
                Some(Key::ctrl(ch))
            } else if alt {
                Some(Key::meta(ch))
            } else {
                Some(Key::char(ch))
            }
        }
        KeyCode::Enter => Some(Key::enter()),
        KeyCode::Tab => Some(Key::tab()),
        KeyCode::Backspace => Some(Key::BACKSPACE),
        KeyCode::Esc => Some(Key::escape()),
        KeyCode::Delete => special_key(special::DELETE),
        KeyCode::Home => special_key(special::HOME),
        KeyCode::End => special_key(special::END),
        KeyCode::PageUp => special_key(special::PAGE_UP),
        KeyCode::PageDown => special_key(special::PAGE_DOWN),
        KeyCode::Up => special_key(special::UP),
        KeyCode::Down => special_key(special::DOWN),
        KeyCode::Left => special_key(special::LEFT),
        KeyCode::Right => special_key(special::RIGHT),
        KeyCode::F(n) => Some(Key::special(special::f(n))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_translate_chars() {
        assert_eq!(
            translate_key(press(KeyCode::Char('a'), KeyModifiers::NONE)),
            Some(Key::char('a'))
        );
        assert_eq!(
            translate_key(press(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(Key::char('A'))
        );
        assert_eq!(
            translate_key(press(KeyCode::Char('f'), KeyModifiers::CONTROL)),
            Some(Key::ctrl('f'))
        );
        assert!(Key::char('a').is_self_insert());
        assert!(!Key::ctrl('f').is_self_insert());
    }

    #[test]
    fn test_translate_special_keys() {
        assert_eq!(
            translate_key(press(KeyCode::Left, KeyModifiers::SHIFT)),
            Some(Key::shift_special(special::LEFT))
        );
        assert_eq!(
            translate_key(press(KeyCode::Home, KeyModifiers::CONTROL)),
            Some(Key::ctrl_special(special::HOME))
        );
        assert_eq!(
            translate_key(press(KeyCode::F(3), KeyModifiers::NONE)),
            Some(Key::special(special::f(3)))
        );
        assert_eq!(
            translate_key(press(KeyCode::Enter, KeyModifiers::NONE)),
            Some(Key::enter())
        );
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut event = press(KeyCode::Char('a'), KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(translate_key(event), None);
    }

    #[test]
    fn test_translate_paste_and_resize() {
        assert_eq!(
            translate_event(Event::Paste("/tmp/a.cs".to_string())),
            Some(Input::Paste("/tmp/a.cs".to_string()))
        );
        assert_eq!(
            translate_event(Event::Resize(80, 24)),
            Some(Input::Resize(80, 24))
        );
        assert_eq!(translate_event(Event::FocusGained), None);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Key::ctrl('f').display_name(), "C-f");
        assert_eq!(Key::shift_special(special::RIGHT).display_name(), "S-Right");
        assert_eq!(Key::ctrl_special(special::END).display_name(), "C-End");
        assert_eq!(Key::special(special::f(1)).display_name(), "F1");
        assert_eq!(Key::BACKSPACE.display_name(), "Backspace");
        assert_eq!(Key::enter().display_name(), "Enter");
        assert_eq!(Key::shift_special(special::UP).without_shift(), Key::special(special::UP));
    }
}
