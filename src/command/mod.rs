//! Command dispatch system

use std::collections::HashMap;

use crate::editor::EditorState;
use crate::error::Result;
use crate::input::{special, Key};

pub mod editing;
pub mod misc;
pub mod navigation;

/// Command result status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    Failure,
}

/// Command function signature
/// - editor: mutable reference to editor state
/// - extend: true if shift was held (motions extend the selection)
pub type CommandFn = fn(&mut EditorState, bool) -> Result<CommandStatus>;

/// Key binding entry with command function and name
struct BindingEntry {
    function: CommandFn,
    name: &'static str,
}

/// Key binding table
pub struct KeyTable {
    bindings: HashMap<u32, BindingEntry>,
}

impl KeyTable {
    /// Create an empty key table
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Create key table with default bindings
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        table.setup_defaults();
        table
    }

    /// Add a key binding with command name
    pub fn bind_named(&mut self, key: Key, cmd: CommandFn, name: &'static str) {
        self.bindings.insert(key.code(), BindingEntry { function: cmd, name });
    }

    /// Find the binding for a key, and whether it was reached through shift
    ///
    /// A shifted special key with no binding of its own falls back to the
    /// unshifted binding.
    fn entry(&self, key: Key) -> Option<(&BindingEntry, bool)> {
        if let Some(entry) = self.bindings.get(&key.code()) {
            return Some((entry, false));
        }
        if key.is_shift() {
            return self
                .bindings
                .get(&key.without_shift().code())
                .map(|entry| (entry, true));
        }
        None
    }

    /// Look up a command for a key, with its extend-selection flag
    pub fn lookup(&self, key: Key) -> Option<(CommandFn, bool)> {
        self.entry(key).map(|(entry, extend)| (entry.function, extend))
    }

    /// Look up a command name for a key
    #[cfg(test)]
    pub fn lookup_name(&self, key: Key) -> Option<&'static str> {
        self.entry(key).map(|(entry, _)| entry.name)
    }

    /// Get all bindings as (key name, command name) pairs, sorted by command
    pub fn all_bindings(&self) -> Vec<(String, &'static str)> {
        let mut bindings: Vec<_> = self
            .bindings
            .iter()
            .map(|(&code, entry)| (Key(code).display_name(), entry.name))
            .collect();
        bindings.sort_by(|a, b| a.1.cmp(b.1).then_with(|| a.0.cmp(&b.0)));
        bindings
    }

    /// Set up default key bindings
    fn setup_defaults(&mut self) {
        use editing::*;
        use misc::*;
        use navigation::*;

        // Cursor movement (shift extends the selection)
        self.bind_named(Key::special(special::RIGHT), forward_char, "forward-char");
        self.bind_named(Key::special(special::LEFT), backward_char, "backward-char");
        self.bind_named(Key::special(special::DOWN), next_line, "next-line");
        self.bind_named(Key::special(special::UP), previous_line, "previous-line");
        self.bind_named(Key::special(special::HOME), beginning_of_line, "beginning-of-line");
        self.bind_named(Key::special(special::END), end_of_line, "end-of-line");
        self.bind_named(Key::special(special::PAGE_UP), scroll_up, "scroll-up");
        self.bind_named(Key::special(special::PAGE_DOWN), scroll_down, "scroll-down");
        self.bind_named(Key::ctrl_special(special::HOME), beginning_of_buffer, "beginning-of-buffer");
        self.bind_named(Key::ctrl_special(special::END), end_of_buffer, "end-of-buffer");
        self.bind_named(Key::ctrl('a'), select_all, "select-all");

        // Editing
        self.bind_named(Key::enter(), newline, "newline");
        self.bind_named(Key::tab(), insert_tab, "insert-tab");
        self.bind_named(Key::BACKSPACE, delete_char_backward, "delete-backward-char");
        self.bind_named(Key::special(special::DELETE), delete_char_forward, "delete-char");

        // Find
        self.bind_named(Key::ctrl('f'), toggle_find, "toggle-find");
        self.bind_named(Key::special(special::f(3)), find_next, "find-next");

        // Display
        self.bind_named(Key::ctrl('l'), toggle_syntax_highlighting, "toggle-syntax-highlighting");

        // Help
        self.bind_named(Key::special(special::f(1)), describe_bindings, "describe-bindings");

        // Quit
        self.bind_named(Key::ctrl('q'), quit, "quit");
    }
}

impl Default for KeyTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let table = KeyTable::with_defaults();
        assert_eq!(table.lookup_name(Key::ctrl('f')), Some("toggle-find"));
        assert_eq!(table.lookup_name(Key::special(special::f(3))), Some("find-next"));
        assert_eq!(table.lookup_name(Key::ctrl('l')), Some("toggle-syntax-highlighting"));
        assert_eq!(table.lookup_name(Key::ctrl('q')), Some("quit"));
        assert_eq!(table.lookup_name(Key::special(special::f(1))), Some("describe-bindings"));
        assert_eq!(table.lookup_name(Key::ctrl('z')), None);
    }

    #[test]
    fn test_shift_falls_back_to_extending_motion() {
        let table = KeyTable::with_defaults();

        let (_, extend) = table.lookup(Key::special(special::RIGHT)).unwrap();
        assert!(!extend);

        let (_, extend) = table.lookup(Key::shift_special(special::RIGHT)).unwrap();
        assert!(extend);
        assert_eq!(table.lookup_name(Key::shift_special(special::RIGHT)), Some("forward-char"));

        let ctrl_shift_end = Key(Key::ctrl_special(special::END).code() | crate::input::key_flags::SHIFT);
        assert_eq!(table.lookup_name(ctrl_shift_end), Some("end-of-buffer"));
    }

    #[test]
    fn test_all_bindings_are_named() {
        let table = KeyTable::with_defaults();
        let bindings = table.all_bindings();
        assert!(bindings.iter().any(|(key, name)| key == "C-f" && *name == "toggle-find"));
        assert!(bindings.iter().all(|(_, name)| !name.is_empty()));
    }
}
