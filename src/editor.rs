//! Editor state and main loop

use std::path::PathBuf;

use crate::command::{CommandStatus, KeyTable};
use crate::config::Config;
use crate::display::Display;
use crate::drop::{self, Paste};
use crate::error::Result;
use crate::find::{FindOutcome, FindWidget};
use crate::input::{special, Input, Key};
use crate::line;
use crate::surface::{EditorSurface, Motion};
use crate::syntax::Highlighter;
use crate::terminal::Terminal;
use crate::window::Window;

/// Main editor state
///
/// Holds everything but the terminal, so key handling can be driven
/// directly from tests.
pub struct EditorState {
    /// The document
    pub surface: EditorSurface,
    /// Syntax coloring
    pub highlighter: Highlighter,
    /// Find bar
    pub find: FindWidget,
    /// Viewport
    pub window: Window,
    /// Key bindings
    pub keytab: KeyTable,
    /// Whether to show a line-number gutter
    pub show_line_numbers: bool,
    /// Context lines kept around the caret when scrolling
    pub scroll_margin: usize,
    /// Screen size (cols, rows)
    screen: (u16, u16),
    /// Modal dialog text; while shown it swallows the next key
    dialog: Option<String>,
    /// Status line message
    message: Option<String>,
    /// Bell requested by the last command
    bell: bool,
    /// Whether editor is running
    running: bool,
}

impl EditorState {
    /// Create a new editor state for a screen of `cols` x `rows`
    pub fn new(config: &Config, cols: u16, rows: u16) -> Self {
        let mut surface = EditorSurface::new();
        surface.set_tab_width(config.tab_width);

        let mut highlighter = Highlighter::new();
        highlighter.enabled = config.highlight;

        let mut editor = Self {
            surface,
            highlighter,
            find: FindWidget::new(),
            window: Window::new(0, 0),
            keytab: KeyTable::with_defaults(),
            show_line_numbers: config.show_line_numbers,
            scroll_margin: config.scroll_margin,
            screen: (cols, rows),
            dialog: None,
            message: None,
            bell: false,
            running: true,
        };
        editor.layout();
        editor
    }

    /// Run the main editor loop
    pub fn run(&mut self, terminal: &mut Terminal, display: &mut Display) -> Result<()> {
        self.resize(terminal.cols(), terminal.rows());
        display.force_redraw();

        while self.running {
            display.render(terminal, self)?;

            let input = terminal.read_input()?;
            if let Input::Resize(..) = input {
                display.force_redraw();
            }
            self.handle_input(input)?;

            if std::mem::take(&mut self.bell) {
                terminal.beep()?;
            }
        }

        Ok(())
    }

    /// Dispatch one input event, then bring styling and the view up to date
    pub fn handle_input(&mut self, input: Input) -> Result<()> {
        match input {
            Input::Key(key) => self.handle_key(key)?,
            Input::Paste(text) => self.handle_paste(&text),
            Input::Resize(cols, rows) => self.resize(cols, rows),
        }
        self.refresh_highlighting();
        self.scroll_to_caret();
        Ok(())
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: Key) -> Result<()> {
        // Any key dismisses a dialog
        if self.dialog.take().is_some() {
            return Ok(());
        }

        self.message = None;

        if self.find.is_visible() && self.handle_find_key(key) {
            return Ok(());
        }

        if let Some((cmd, extend)) = self.keytab.lookup(key) {
            if cmd(self, extend)? == CommandStatus::Failure {
                self.bell = true;
            }
        } else if key.is_self_insert() {
            if let Some(ch) = key.base_char() {
                let mut buf = [0; 4];
                self.insert_text(ch.encode_utf8(&mut buf));
            }
        } else {
            self.bell = true;
            self.set_message(format!("{} is not bound", key.display_name()));
        }

        Ok(())
    }

    /// Keys typed while the find bar has focus
    ///
    /// Returns false for keys the bar does not use, which then go through
    /// the normal bindings.
    fn handle_find_key(&mut self, key: Key) -> bool {
        if key == Key::enter() {
            self.find_next();
        } else if key == Key::escape() {
            self.find.hide();
        } else if key == Key::BACKSPACE {
            self.find.delete_backward();
        } else if key == Key::special(special::DELETE) {
            self.find.delete_forward();
        } else if key == Key::special(special::LEFT) {
            self.find.cursor_left();
        } else if key == Key::special(special::RIGHT) {
            self.find.cursor_right();
        } else if key == Key::special(special::HOME) || key == Key::ctrl('a') {
            self.find.cursor_home();
        } else if key == Key::tab() {
            // swallowed so the document keeps its text
        } else if key == Key::special(special::END) {
            self.find.cursor_end();
        } else if key.is_self_insert() {
            match key.base_char() {
                Some(ch) => self.find.insert_char(ch),
                None => return false,
            }
        } else {
            return false;
        }
        true
    }

    /// Handle a bracketed paste: a file drop or text
    pub fn handle_paste(&mut self, text: &str) {
        self.dialog = None;
        match drop::classify_paste(text) {
            Paste::Files(paths) => self.drop_files(&paths),
            Paste::Text(text) if self.find.is_visible() => self.find.insert_str(&text),
            Paste::Text(text) => self.insert_text(&text),
        }
    }

    /// Load the first dropped file, replacing the document
    ///
    /// A read failure is reported in a dialog and leaves the document as
    /// it was.
    pub fn drop_files(&mut self, paths: &[PathBuf]) {
        let Some(path) = paths.first() else {
            return;
        };
        if paths.len() > 1 {
            tracing::debug!(ignored = paths.len() - 1, "only the first dropped file is loaded");
        }

        match drop::read_file(path) {
            Ok(text) => {
                self.surface.set_text(text);
                self.window.scroll_to_top();
                self.set_message(format!("Loaded {}", path.display()));
            }
            Err(e) => {
                tracing::warn!(error = %e, "dropped file could not be read");
                self.show_dialog(format!("Error reading file: {}", e));
            }
        }
    }

    /// Run find-next with the find bar's query
    pub fn find_next(&mut self) {
        match self.find.find_next(&mut self.surface) {
            FindOutcome::Found { start, .. } => {
                let (line, offset) = self.surface.position_of(start);
                let col = line::byte_to_col(self.surface.line_text(line), offset, self.surface.tab_width());
                self.window.ensure_visible(line, col, self.scroll_margin);
            }
            FindOutcome::NotFound => self.show_dialog("Text not found"),
            FindOutcome::EmptyQuery => {}
        }
    }

    /// Run highlight passes until no change is pending
    pub fn refresh_highlighting(&mut self) {
        while self.surface.take_change() {
            self.highlighter.rehighlight(&mut self.surface);
        }
    }

    /// Replace the selection with `text`
    pub fn insert_text(&mut self, text: &str) {
        self.surface.insert_str(text);
    }

    /// Move the caret; returns false if nothing moved
    pub fn move_caret(&mut self, motion: Motion, extend: bool) -> bool {
        let before = (self.surface.selection(), self.surface.caret());
        self.surface.move_caret(motion, extend);
        before != (self.surface.selection(), self.surface.caret())
    }

    /// Record a new screen size
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.screen = (cols, rows);
        self.layout();
    }

    /// Fit the window into the screen: all rows but the status line, all
    /// columns but the gutter
    fn layout(&mut self) {
        let (cols, rows) = self.screen;
        let gutter = self.gutter_width() as u16;
        self.window
            .set_size(rows.saturating_sub(1), cols.saturating_sub(gutter));
    }

    /// Width of the line-number gutter, including its separator
    pub fn gutter_width(&self) -> usize {
        if !self.show_line_numbers {
            return 0;
        }
        let digits = self.surface.line_count().to_string().len();
        digits.max(3) + 1
    }

    /// Keep the caret on screen
    pub fn scroll_to_caret(&mut self) {
        self.layout();
        let (line, offset) = self.surface.position_of(self.surface.caret());
        let col = line::byte_to_col(self.surface.line_text(line), offset, self.surface.tab_width());
        self.window.ensure_visible(line, col, self.scroll_margin);
    }

    /// Show a modal dialog
    pub fn show_dialog(&mut self, text: impl Into<String>) {
        self.dialog = Some(text.into());
    }

    /// Current dialog text
    pub fn dialog(&self) -> Option<&str> {
        self.dialog.as_deref()
    }

    /// Set the status line message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    /// Current status line message
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Stop the main loop
    pub fn quit(&mut self) {
        self.running = false;
    }
}
