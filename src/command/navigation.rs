//! Navigation commands - caret movement and selection

use crate::editor::EditorState;
use crate::error::Result;
use crate::surface::Motion;
use super::CommandStatus;

/// Move the caret, reporting failure when it could not move
fn motion(editor: &mut EditorState, motion: Motion, extend: bool) -> Result<CommandStatus> {
    if editor.move_caret(motion, extend) {
        Ok(CommandStatus::Success)
    } else {
        Ok(CommandStatus::Failure)
    }
}

/// Move cursor forward one character
pub fn forward_char(editor: &mut EditorState, extend: bool) -> Result<CommandStatus> {
    motion(editor, Motion::Right, extend)
}

/// Move cursor backward one character
pub fn backward_char(editor: &mut EditorState, extend: bool) -> Result<CommandStatus> {
    motion(editor, Motion::Left, extend)
}

/// Move cursor to next line
pub fn next_line(editor: &mut EditorState, extend: bool) -> Result<CommandStatus> {
    motion(editor, Motion::Down, extend)
}

/// Move cursor to previous line
pub fn previous_line(editor: &mut EditorState, extend: bool) -> Result<CommandStatus> {
    motion(editor, Motion::Up, extend)
}

/// Move cursor to beginning of line
pub fn beginning_of_line(editor: &mut EditorState, extend: bool) -> Result<CommandStatus> {
    motion(editor, Motion::LineStart, extend)
}

/// Move cursor to end of line
pub fn end_of_line(editor: &mut EditorState, extend: bool) -> Result<CommandStatus> {
    motion(editor, Motion::LineEnd, extend)
}

/// Scroll down (forward) one page
pub fn scroll_down(editor: &mut EditorState, extend: bool) -> Result<CommandStatus> {
    let page = editor.window.page_lines();
    motion(editor, Motion::PageDown(page), extend)
}

/// Scroll up (backward) one page
pub fn scroll_up(editor: &mut EditorState, extend: bool) -> Result<CommandStatus> {
    let page = editor.window.page_lines();
    motion(editor, Motion::PageUp(page), extend)
}

/// Move to beginning of document
pub fn beginning_of_buffer(editor: &mut EditorState, extend: bool) -> Result<CommandStatus> {
    motion(editor, Motion::DocumentStart, extend)
}

/// Move to end of document
pub fn end_of_buffer(editor: &mut EditorState, extend: bool) -> Result<CommandStatus> {
    motion(editor, Motion::DocumentEnd, extend)
}

/// Select the whole document
pub fn select_all(editor: &mut EditorState, _extend: bool) -> Result<CommandStatus> {
    editor.surface.select_all();
    Ok(CommandStatus::Success)
}
