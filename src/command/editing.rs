//! Editing commands - text modification operations

use crate::editor::EditorState;
use crate::error::Result;
use super::CommandStatus;

/// Insert a line break, matching the document's line endings
pub fn newline(editor: &mut EditorState, _extend: bool) -> Result<CommandStatus> {
    let eol = if editor.surface.text().contains("\r\n") {
        "\r\n"
    } else {
        "\n"
    };
    editor.insert_text(eol);
    Ok(CommandStatus::Success)
}

/// Insert a literal tab
pub fn insert_tab(editor: &mut EditorState, _extend: bool) -> Result<CommandStatus> {
    editor.insert_text("\t");
    Ok(CommandStatus::Success)
}

/// Delete the selection, or the character before the caret
pub fn delete_char_backward(editor: &mut EditorState, _extend: bool) -> Result<CommandStatus> {
    if editor.surface.delete_backward() {
        Ok(CommandStatus::Success)
    } else {
        Ok(CommandStatus::Failure)
    }
}

/// Delete the selection, or the character at the caret
pub fn delete_char_forward(editor: &mut EditorState, _extend: bool) -> Result<CommandStatus> {
    if editor.surface.delete_forward() {
        Ok(CommandStatus::Success)
    } else {
        Ok(CommandStatus::Failure)
    }
}
