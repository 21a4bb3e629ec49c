//! Miscellaneous commands

use crate::editor::EditorState;
use crate::error::Result;
use super::CommandStatus;

/// Show or hide the find bar (C-f)
pub fn toggle_find(editor: &mut EditorState, _extend: bool) -> Result<CommandStatus> {
    editor.find.toggle();
    Ok(CommandStatus::Success)
}

/// Select the next match of the find query (F3)
pub fn find_next(editor: &mut EditorState, _extend: bool) -> Result<CommandStatus> {
    editor.find_next();
    Ok(CommandStatus::Success)
}

/// Toggle syntax highlighting (C-l)
pub fn toggle_syntax_highlighting(editor: &mut EditorState, _extend: bool) -> Result<CommandStatus> {
    editor.highlighter.toggle();
    editor.highlighter.rehighlight(&mut editor.surface);
    let status = if editor.highlighter.enabled {
        "Syntax highlighting enabled"
    } else {
        "Syntax highlighting disabled"
    };
    editor.set_message(status);
    Ok(CommandStatus::Success)
}

/// List all key bindings in a dialog (F1)
pub fn describe_bindings(editor: &mut EditorState, _extend: bool) -> Result<CommandStatus> {
    let mut text = String::from("Key bindings\n");
    for (key, name) in editor.keytab.all_bindings() {
        text.push_str(&format!("\n{:<12} {}", key, name));
    }
    editor.show_dialog(text);
    Ok(CommandStatus::Success)
}

/// Quit the editor (C-q)
pub fn quit(editor: &mut EditorState, _extend: bool) -> Result<CommandStatus> {
    editor.quit();
    Ok(CommandStatus::Success)
}
