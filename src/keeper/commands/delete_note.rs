use crate::commands::{CmdMessage, CmdResult};
use crate::error::{KeeperError, Result};
use crate::notebook::NoteBook;

pub fn run(notebook: &mut NoteBook, title: &str) -> Result<CmdResult> {
    let title = title.trim();
    if title.is_empty() {
        return Err(KeeperError::EmptyValue("Title cannot be empty.".into()));
    }
    notebook.delete_by_title(title)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Note '{}' deleted successfully.",
        title
    ))))
}
