use std::{fmt::Display, path::PathBuf};

use dotmatrix_engine::Result;

/// Outcome of an editor action, shown to the user as one line.
///
/// Characters that are missing from the set are ordinary outcomes here,
/// not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorStatus {
    /// The glyph was copied into the edit buffer.
    Loaded(char),
    /// The character has no glyph yet, the edit buffer was cleared.
    Undefined(char),
    Saved(char),
    Removed(char),
    /// Removal was requested for something that is not a key of the set.
    NotDefined(String),
    /// The backing file vanished, the set and the buffer were cleared.
    FileMissing(PathBuf),
}

impl Display for EditorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditorStatus::Loaded(ch) => write!(f, "The \"{ch}\" character is loaded into the grid."),
            EditorStatus::Undefined(_) => write!(f, "There is no such character yet. Design it now if needed."),
            EditorStatus::Saved(ch) => write!(f, "The \"{ch}\" character has been saved."),
            EditorStatus::Removed(ch) => write!(f, "The \"{ch}\" character has been removed from the character set."),
            EditorStatus::NotDefined(key) => write!(f, "Cannot remove \"{key}\" because the character is not defined."),
            EditorStatus::FileMissing(path) => write!(f, "The file does not exist: {}", path.display()),
        }
    }
}

/// Message bar text for the result of an editor action.
pub fn status_message(result: &Result<EditorStatus>) -> String {
    match result {
        Ok(status) => status.to_string(),
        Err(err) => err.to_string(),
    }
}
