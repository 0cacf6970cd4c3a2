//! Prompt-based directory picker.
//!
//! The terminal stand-in for a native folder dialog: the user types a path,
//! an empty line cancels.

use std::path::PathBuf;

use lycaddy_core::{DirectoryPicker, PickPurpose, expand_user_path};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::warn;

/// Reads a directory path from the terminal.
#[derive(Debug, Default)]
pub struct PromptPicker;

impl PromptPicker {
    /// Create a new picker.
    pub const fn new() -> Self {
        Self
    }
}

impl DirectoryPicker for PromptPicker {
    fn pick_directory(&self, purpose: PickPurpose) -> Option<PathBuf> {
        let mut editor = match DefaultEditor::new() {
            Ok(editor) => editor,
            Err(e) => {
                warn!(error = %e, "Cannot open terminal for directory prompt");
                return None;
            }
        };

        let prompt = format!("{} (empty to cancel): ", purpose.title());
        loop {
            match editor.readline(&prompt) {
                Ok(line) => match resolve_picked(&line) {
                    Picked::Cancelled => return None,
                    Picked::Dir(dir) => return Some(dir),
                    Picked::Invalid(message) => eprintln!("{message}"),
                },
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => return None,
                Err(e) => {
                    warn!(error = %e, "Directory prompt failed");
                    return None;
                }
            }
        }
    }
}

/// Outcome of one line of picker input.
#[derive(Debug, PartialEq, Eq)]
pub enum Picked {
    /// Empty input.
    Cancelled,
    /// An existing directory, made absolute.
    Dir(PathBuf),
    /// Input that does not name a directory; ask again.
    Invalid(String),
}

/// Interpret a line typed at the directory prompt.
pub fn resolve_picked(line: &str) -> Picked {
    if line.trim().is_empty() {
        return Picked::Cancelled;
    }
    match expand_user_path(line) {
        Ok(path) if path.is_dir() => Picked::Dir(path),
        Ok(path) => Picked::Invalid(format!("{} is not a directory", path.display())),
        Err(e) => Picked::Invalid(e.to_string()),
    }
}
