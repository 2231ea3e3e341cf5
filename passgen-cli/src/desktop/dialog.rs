use super::{DesktopError, Dialogs, SaveDialog};
use std::error::Error as StdError;
use std::io::{self, Write};
use std::path::PathBuf;

/// The native save-file dialog.
pub struct NativeSaveDialog;

impl SaveDialog for NativeSaveDialog {
    fn choose(&mut self, default_name: &str) -> Result<Option<PathBuf>, DesktopError> {
        Ok(rfd::FileDialog::new()
            .set_title("Save password")
            .set_file_name(default_name)
            .save_file())
    }
}

/// Ask for the path on the terminal. An empty answer picks the default name.
pub struct PromptSaveDialog;

impl SaveDialog for PromptSaveDialog {
    fn choose(&mut self, default_name: &str) -> Result<Option<PathBuf>, DesktopError> {
        print!("Save as [{}]: ", default_name);
        io::stdout().flush().map_err(DesktopError::Prompt)?;

        let mut answer = String::new();
        let read = io::stdin()
            .read_line(&mut answer)
            .map_err(DesktopError::Prompt)?;

        // EOF cancels
        if read == 0 {
            return Ok(None);
        }

        match answer.trim() {
            "" => Ok(Some(PathBuf::from(default_name))),
            path => Ok(Some(PathBuf::from(path))),
        }
    }
}

/// A path chosen up front, e.g. with `--output`.
pub struct FixedPath(pub PathBuf);

impl SaveDialog for FixedPath {
    fn choose(&mut self, _default_name: &str) -> Result<Option<PathBuf>, DesktopError> {
        Ok(Some(self.0.clone()))
    }
}

pub struct TerminalDialogs;

impl Dialogs for TerminalDialogs {
    fn show_error(&mut self, err: &dyn StdError) {
        eprintln!("Error: {}", err);
    }

    fn show_information(&mut self, title: &str, message: &str) {
        println!("{}: {}", title, message);
    }
}
