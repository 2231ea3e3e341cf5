//! The collaborators the application talks to: clipboard, notifications and dialogs.
//!
//! Each one sits behind a small trait so that [`crate::App`] can be driven
//! without a desktop session.

use std::error::Error as StdError;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

mod clipboard;
mod dialog;
mod notify;

pub use clipboard::SystemClipboard;
pub use dialog::{FixedPath, NativeSaveDialog, PromptSaveDialog, TerminalDialogs};
pub use notify::SystemNotifier;

#[derive(Error, Debug)]
pub enum DesktopError {
    #[error("clipboard unavailable: {0}")]
    Clipboard(#[from] arboard::Error),
    #[error("cannot show notification: {0}")]
    Notification(#[from] notify_rust::error::Error),
    #[error("cannot ring the bell: {0}")]
    Beep(#[source] io::Error),
    #[error("cannot read the answer: {0}")]
    Prompt(#[source] io::Error),
}

pub trait Clipboard {
    fn set_contents(&mut self, text: &str) -> Result<(), DesktopError>;

    /// Set the contents for a caller about to exit, keeping them available for up to `hold`.
    fn set_contents_for(&mut self, text: &str, _hold: Duration) -> Result<(), DesktopError> {
        self.set_contents(text)
    }
}

pub trait Notifier {
    fn beep(&mut self) -> Result<(), DesktopError>;
    fn notify(&mut self, title: &str, body: &str) -> Result<(), DesktopError>;
}

pub trait SaveDialog {
    /// Ask where to save. `Ok(None)` means the user cancelled.
    fn choose(&mut self, default_name: &str) -> Result<Option<PathBuf>, DesktopError>;
}

/// Modal error and information messages.
pub trait Dialogs {
    fn show_error(&mut self, err: &dyn StdError);
    fn show_information(&mut self, title: &str, message: &str);
}

pub struct Desktop {
    pub clipboard: Box<dyn Clipboard>,
    pub notifier: Box<dyn Notifier>,
    pub save_dialog: Box<dyn SaveDialog>,
    pub dialogs: Box<dyn Dialogs>,
}

impl Desktop {
    /// System clipboard and notifications, terminal dialogs, and `save_dialog` for Save.
    pub fn system(save_dialog: Box<dyn SaveDialog>) -> Self {
        Desktop {
            clipboard: Box::new(SystemClipboard::default()),
            notifier: Box::new(SystemNotifier),
            save_dialog,
            dialogs: Box::new(TerminalDialogs),
        }
    }
}
