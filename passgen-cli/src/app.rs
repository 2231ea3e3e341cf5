//! The application context: the two fields of the window and the actions bound to them.

use crate::config::{Config, APP_NAME};
use crate::desktop::{Desktop, DesktopError};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const ABOUT_TITLE: &str = "About";

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Password(#[from] passgen::Error),
    #[error(transparent)]
    Desktop(#[from] DesktopError),
}

pub fn about_text() -> String {
    format!(
        "{} {}\nRandom password generator",
        APP_NAME,
        env!("CARGO_PKG_VERSION")
    )
}

pub struct App {
    config: Config,
    desktop: Desktop,
    length_field: String,
    password_field: String,
}

impl App {
    pub fn new(config: Config, desktop: Desktop) -> Self {
        let length_field = config.default_length.to_string();
        App {
            config,
            desktop,
            length_field,
            password_field: String::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn length_field(&self) -> &str {
        &self.length_field
    }

    pub fn set_length_field<S: Into<String>>(&mut self, text: S) {
        self.length_field = text.into();
    }

    /// The password currently displayed.
    pub fn password(&self) -> &str {
        &self.password_field
    }

    /// Generate a password from the length field and display it.
    ///
    /// On error the displayed password is left as it was.
    pub fn try_generate(&mut self) -> Result<(), AppError> {
        let requested = passgen::parse_length(&self.length_field)?;
        self.password_field = passgen::generate(requested)?;
        Ok(())
    }

    pub fn on_generate(&mut self) {
        if let Err(err) = self.try_generate() {
            self.desktop.dialogs.show_error(&err);
        }
    }

    pub fn try_copy(&mut self) -> Result<(), AppError> {
        self.desktop.clipboard.set_contents(&self.password_field)?;
        Ok(())
    }

    /// Copy, then keep the clipboard served for `clipboard_seconds` so the
    /// contents survive the process exiting.
    pub fn try_copy_and_hold(&mut self) -> Result<(), AppError> {
        let hold = Duration::from_secs(self.config.clipboard_seconds);
        self.desktop
            .clipboard
            .set_contents_for(&self.password_field, hold)?;
        Ok(())
    }

    pub fn on_copy(&mut self) {
        if let Err(err) = self.try_copy() {
            self.desktop.dialogs.show_error(&err);
        }
    }

    /// Ask for a destination and write the displayed password there.
    ///
    /// Returns the path written, or `None` if the dialog was cancelled.
    pub fn try_save(&mut self) -> Result<Option<PathBuf>, AppError> {
        let path = match self
            .desktop
            .save_dialog
            .choose(&self.config.default_filename)?
        {
            Some(path) => path,
            None => return Ok(None),
        };

        passgen::save(&path, &self.password_field)?;
        Ok(Some(path))
    }

    pub fn on_save(&mut self) {
        match self.try_save() {
            Ok(Some(_)) => self
                .desktop
                .dialogs
                .show_information("Saved", "File saved successfully"),
            Ok(None) => (),
            Err(err) => self.desktop.dialogs.show_error(&err),
        }
    }

    /// Beep and post the about notification. Failures are logged, never fatal.
    pub fn about(&mut self) {
        if let Err(err) = self.desktop.notifier.beep() {
            log::warn!("{}", err);
        }

        if !self.config.notifications {
            return;
        }

        if let Err(err) = self.desktop.notifier.notify(ABOUT_TITLE, &about_text()) {
            log::warn!("{}", err);
        }
    }
}
