use super::{DesktopError, Notifier};
use notify_rust::Notification;
use std::io::{self, Write};

const BELL: &[u8] = b"\x07";

/// Terminal bell plus a desktop notification.
pub struct SystemNotifier;

impl Notifier for SystemNotifier {
    fn beep(&mut self) -> Result<(), DesktopError> {
        let mut stderr = io::stderr();
        stderr
            .write_all(BELL)
            .and_then(|_| stderr.flush())
            .map_err(DesktopError::Beep)
    }

    fn notify(&mut self, title: &str, body: &str) -> Result<(), DesktopError> {
        Notification::new()
            .appname(crate::config::APP_NAME)
            .summary(title)
            .body(body)
            .show()?;
        Ok(())
    }
}
