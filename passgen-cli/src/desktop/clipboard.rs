use super::{Clipboard, DesktopError};
#[cfg(target_os = "linux")]
use std::time::{Duration, Instant};

/// The system clipboard, opened on first use.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    fn open(&mut self) -> Result<&mut arboard::Clipboard, DesktopError> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new()?,
        };
        Ok(self.inner.insert(clipboard))
    }
}

impl Clipboard for SystemClipboard {
    fn set_contents(&mut self, text: &str) -> Result<(), DesktopError> {
        self.open()?.set_text(text)?;
        Ok(())
    }

    // On X11 and Wayland the contents live only as long as their owner, so
    // block until another program takes them over or `hold` runs out.
    #[cfg(target_os = "linux")]
    fn set_contents_for(&mut self, text: &str, hold: Duration) -> Result<(), DesktopError> {
        use arboard::SetExtLinux;

        self.open()?
            .set()
            .wait_until(Instant::now() + hold)
            .text(text)?;
        Ok(())
    }
}
