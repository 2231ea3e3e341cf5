use crate::desktop::{FixedPath, NativeSaveDialog, SaveDialog};
use crate::{App, Config, Desktop};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Generate one password, print it, then optionally copy and save it.
///
/// `output` saves to that path, `save` asks with the native dialog.
pub fn run(
    conf: Config,
    length: Option<String>,
    copy: bool,
    output: Option<PathBuf>,
    save: bool,
) -> Result<()> {
    let wants_save = save || output.is_some();
    let save_dialog: Box<dyn SaveDialog> = match output {
        Some(path) => Box::new(FixedPath(path)),
        None => Box::new(NativeSaveDialog),
    };

    let mut app = App::new(conf, Desktop::system(save_dialog));
    if let Some(length) = length {
        app.set_length_field(length);
    }

    app.try_generate()?;
    println!("{}", app.password());

    if copy {
        eprintln!(
            "Keeping the password on the clipboard for up to {} seconds",
            app.config().clipboard_seconds
        );
        app.try_copy_and_hold()
            .with_context(|| "trying to copy the password to the clipboard")?;
    }

    if wants_save {
        match app.try_save()? {
            Some(path) => log::debug!("saved to {:?}", path),
            None => log::debug!("save cancelled"),
        }
    }

    Ok(())
}
