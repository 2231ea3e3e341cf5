use crate::Error;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Create or truncate the file at `path` and write `content` to it, byte for byte.
///
/// ```no_run
/// passgen::save("password.txt", "Ab3!")?;
/// # Ok::<(), passgen::Error>(())
/// ```
pub fn save<P: AsRef<Path>>(path: P, content: &str) -> Result<(), Error> {
    let path = path.as_ref();
    let io_error = |source| Error::Io {
        path: path.to_owned(),
        source,
    };

    let mut file = File::create(path).map_err(io_error)?;
    file.write_all(content.as_bytes()).map_err(io_error)?;

    log::info!("password saved to {}", path.display());
    Ok(())
}
