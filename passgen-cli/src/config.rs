use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "passgen";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub version: f32,
    pub default_length: usize,
    pub default_filename: String,
    pub notifications: bool,
    /// How long `gen --copy` keeps serving the clipboard before exiting
    pub clipboard_seconds: u64,
}

/// `Config` implements `Default`
impl ::std::default::Default for Config {
    fn default() -> Self {
        Self {
            version: 0.1,
            default_length: 16,
            default_filename: "password.txt".into(),
            notifications: true,
            clipboard_seconds: 10,
        }
    }
}

impl Config {
    /// Read the configuration from `path`, or from the platform config directory.
    ///
    /// A missing file yields the default values. Nothing is written to disk.
    pub fn try_load(path: Option<&Path>) -> Result<Self> {
        let path: PathBuf = match path {
            Some(path) => path.to_owned(),
            None => confy::get_configuration_file_path(APP_NAME, None)
                .with_context(|| "trying to locate the default config file")?,
        };

        if !path.is_file() {
            log::debug!("no config file at {:?}, using the defaults", path);
            return Ok(Self::default());
        }

        let conf = confy::load_path(&path)
            .with_context(|| format!("trying to load config file {:?}", path))?;
        log::debug!("loaded config {:?}", conf);
        Ok(conf)
    }

    /// Like [`Config::try_load`], but an unusable config falls back to the defaults.
    pub fn load(path: Option<&Path>) -> Self {
        Self::try_load(path).unwrap_or_else(|err| {
            log::warn!("{:#}, using the defaults", err);
            Self::default()
        })
    }
}
