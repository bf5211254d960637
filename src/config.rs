use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::encode::Encoding;
use crate::error::SeedError;
use crate::generator::{DEFAULT_IMAGES_FOLDER, DEFAULT_OUTPUT_FILE};
use crate::logger::warn;

const APP_NAME: &str = "catalog-seed";
const CONFIG_FILE: &str = "config.yaml";

/// Optional overrides, from `config.yaml` or the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub images_folder: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub encoding: Option<Encoding>,
}

/// Fully resolved run parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub images_folder: PathBuf,
    pub output_file: PathBuf,
    pub encoding: Encoding,
}

impl Config {
    /// Load the user config file. Returns defaults if it does not exist.
    pub fn new() -> Result<Self> {
        let path = Self::config_file_path()?;
        Self::load_from(&path)
    }

    /// Like [`Config::new`], but a config location that cannot be resolved
    /// or read only costs the overrides: the run continues on defaults.
    /// A config file that exists and is malformed is still an error.
    pub fn load_or_default() -> Result<Self> {
        match Self::config_file_path() {
            Ok(path) => Self::load_or_default_from(&path),
            Err(err) => {
                warn(&format!("config lookup failed, using defaults: {err:#}"));
                Ok(Self::default())
            }
        }
    }

    pub fn load_or_default_from(path: &Path) -> Result<Self> {
        match Self::load_from(path) {
            Err(err) if err.downcast_ref::<SeedError>().is_none() => {
                println!("Warning: ignoring config {}: {err:#}", path.display());
                warn(&format!("config {} unusable: {err:#}", path.display()));
                Ok(Self::default())
            }
            result => result,
        }
    }

    /// Location of `config.yaml`; unlike [`Config::app_config_dir`] this
    /// never touches the filesystem.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(os_config_dir()?.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Return the application config directory path, creating it if missing.
    pub fn app_config_dir() -> Result<PathBuf> {
        let path = os_config_dir()?.join(APP_NAME);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.try_exists().unwrap_or(false) {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        if data.trim().is_empty() {
            return Ok(Self::default());
        }
        let config = serde_yaml::from_str(&data).map_err(|e| SeedError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(config)
    }

    /// Fields set in `other` win.
    pub fn merge(self, other: Config) -> Config {
        Config {
            images_folder: other.images_folder.or(self.images_folder),
            output_file: other.output_file.or(self.output_file),
            encoding: other.encoding.or(self.encoding),
        }
    }

    pub fn settings(self) -> Result<Settings> {
        let images_folder = self
            .images_folder
            .unwrap_or_else(|| PathBuf::from(DEFAULT_IMAGES_FOLDER));
        let output_file = self
            .output_file
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE));
        Ok(Settings {
            images_folder: expand_path(&images_folder)
                .ok_or_else(|| anyhow::anyhow!("cannot expand {} (unset variable?)", images_folder.display()))?,
            output_file: expand_path(&output_file)
                .ok_or_else(|| anyhow::anyhow!("cannot expand {} (unset variable?)", output_file.display()))?,
            encoding: self.encoding.unwrap_or_default(),
        })
    }
}

fn os_config_dir() -> Result<PathBuf> {
    if cfg!(target_os = "macos") {
        dirs_next::home_dir().map(|h| h.join(".config"))
    } else {
        dirs_next::config_dir()
    }
    .ok_or_else(|| anyhow::anyhow!("failed to find os config dir."))
}

/// Expand a leading `~` and `$VAR` (or `%VAR%` on windows) components.
/// Returns `None` when a referenced variable is unset or not unicode.
pub fn expand_path(path: &Path) -> Option<PathBuf> {
    let mut components = path.iter().peekable();
    let mut expanded = if components.peek().is_some_and(|c| *c == "~") {
        components.next();
        dirs_next::home_dir()?
    } else {
        PathBuf::new()
    };
    for component in components {
        let text = component.to_str()?;
        let var = if cfg!(unix) {
            text.strip_prefix('$')
        } else if cfg!(windows) {
            text.strip_prefix('%').and_then(|t| t.strip_suffix('%'))
        } else {
            None
        };
        match var {
            Some(name) => expanded.push(std::env::var(name).ok()?),
            None => expanded.push(component),
        }
    }
    Some(expanded)
}
