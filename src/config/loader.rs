//! Configuration loading and management

use crate::constants::{
    CONFIG_FILENAMES, DEFAULT_EXTENSION, DEFAULT_INDEX_WIDTH, DEFAULT_TIMEOUT_SECS,
};
use crate::error::{Error, Result};
use crate::export::FileNaming;
use crate::ioutils::read_text;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Project settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// API URL or JSON file the rows come from.
    #[serde(default)]
    pub source: Option<String>,
    /// Path to the template file.
    #[serde(default)]
    pub template: Option<PathBuf>,
    /// Directory bulk exports are written to.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    #[serde(default = "get_default_timeout_secs")]
    pub timeout_secs: u64,
    /// Column used to name exported files; the first column when unset.
    #[serde(default)]
    pub name_column: Option<String>,
    #[serde(default = "get_default_index_width")]
    pub index_width: usize,
    #[serde(default = "get_default_extension")]
    pub extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: None,
            template: None,
            output_dir: None,
            timeout_secs: get_default_timeout_secs(),
            name_column: None,
            index_width: get_default_index_width(),
            extension: get_default_extension(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), Error> {
        if self.timeout_secs == 0 {
            return Err(Error::ConfigValidation("timeout_secs must be greater than 0".into()));
        }
        if self.index_width == 0 {
            return Err(Error::ConfigValidation("index_width must be at least 1".into()));
        }
        if !self.extension.starts_with('.') || self.extension.len() < 2 {
            return Err(Error::ConfigValidation(
                "extension must start with '.' and have at least 1 character after it".into(),
            ));
        }
        if self.extension.contains(crate::constants::RESERVED_FILENAME_CHARS) {
            return Err(Error::ConfigValidation(format!(
                "extension '{}' contains a character that is not allowed in file names",
                self.extension
            )));
        }
        Ok(())
    }

    /// Loads the configuration from an explicit file.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = read_text(path)?;
        let config: Config = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => serde_yaml::from_str(&content)?,
            _ => serde_json::from_str(&content)?,
        };
        log::debug!("Loaded configuration from '{}'", path.display());
        Ok(config)
    }

    /// Looks for the first known configuration file in `dir`.
    pub fn load_config<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();

        for config_file_name in CONFIG_FILENAMES.iter() {
            let config_file_path = dir.join(config_file_name);
            if config_file_path.exists() {
                return Self::load_file(config_file_path);
            }
        }

        Err(Error::ConfigNotFound {
            dir: dir.display().to_string(),
            config_files: CONFIG_FILENAMES.join(", "),
        })
    }

    /// Like [`load_config`](Self::load_config), falling back to defaults when
    /// `dir` has no configuration file.
    pub fn discover<P: AsRef<Path>>(dir: P) -> Result<Self> {
        match Self::load_config(dir) {
            Err(Error::ConfigNotFound { .. }) => Ok(Self::default()),
            other => other,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn naming(&self) -> FileNaming {
        FileNaming::new(self.index_width, self.extension.clone())
    }
}

fn get_default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn get_default_index_width() -> usize {
    DEFAULT_INDEX_WIDTH
}

fn get_default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}
