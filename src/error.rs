use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    Io(#[from] std::io::Error),

    /// Transport or protocol failure while fetching rows. The message is kept
    /// verbatim, including any HTTP status line and response body.
    #[error("Failed to fetch data: {0}")]
    Fetch(String),

    #[error("The dataset is empty.")]
    EmptyDataset,

    #[error("Failed to read '{}': {source}.", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A single or bulk export could not write its output file.
    #[error("Failed to write '{}': {source}.", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Row {row} is out of range (dataset has {total} rows).")]
    RowOutOfRange { row: usize, total: usize },

    #[error("Template references unknown columns: {0}.")]
    UnknownPlaceholders(String),

    #[error("Invalid rows: {0}.")]
    InvalidRows(String),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("No configuration file found in '{dir}'. Tried: {config_files}.")]
    ConfigNotFound { dir: String, config_files: String },

    #[error("Configuration validation failed: {0}")]
    ConfigValidation(String),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
