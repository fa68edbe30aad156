/// Handles argument parsing and command execution.
pub mod cli;

/// Project configuration files.
pub mod config;

/// Shared constants.
pub mod constants;

/// Rows, cell values and datasets.
pub mod data;

/// Defines custom error types.
pub mod error;

/// Writing rendered rows to files.
pub mod export;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// User confirmation prompts.
pub mod prompt;

/// Immutable snapshot of the active dataset, selected row and template.
pub mod session;

/// Fetching rows from an API endpoint or a local file.
pub mod source;

/// Template parsing, rendering and validation.
pub mod template;

pub use data::{Dataset, Row, Schema, Value};
pub use error::{Error, Result};
pub use export::{export_all, Exporter};
pub use session::Session;
pub use template::{classify, parse, render, to_text, Segment, SegmentKind, Template};
