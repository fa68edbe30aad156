use crate::{
    constants::{
        DEFAULT_EXTENSION, DEFAULT_INDEX_WIDTH, FILENAME_REPLACEMENT,
        RESERVED_FILENAME_CHARS,
    },
    data::Row,
};

/// Replaces every reserved file name character with `_`.
///
/// Everything else, including non-ASCII text and whitespace, is left alone.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| if RESERVED_FILENAME_CHARS.contains(&c) { FILENAME_REPLACEMENT } else { c })
        .collect()
}

/// How exported files are named: `NNN_<name><extension>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNaming {
    /// Width of the zero-padded, 1-based row index.
    pub index_width: usize,
    /// Extension including the leading dot.
    pub extension: String,
}

impl Default for FileNaming {
    fn default() -> Self {
        Self { index_width: DEFAULT_INDEX_WIDTH, extension: DEFAULT_EXTENSION.to_string() }
    }
}

impl FileNaming {
    pub fn new(index_width: usize, extension: impl Into<String>) -> Self {
        Self { index_width, extension: extension.into() }
    }

    /// File name for the row at 1-based `position`, e.g. `007_Song_Title.txt`.
    pub fn file_name(&self, position: usize, display_name: &str) -> String {
        format!(
            "{:0width$}_{}{}",
            position,
            sanitize_file_name(display_name),
            self.extension,
            width = self.index_width
        )
    }

    /// Default name when a single row is saved on its own, e.g. `result_3.txt`.
    pub fn single_file_name(&self, position: usize) -> String {
        format!("result_{position}{}", self.extension)
    }
}

/// The name a row is exported under before sanitizing.
///
/// Uses the row's value in `name_column` when it has a non-null one, otherwise
/// the row's 1-based position.
pub fn display_name(row: &Row, name_column: Option<&str>, position: usize) -> String {
    name_column
        .and_then(|column| row.get(column))
        .filter(|value| !value.is_null())
        .map(ToString::to_string)
        .unwrap_or_else(|| position.to_string())
}
