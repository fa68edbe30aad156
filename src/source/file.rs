use crate::data::{parse_rows, Dataset};
use crate::error::Result;
use crate::ioutils::read_text;
use crate::source::interface::DataSource;
use std::path::{Path, PathBuf};

/// Reads rows from a local JSON file, or stdin for `-`.
pub struct FileSource<P: AsRef<Path>> {
    path: P,
}

impl<P: AsRef<Path>> FileSource<P> {
    pub fn new(path: P) -> Self {
        Self { path }
    }
}

impl<P: AsRef<Path>> DataSource for FileSource<P> {
    fn fetch(&self) -> Result<Dataset> {
        let path = self.path.as_ref();
        let text = read_text(path)?;
        let rows = parse_rows(&text)?;
        log::debug!("Read {} rows from '{}'", rows.len(), path.display());
        Dataset::new(rows)
    }
}

impl From<&str> for FileSource<PathBuf> {
    fn from(path: &str) -> Self {
        Self::new(PathBuf::from(path))
    }
}
