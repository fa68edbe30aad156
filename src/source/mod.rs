use crate::data::Dataset;
use crate::error::Result;
use crate::source::{file::FileSource, http::HttpSource, interface::DataSource};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

pub mod file;
pub mod http;
pub mod interface;

pub use http::mask_url;

/// Where rows come from.
#[derive(Debug, Clone, PartialEq)]
pub enum RowSource {
    /// JSON API endpoint
    Http(Url),
    /// Local JSON file, or `-` for stdin
    File(PathBuf),
}

impl RowSource {
    /// Treats `http`/`https` URLs as API endpoints and anything else as a path.
    pub fn from_string(s: &str) -> Self {
        match Url::parse(s) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => RowSource::Http(url),
            _ => RowSource::File(PathBuf::from(s)),
        }
    }
}

impl std::fmt::Display for RowSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowSource::Http(url) => write!(f, "API endpoint: '{}'", mask_url(url)),
            RowSource::File(path) => write!(f, "local file: '{}'", path.display()),
        }
    }
}

/// Fetches a dataset from a URL or file path.
///
/// # Arguments
/// * `s` - API URL or path to a JSON file
/// * `timeout` - Request timeout for API endpoints
pub fn fetch_rows(s: &str, timeout: Duration) -> Result<Dataset> {
    let source = RowSource::from_string(s);
    log::debug!("Loading rows from {source}");
    match source {
        RowSource::Http(url) => HttpSource::new(url.as_str())?.with_timeout(timeout).fetch(),
        RowSource::File(path) => FileSource::new(path).fetch(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_source_kind_from_string() {
        assert!(matches!(
            RowSource::from_string("https://sheetdb.io/api/v1/abc"),
            RowSource::Http(_)
        ));
        assert!(matches!(RowSource::from_string("http://localhost:8080/"), RowSource::Http(_)));
        assert_eq!(RowSource::from_string("rows.json"), RowSource::File("rows.json".into()));
        assert_eq!(RowSource::from_string("-"), RowSource::File("-".into()));
        assert!(matches!(RowSource::from_string(r"C:\data\rows.json"), RowSource::File(_)));
        assert!(matches!(RowSource::from_string("ftp://host/rows.json"), RowSource::File(_)));
    }

    #[test]
    fn display_masks_api_keys() {
        let source = RowSource::from_string("https://sheetdb.io/api/v1/SECRET");
        assert_eq!(source.to_string(), "API endpoint: 'https://sheetdb.io/***'");
        let source = RowSource::from_string("data/rows.json");
        assert_eq!(source.to_string(), "local file: 'data/rows.json'");
    }
}
