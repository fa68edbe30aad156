use crate::{data::Dataset, error::Result};

/// Trait for fetching rows from different sources.
pub trait DataSource {
    /// Fetches the full dataset.
    ///
    /// # Returns
    /// * `Result<Dataset>` - A non-empty dataset, or the reason none could be fetched
    fn fetch(&self) -> Result<Dataset>;
}
