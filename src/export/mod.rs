//! Writing rendered rows to files.

pub mod exporter;
pub mod naming;
pub mod operation;

pub use exporter::{export_all, Exporter};
pub use naming::{display_name, sanitize_file_name, FileNaming};
pub use operation::{ExportOperation, ExportProgress};
