use crate::{
    data::{Dataset, Row},
    error::{Error, Result},
    export::{
        naming::{display_name, FileNaming},
        operation::{ExportOperation, ExportProgress},
    },
    prompt::confirm,
    template::{to_text, unresolved_count, Template},
};
use std::ops::ControlFlow;
use std::path::Path;

/// Writes rendered rows to disk.
///
/// Rows are handled one at a time in dataset order. The first failed write
/// aborts the export; files already written stay on disk.
pub struct Exporter<'a> {
    template: &'a Template,
    naming: FileNaming,
    confirm_overwrite: bool,
    dry_run: bool,
}

impl<'a> Exporter<'a> {
    pub fn new(template: &'a Template) -> Self {
        Self { template, naming: FileNaming::default(), confirm_overwrite: false, dry_run: false }
    }

    pub fn with_naming(mut self, naming: FileNaming) -> Self {
        self.naming = naming;
        self
    }

    /// Ask before replacing a file that already exists.
    pub fn confirm_overwrite(mut self, confirm_overwrite: bool) -> Self {
        self.confirm_overwrite = confirm_overwrite;
        self
    }

    /// Plan and log every write without touching the filesystem.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn naming(&self) -> &FileNaming {
        &self.naming
    }

    /// Renders the row at 1-based `position` and works out where it goes.
    pub fn plan(
        &self,
        position: usize,
        row: &Row,
        destination: &Path,
        name_column: Option<&str>,
    ) -> ExportOperation {
        let segments = self.template.render(row);
        let name = display_name(row, name_column, position);
        let target = destination.join(self.naming.file_name(position, &name));
        let target_exists = target.exists();
        ExportOperation {
            position,
            target,
            content: to_text(&segments),
            target_exists,
            unresolved: unresolved_count(&segments),
        }
    }

    /// Exports one file per row into `destination`.
    ///
    /// Files are named after each row's `name_column` value (or its position
    /// when the column is missing). Returns the number of files written.
    pub fn export_all(
        &self,
        rows: &[Row],
        destination: &Path,
        name_column: Option<&str>,
    ) -> Result<usize> {
        self.export_all_with(rows, destination, name_column, |_| ControlFlow::Continue(()))
    }

    /// Like [`export_all`](Self::export_all), calling `on_row` after every row.
    ///
    /// Returning [`ControlFlow::Break`] stops the export before the next row;
    /// that is the only place an export can be interrupted.
    pub fn export_all_with<F>(
        &self,
        rows: &[Row],
        destination: &Path,
        name_column: Option<&str>,
        mut on_row: F,
    ) -> Result<usize>
    where
        F: FnMut(&ExportProgress<'_>) -> ControlFlow<()>,
    {
        if rows.is_empty() {
            return Err(Error::EmptyDataset);
        }
        self.create_dir_all(destination)?;

        let total = rows.len();
        let mut written = 0;
        for (index, row) in rows.iter().enumerate() {
            let operation = self.plan(index + 1, row, destination, name_column);
            let confirmed = self.handle_operation(&operation)?;
            if confirmed {
                written += 1;
            }
            log::info!("{}", operation.get_message(confirmed, self.dry_run));

            let progress = ExportProgress {
                position: operation.position,
                total,
                target: &operation.target,
                written: confirmed,
            };
            if on_row(&progress).is_break() {
                log::info!("Export stopped after row {} of {total}", operation.position);
                break;
            }
        }

        log::debug!("Exported {written} of {total} rows to '{}'", destination.display());
        Ok(written)
    }

    /// Exports every row of a dataset, naming files after `name_column` or,
    /// when none is given, the dataset's first column.
    pub fn export_dataset(
        &self,
        dataset: &Dataset,
        destination: &Path,
        name_column: Option<&str>,
    ) -> Result<usize> {
        let name_column = name_column.or_else(|| dataset.first_column());
        self.export_all(dataset.rows(), destination, name_column)
    }

    /// Renders a single row and writes it to `target`.
    ///
    /// Returns false when the user declined to overwrite an existing file.
    pub fn export_one(&self, row: &Row, position: usize, target: &Path) -> Result<bool> {
        let segments = self.template.render(row);
        let operation = ExportOperation {
            position,
            target: target.to_path_buf(),
            content: to_text(&segments),
            target_exists: target.exists(),
            unresolved: unresolved_count(&segments),
        };
        if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.create_dir_all(parent)?;
        }
        let confirmed = self.handle_operation(&operation)?;
        log::info!("{}", operation.get_message(confirmed, self.dry_run));
        Ok(confirmed)
    }

    fn handle_operation(&self, operation: &ExportOperation) -> Result<bool> {
        let skip_prompt = !self.confirm_overwrite || !operation.target_exists;
        let confirmed =
            confirm(skip_prompt, format!("Overwrite {}?", operation.target.display()))?;
        if confirmed {
            self.write_file(&operation.content, &operation.target)?;
        }
        Ok(confirmed)
    }

    fn write_file(&self, content: &str, target: &Path) -> Result<()> {
        if self.dry_run {
            return Ok(());
        }
        std::fs::write(target, content)
            .map_err(|source| Error::Write { path: target.to_path_buf(), source })
    }

    fn create_dir_all(&self, dir: &Path) -> Result<()> {
        if self.dry_run {
            return Ok(());
        }
        std::fs::create_dir_all(dir)
            .map_err(|source| Error::Write { path: dir.to_path_buf(), source })
    }
}

/// Exports one file per row with the default naming and no prompts.
pub fn export_all(
    template: &Template,
    rows: &[Row],
    destination: &Path,
    first_column: Option<&str>,
) -> Result<usize> {
    Exporter::new(template).export_all(rows, destination, first_column)
}
