use std::path::PathBuf;

/// A single planned file write of an export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOperation {
    /// 1-based row position.
    pub position: usize,
    pub target: PathBuf,
    pub content: String,
    pub target_exists: bool,
    /// Placeholders in this row that rendered as fallback or marker.
    pub unresolved: usize,
}

impl ExportOperation {
    /// Gets a message describing the operation and its status.
    ///
    /// # Arguments
    /// * `user_confirmed_overwrite` - Whether the user has confirmed overwriting an existing file
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    pub fn get_message(&self, user_confirmed_overwrite: bool, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };
        let target = self.target.display();

        let mut message = if self.target_exists {
            if user_confirmed_overwrite {
                format!("{prefix}Writing row {} to '{target}' (overwriting existing file)", self.position)
            } else {
                format!("{prefix}Skipping row {}: '{target}' already exists", self.position)
            }
        } else {
            format!("{prefix}Writing row {} to '{target}'", self.position)
        };

        if self.unresolved > 0 && (user_confirmed_overwrite || !self.target_exists) {
            message.push_str(&format!(" with {} unresolved placeholder(s)", self.unresolved));
        }
        message
    }
}

/// Reported to the caller after each row of a bulk export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportProgress<'a> {
    /// 1-based position of the row just handled.
    pub position: usize,
    pub total: usize,
    pub target: &'a std::path::Path,
    /// False when the row was skipped because an existing file was kept.
    pub written: bool,
}
