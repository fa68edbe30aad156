use std::path::Path;

use crate::constants::STDIN_INDICATOR;
use crate::error::{Error, Result};

pub fn read_from(mut reader: impl std::io::Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf).map_err(Error::Io)?;
    Ok(buf)
}

/// Reads a UTF-8 file, or stdin when `path` is `-`.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if path == Path::new(STDIN_INDICATOR) {
        return read_from(std::io::stdin());
    }
    std::fs::read_to_string(path)
        .map_err(|source| Error::Read { path: path.to_path_buf(), source })
}

/// Writes `content` to `dest_path`, creating parent directories if needed.
pub fn write_text<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    let write_error = |source| Error::Write { path: dest_path.to_path_buf(), source };

    if let Some(parent) = dest_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }
    std::fs::write(dest_path, content).map_err(write_error)
}

/// Loads template text as-is.
pub fn load_template<P: AsRef<Path>>(path: P) -> Result<String> {
    read_text(path)
}

/// Saves the raw template text, placeholders untouched.
pub fn save_template<P: AsRef<Path>>(template: &str, path: P) -> Result<()> {
    write_text(template, path)
}
