//! Input validation for CLI arguments

use std::path::{Path, PathBuf};

/// Clap value parser accepting only paths that exist
pub fn config_path(value: &str) -> Result<PathBuf, String> {
    let path = Path::new(value);
    if path.exists() {
        Ok(path.to_path_buf())
    } else {
        Err(format!("file {value} does not exists"))
    }
}
