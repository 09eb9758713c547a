// src/utils.rs
use crate::error::TidyError;
use std::env;
use std::path::{Path, PathBuf};

/// Canonicalizes `path` and checks that it names an existing directory.
///
/// # Errors
///
/// Returns [`TidyError::NotADirectory`] if the path does not exist or is not
/// a directory. The error carries the absolute form of the path.
pub fn resolve_root(path: &Path) -> Result<PathBuf, TidyError> {
    match path.canonicalize() {
        Ok(resolved) if resolved.is_dir() => Ok(resolved),
        Ok(resolved) => Err(TidyError::NotADirectory(resolved)),
        Err(_) => {
            let absolute = if path.is_absolute() {
                path.to_path_buf()
            } else {
                env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            };
            Err(TidyError::NotADirectory(absolute))
        }
    }
}
