// src/core/classifier/entry.rs
use std::fs::{self, File};
use std::io::{BufRead as _, BufReader, Read as _};
use std::path::Path;
use tracing::debug;

const FIRST_LINE_LIMIT: u64 = 4096;

/// Owner execute permission bit.
pub const OWNER_EXECUTE: u32 = 0o100;

/// Snapshot of one file in the project root, taken once per scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path relative to the project root.
    pub path: String,
    pub name: String,
    /// Extension without the leading dot; empty when there is none.
    pub extension: String,
    pub mode: u32,
    pub first_line: Option<String>,
}

impl FileEntry {
    /// Builds an entry for testing or for callers that already know the
    /// file's properties.
    #[must_use]
    pub fn new(name: &str, mode: u32, first_line: Option<&str>) -> Self {
        Self {
            path: name.to_owned(),
            name: name.to_owned(),
            extension: extension_of(name),
            mode,
            first_line: first_line.map(str::to_owned),
        }
    }

    /// Reads name, permission bits and first line from disk. Metadata or read
    /// failures leave `mode` at 0 and `first_line` empty rather than failing.
    #[must_use]
    pub fn from_path(root: &Path, path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let relative = path.strip_prefix(root).unwrap_or(path);

        Self {
            path: relative.to_string_lossy().into_owned(),
            extension: extension_of(&name),
            name,
            mode: read_mode(path),
            first_line: read_first_line(path),
        }
    }

    #[must_use]
    pub const fn is_owner_executable(&self) -> bool {
        self.mode & OWNER_EXECUTE != 0
    }

    #[must_use]
    pub fn has_shebang(&self) -> bool {
        self.first_line
            .as_deref()
            .is_some_and(|line| line.starts_with("#!"))
    }
}

fn extension_of(name: &str) -> String {
    Path::new(name)
        .extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(unix)]
fn read_mode(path: &Path) -> u32 {
    use std::os::unix::fs::PermissionsExt as _;

    match fs::metadata(path) {
        Ok(metadata) => metadata.permissions().mode(),
        Err(err) => {
            debug!("Cannot stat {}: {err}", path.display());
            0
        }
    }
}

#[cfg(not(unix))]
fn read_mode(path: &Path) -> u32 {
    if let Err(err) = fs::metadata(path) {
        debug!("Cannot stat {}: {err}", path.display());
    }
    0
}

fn read_first_line(path: &Path) -> Option<String> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            debug!("Cannot open {}: {err}", path.display());
            return None;
        }
    };

    let mut reader = BufReader::new(file.take(FIRST_LINE_LIMIT));
    let mut buf = Vec::new();
    match reader.read_until(b'\n', &mut buf) {
        Ok(_) => Some(String::from_utf8_lossy(&buf).into_owned()),
        Err(err) => {
            debug!("Cannot read {}: {err}", path.display());
            None
        }
    }
}
