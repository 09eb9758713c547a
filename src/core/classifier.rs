// src/core/classifier.rs
pub mod entry;
pub mod language;
pub mod patterns;
pub mod rules;

use crate::models::{Category, Classification};
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, trace};

pub use entry::FileEntry;
pub use language::{Language, detect_project_language};
pub use patterns::PatternTables;

/// Assigns every file in a project root to exactly one [`Category`].
#[derive(Debug, Clone, Default)]
pub struct FileClassifier {
    tables: PatternTables,
}

impl FileClassifier {
    #[must_use]
    pub const fn new(tables: PatternTables) -> Self {
        Self { tables }
    }

    #[must_use]
    pub fn classify(&self, entry: &FileEntry) -> Classification {
        let (rule, verdict) = rules::evaluate(&self.tables, entry);
        trace!(
            "{} -> {} ({})",
            entry.name,
            verdict.category,
            rule.unwrap_or("fallback")
        );
        Classification {
            path: entry.path.clone(),
            category: verdict.category,
            action: verdict.action,
            reason: verdict.reason,
        }
    }

    /// Classifies the direct children of `root`. Hidden entries and
    /// directories are skipped; results are ordered by file name.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * `root` cannot be listed
    /// * An entry cannot be read while iterating the directory
    pub fn scan_project_root(&self, root: &Path) -> Result<Vec<Classification>> {
        let mut paths = Vec::new();
        for item in fs::read_dir(root)
            .with_context(|| format!("Failed to read directory: {}", root.display()))?
        {
            let item = item
                .with_context(|| format!("Failed to read entry in: {}", root.display()))?;
            let path = item.path();

            if item.file_name().to_string_lossy().starts_with('.') {
                continue;
            }
            if path.is_dir() {
                continue;
            }
            paths.push(path);
        }
        paths.sort();

        debug!("Classifying {} files in {}", paths.len(), root.display());
        Ok(paths
            .iter()
            .map(|path| self.classify(&FileEntry::from_path(root, path)))
            .collect())
    }
}

/// Keeps only the results in `category`, or everything when `None`.
#[must_use]
pub fn filter_by_category(
    results: Vec<Classification>,
    category: Option<Category>,
) -> Vec<Classification> {
    match category {
        Some(wanted) => results
            .into_iter()
            .filter(|result| result.category == wanted)
            .collect(),
        None => results,
    }
}
