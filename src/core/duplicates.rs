// src/core/duplicates.rs
pub mod headings;
pub mod similarity;

use crate::config::DuplicateSettings;
use crate::core::ignore::IgnoreSet;
use crate::error::TidyError;
use crate::models::{DocumentPair, HeadingCounts, LineCounts, OverlapCategory};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

pub use headings::{extract_headings, find_unique_headings, heading_overlap, remove_code_blocks};
pub use similarity::sequence_ratio;

/// Build output, dependency and VCS directories never scanned for documents.
pub const EXCLUDE_DIRS: &[&str] = &[".git", "node_modules", "dist", "build", "target"];

pub const DEFAULT_MIN_SIMILARITY: f64 = 0.3;

const SAMPLE_HEADINGS: usize = 5;

/// Similarity of two documents with fenced code removed from both.
#[must_use]
pub fn content_similarity(first: &str, second: &str) -> f64 {
    sequence_ratio(&remove_code_blocks(first), &remove_code_blocks(second))
}

#[must_use]
pub fn analyze_pair(doc1: &Path, content1: &str, doc2: &Path, content2: &str) -> DocumentPair {
    let headings1 = extract_headings(content1);
    let headings2 = extract_headings(content2);

    let heading_similarity = heading_overlap(&headings1, &headings2);
    let category = OverlapCategory::from_score(heading_similarity);
    let (unique1, unique2, shared) = find_unique_headings(&headings1, &headings2);

    DocumentPair {
        doc1: doc1.to_path_buf(),
        doc2: doc2.to_path_buf(),
        heading_similarity,
        content_similarity: content_similarity(content1, content2),
        category,
        description: category.description(),
        lines: LineCounts {
            doc1: content1.split('\n').count(),
            doc2: content2.split('\n').count(),
        },
        headings: HeadingCounts {
            unique_to_doc1: unique1.len(),
            unique_to_doc2: unique2.len(),
            shared: shared.len(),
        },
        unique_headings_doc1: unique1.into_iter().take(SAMPLE_HEADINGS).collect(),
        unique_headings_doc2: unique2.into_iter().take(SAMPLE_HEADINGS).collect(),
        shared_headings: shared.into_iter().take(SAMPLE_HEADINGS).collect(),
    }
}

/// Pairwise heading-overlap analysis over the documents of a project tree.
#[derive(Debug)]
pub struct DuplicateDetector {
    extensions: Vec<String>,
    exclude_dirs: HashSet<String>,
    ignore: IgnoreSet,
}

impl Default for DuplicateDetector {
    fn default() -> Self {
        Self {
            extensions: vec![String::from("md")],
            exclude_dirs: EXCLUDE_DIRS.iter().map(|dir| (*dir).to_owned()).collect(),
            ignore: IgnoreSet::default(),
        }
    }
}

impl DuplicateDetector {
    /// # Errors
    ///
    /// Returns [`TidyError::InvalidPattern`] if an `ignore` glob is invalid.
    pub fn new(settings: &DuplicateSettings) -> Result<Self, TidyError> {
        let mut detector = Self {
            ignore: IgnoreSet::new(&settings.ignore)?,
            ..Self::default()
        };
        for extension in &settings.extensions {
            let extension = extension.trim_start_matches('.');
            if !detector.extensions.iter().any(|known| known == extension) {
                detector.extensions.push(extension.to_owned());
            }
        }
        detector
            .exclude_dirs
            .extend(settings.exclude_dirs.iter().cloned());
        Ok(detector)
    }

    fn is_excluded_dir(&self, entry: &walkdir::DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.exclude_dirs.contains(name))
    }

    fn has_document_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|wanted| wanted == ext))
    }

    /// Every document under `root`, sorted by path. Directories that cannot
    /// be read are logged and skipped.
    #[must_use]
    pub fn find_documents(&self, root: &Path) -> Vec<PathBuf> {
        let mut documents = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| !self.is_excluded_dir(e))
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("Skipping unreadable entry: {err}");
                    continue;
                }
            };
            if !entry.file_type().is_file() || !self.has_document_extension(entry.path()) {
                continue;
            }
            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            if self.ignore.matches(relative) {
                debug!("Ignoring {}", relative.display());
                continue;
            }
            documents.push(entry.into_path());
        }

        documents.sort();
        documents
    }

    /// Compares every pair of documents (i < j in path order) and keeps those
    /// whose heading similarity is at least `min_similarity`, highest first.
    /// Pairs involving a document that cannot be read as UTF-8 are skipped.
    #[must_use]
    pub fn detect(&self, root: &Path, min_similarity: f64) -> Vec<DocumentPair> {
        let documents = self.find_documents(root);
        debug!("Found {} documents under {}", documents.len(), root.display());

        let contents: Vec<Option<String>> = documents
            .iter()
            .map(|path| match fs::read_to_string(path) {
                Ok(content) => Some(normalize_newlines(content)),
                Err(err) => {
                    debug!("Cannot read {}: {err}", path.display());
                    None
                }
            })
            .collect();

        let mut results = Vec::new();
        for (i, (doc1, content1)) in documents.iter().zip(&contents).enumerate() {
            for (doc2, content2) in documents.iter().zip(&contents).skip(i + 1) {
                let (Some(content1), Some(content2)) = (content1, content2) else {
                    debug!(
                        "Skipping pair {} / {}",
                        doc1.display(),
                        doc2.display()
                    );
                    continue;
                };
                let pair = analyze_pair(doc1, content1, doc2, content2);
                if pair.heading_similarity >= min_similarity {
                    results.push(pair);
                }
            }
        }

        results.sort_by(|a, b| b.heading_similarity.total_cmp(&a.heading_similarity));
        results
    }
}

/// Turns `\r\n` and lone `\r` line endings into `\n`.
#[must_use]
pub fn normalize_newlines(content: String) -> String {
    if content.contains('\r') {
        content.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        content
    }
}

/// Runs the detector with the built-in discovery settings.
#[must_use]
pub fn detect_duplicates(root: &Path, min_similarity: f64) -> Vec<DocumentPair> {
    DuplicateDetector::default().detect(root, min_similarity)
}
