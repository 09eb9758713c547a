// src/core/ignore.rs
use crate::error::TidyError;
use glob::{MatchOptions, Pattern};
use std::path::Path;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// Glob patterns from the `ignore` config list.
#[derive(Debug, Default)]
pub struct IgnoreSet {
    /// (pattern, matches bare file names too)
    patterns: Vec<(Pattern, bool)>,
}

impl IgnoreSet {
    /// Compiles every pattern, skipping blank lines and `#` comments.
    ///
    /// A pattern without `/` is also tried against the bare file name, so
    /// `*.generated.md` catches the file at any depth. A leading `/` anchors
    /// the pattern to the root.
    ///
    /// # Errors
    ///
    /// Returns [`TidyError::InvalidPattern`] for invalid glob syntax.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, TidyError> {
        let mut compiled = Vec::with_capacity(patterns.len());
        for raw in patterns {
            let raw = raw.as_ref().trim();
            if raw.is_empty() || raw.starts_with('#') {
                continue;
            }
            let (raw, anchored) = raw
                .strip_prefix('/')
                .map_or((raw, false), |stripped| (stripped, true));
            let pattern = Pattern::new(raw).map_err(|source| TidyError::InvalidPattern {
                pattern: raw.to_owned(),
                source,
            })?;
            compiled.push((pattern, !anchored && !raw.contains('/')));
        }
        Ok(Self { patterns: compiled })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// `relative` is the path relative to the scanned root.
    #[must_use]
    pub fn matches(&self, relative: &Path) -> bool {
        let path_str = relative.to_string_lossy().replace('\\', "/");
        let file_name = relative
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        self.patterns.iter().any(|(pattern, bare)| {
            pattern.matches_with(&path_str, MATCH_OPTIONS)
                || (*bare && pattern.matches_with(&file_name, MATCH_OPTIONS))
        })
    }
}
