// src/core/classifier/language.rs
use serde::Serialize;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Node,
    Rust,
    Go,
    Ruby,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Python => "python",
            Self::Node => "node",
            Self::Rust => "rust",
            Self::Go => "go",
            Self::Ruby => "ruby",
        })
    }
}

/// Marker files in priority order; the first one present decides.
const MARKERS: &[(&str, Language)] = &[
    ("pyproject.toml", Language::Python),
    ("setup.py", Language::Python),
    ("package.json", Language::Node),
    ("Cargo.toml", Language::Rust),
    ("go.mod", Language::Go),
    ("Gemfile", Language::Ruby),
];

/// Advisory guess at the project's primary language from manifest files.
/// Never influences classification.
#[must_use]
pub fn detect_project_language(root: &Path) -> Option<Language> {
    MARKERS
        .iter()
        .find(|(marker, _)| root.join(marker).exists())
        .map(|(_, language)| *language)
}
