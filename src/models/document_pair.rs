// src/models/document_pair.rs
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OverlapCategory {
    Duplicate,
    Overlap,
    Distinct,
}

impl OverlapCategory {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score > 0.7 {
            Self::Duplicate
        } else if score > 0.3 {
            Self::Overlap
        } else {
            Self::Distinct
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Duplicate => "DUPLICATE",
            Self::Overlap => "OVERLAP",
            Self::Distinct => "DISTINCT",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Duplicate => "Very high overlap, likely duplicates",
            Self::Overlap => "Moderate overlap, consider consolidation",
            Self::Distinct => "Minimal overlap, keep separate",
        }
    }
}

impl fmt::Display for OverlapCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineCounts {
    pub doc1: usize,
    pub doc2: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeadingCounts {
    pub unique_to_doc1: usize,
    pub unique_to_doc2: usize,
    pub shared: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentPair {
    pub doc1: PathBuf,
    pub doc2: PathBuf,
    #[serde(serialize_with = "round_two_places")]
    pub heading_similarity: f64,
    #[serde(serialize_with = "round_two_places")]
    pub content_similarity: f64,
    pub category: OverlapCategory,
    pub description: &'static str,
    pub lines: LineCounts,
    pub headings: HeadingCounts,
    pub unique_headings_doc1: Vec<String>,
    pub unique_headings_doc2: Vec<String>,
    pub shared_headings: Vec<String>,
}

/// Rounds to two decimals, ties to even on the exact binary value, so 0.125
/// serializes as 0.12 and 0.375 as 0.38.
fn round_two_places<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    let rounded = format!("{value:.2}")
        .parse::<f64>()
        .map_err(serde::ser::Error::custom)?;
    serializer.serialize_f64(rounded)
}
