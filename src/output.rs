// src/output.rs
use crate::core::classifier::Language;
use crate::models::{Classification, ClassificationSummary, DocumentPair, OverlapCategory};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize)]
pub struct ClassifyReport {
    pub project_root: PathBuf,
    pub language: Option<Language>,
    pub files: Vec<Classification>,
    pub summary: ClassificationSummary,
}

impl ClassifyReport {
    #[must_use]
    pub fn new(project_root: PathBuf, language: Option<Language>, files: Vec<Classification>) -> Self {
        let summary = ClassificationSummary::from_results(&files);
        Self {
            project_root,
            language,
            files,
            summary,
        }
    }

    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let language = self
            .language
            .map_or_else(|| String::from("Unknown"), |language| language.to_string());

        let _ = writeln!(out, "Project: {}", self.project_root.display());
        let _ = writeln!(out, "Language: {language}");
        let _ = writeln!(out, "\nClassified {} files:\n", self.files.len());

        for file in &self.files {
            let _ = writeln!(out, "{} {}", file.category.icon(), file.path);
            let _ = writeln!(out, "   Action: {}", file.action.description());
            let _ = writeln!(out, "   Reason: {}\n", file.reason);
        }
        out
    }
}

#[derive(Debug, Serialize)]
pub struct DuplicateReport {
    pub project_root: PathBuf,
    pub min_similarity: f64,
    pub duplicates_found: usize,
    pub results: Vec<DocumentPair>,
}

impl DuplicateReport {
    #[must_use]
    pub fn new(project_root: PathBuf, min_similarity: f64, results: Vec<DocumentPair>) -> Self {
        Self {
            project_root,
            min_similarity,
            duplicates_found: results.len(),
            results,
        }
    }

    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        if self.results.is_empty() {
            let _ = writeln!(
                out,
                "✅ No overlapping documentation found (minimum similarity: {:?})",
                self.min_similarity
            );
            return out;
        }

        let _ = writeln!(
            out,
            "Found {} potentially overlapping document pairs:\n",
            self.results.len()
        );
        for (index, pair) in self.results.iter().enumerate() {
            write_pair(&mut out, index + 1, pair);
        }

        let _ = writeln!(out, "\nRecommendations:");
        for pair in &self.results {
            let verb = match pair.category {
                OverlapCategory::Duplicate => "Consider merging",
                OverlapCategory::Overlap => "Review for consolidation",
                OverlapCategory::Distinct => continue,
            };
            let _ = writeln!(
                out,
                "  • {verb}: {} + {}",
                file_name(&pair.doc1),
                file_name(&pair.doc2)
            );
        }
        out
    }
}

fn write_pair(out: &mut String, number: usize, pair: &DocumentPair) {
    let _ = writeln!(out, "[{number}] {}: {}", pair.category, pair.description);
    let _ = writeln!(
        out,
        "    Doc 1: {} ({} lines)",
        pair.doc1.display(),
        pair.lines.doc1
    );
    let _ = writeln!(
        out,
        "    Doc 2: {} ({} lines)",
        pair.doc2.display(),
        pair.lines.doc2
    );
    let _ = writeln!(
        out,
        "    Heading similarity: {}",
        percent(pair.heading_similarity)
    );
    let _ = writeln!(
        out,
        "    Content similarity: {}",
        percent(pair.content_similarity)
    );
    let _ = writeln!(out, "    Shared headings: {}", pair.headings.shared);
    if !pair.shared_headings.is_empty() {
        let examples: Vec<&str> = pair
            .shared_headings
            .iter()
            .take(3)
            .map(String::as_str)
            .collect();
        let _ = writeln!(out, "    Examples: {}", examples.join(", "));
    }
    let _ = writeln!(out, "    Unique to Doc 1: {}", pair.headings.unique_to_doc1);
    let _ = writeln!(out, "    Unique to Doc 2: {}", pair.headings.unique_to_doc2);
    let _ = writeln!(out);
}

fn percent(score: f64) -> String {
    format!("{:.0}%", score * 100.0)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}
