// src/models.rs
pub mod classification;
pub mod document_pair;

pub use classification::{Action, Category, Classification, ClassificationSummary};
pub use document_pair::{DocumentPair, HeadingCounts, LineCounts, OverlapCategory};
