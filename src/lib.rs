// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod utils;

pub use cli::{Args, Command, execute, run};
pub use config::{CONFIG_FILE_NAME, Settings, load_settings};
pub use crate::core::classifier::{
    FileClassifier, FileEntry, Language, PatternTables, detect_project_language,
    filter_by_category,
};
pub use crate::core::duplicates::{
    DuplicateDetector, analyze_pair, content_similarity, detect_duplicates, extract_headings,
    heading_overlap,
};
pub use crate::core::ignore::IgnoreSet;
pub use crate::core::tree::{TreeGenerator, add_descriptions, readme_section};
pub use error::TidyError;
pub use models::{
    Action, Category, Classification, ClassificationSummary, DocumentPair, OverlapCategory,
};
pub use utils::resolve_root;
