// src/cli.rs
use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

use crate::config::load_settings;
use crate::core::classifier::{
    FileClassifier, PatternTables, detect_project_language, filter_by_category,
};
use crate::core::duplicates::{DEFAULT_MIN_SIMILARITY, DuplicateDetector};
use crate::core::tree::{TreeGenerator, add_descriptions, readme_section};
use crate::models::Category;
use crate::output::{ClassifyReport, DuplicateReport};
use crate::utils::resolve_root;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify files in the project root and suggest where they belong
    Classify(ClassifyArgs),

    /// Detect duplicate or overlapping documentation
    Duplicates(DuplicateArgs),

    /// Generate a file tree for README.md
    Tree(TreeArgs),
}

#[derive(clap::Args, Debug)]
pub struct ClassifyArgs {
    /// Project root path
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Only show files in this category
    #[arg(long, value_enum)]
    pub filter: Option<Category>,
}

#[derive(clap::Args, Debug)]
pub struct DuplicateArgs {
    /// Project root path
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Minimum heading similarity to report (0.0-1.0)
    #[arg(long, default_value_t = DEFAULT_MIN_SIMILARITY)]
    pub min_similarity: f64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct TreeArgs {
    /// Project root path
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Maximum depth (defaults to `tree.depth` from .tidyroot.toml, or 3)
    #[arg(long)]
    pub depth: Option<usize>,

    /// Omit descriptions
    #[arg(long)]
    pub no_descriptions: bool,

    /// Output a complete README section
    #[arg(long)]
    pub section: bool,
}

/// Runs the parsed command, writing results to stdout.
///
/// # Errors
///
/// This function may return an error if:
/// * The project root is not an existing directory
/// * The `.tidyroot.toml` config cannot be read or parsed
/// * The project root cannot be listed
/// * Writing to stdout fails
pub fn run(args: Args) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&args.command, &mut out)
}

/// Runs `command`, writing its report to `out`.
///
/// # Errors
///
/// See [`run`].
pub fn execute<W: Write>(command: &Command, out: &mut W) -> Result<()> {
    match command {
        Command::Classify(args) => classify(args, out),
        Command::Duplicates(args) => duplicates(args, out),
        Command::Tree(args) => tree(args, out),
    }
}

fn classify<W: Write>(args: &ClassifyArgs, out: &mut W) -> Result<()> {
    let root = resolve_root(&args.path)?;
    let settings = load_settings(&root)?;

    let language = detect_project_language(&root);
    let classifier = FileClassifier::new(PatternTables::with_settings(&settings.classify));
    let results = classifier
        .scan_project_root(&root)
        .with_context(|| format!("Failed to classify files in: {}", root.display()))?;
    let results = filter_by_category(results, args.filter);
    info!("Classified {} files in {}", results.len(), root.display());

    let report = ClassifyReport::new(root, language, results);
    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        write!(out, "{}", report.to_text())?;
    }
    Ok(())
}

fn duplicates<W: Write>(args: &DuplicateArgs, out: &mut W) -> Result<()> {
    let root = resolve_root(&args.path)?;
    let settings = load_settings(&root)?;

    let detector = DuplicateDetector::new(&settings.duplicates)?;
    let results = detector.detect(&root, args.min_similarity);
    info!("Found {} overlapping pairs in {}", results.len(), root.display());

    let report = DuplicateReport::new(root, args.min_similarity, results);
    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        write!(out, "{}", report.to_text())?;
    }
    Ok(())
}

fn tree<W: Write>(args: &TreeArgs, out: &mut W) -> Result<()> {
    let root = resolve_root(&args.path)?;
    let settings = load_settings(&root)?;

    let depth = args.depth.unwrap_or(settings.tree.depth);
    let mut rendered = TreeGenerator::new(&settings.tree).render(&root, depth);
    if args.section || !args.no_descriptions {
        rendered = add_descriptions(&rendered);
    }
    if args.section {
        rendered = readme_section(&rendered);
    }

    writeln!(out, "{}", rendered.trim_end())?;
    Ok(())
}
