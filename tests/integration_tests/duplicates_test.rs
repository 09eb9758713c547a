// tests/integration_tests/duplicates_test.rs
use super::common::{create_test_file, setup_test_directory};
use anyhow::Result;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tidyroot::{DocumentPair, DuplicateDetector, OverlapCategory, detect_duplicates};

fn relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

fn names(pair: &DocumentPair, root: &Path) -> (String, String) {
    (relative(&pair.doc1, root), relative(&pair.doc2, root))
}

#[test]
fn test_pairs_sorted_by_heading_overlap() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let root = temp_dir.path();
    let results = detect_duplicates(root, 0.3);

    let found: Vec<(String, String)> = results.iter().map(|pair| names(pair, root)).collect();
    assert_eq!(
        found,
        vec![
            (String::from("NOTES.md"), String::from("README.md")),
            (String::from("NOTES.md"), String::from("docs/setup.md")),
            (String::from("README.md"), String::from("docs/setup.md")),
        ],
        "node_modules is never scanned; ties keep discovery order"
    );
    assert!((results[0].heading_similarity - 0.5).abs() < f64::EPSILON);
    assert!((results[1].heading_similarity - 0.4).abs() < f64::EPSILON);
    assert!(results.iter().all(|pair| pair.category == OverlapCategory::Overlap));
    Ok(())
}

#[test]
fn test_zero_threshold_reports_every_pair() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let results = detect_duplicates(temp_dir.path(), 0.0);

    // four documents, six unordered pairs
    assert_eq!(results.len(), 6);
    let distinct = results
        .iter()
        .filter(|pair| pair.category == OverlapCategory::Distinct)
        .count();
    assert_eq!(distinct, 3);
    Ok(())
}

#[test]
fn test_out_of_range_threshold_is_empty() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let doc = "# Same\n## Heading\n";
    create_test_file(temp_dir.path(), "a.md", doc)?;
    create_test_file(temp_dir.path(), "b.md", doc)?;

    assert!(detect_duplicates(temp_dir.path(), 1.1).is_empty());
    assert_eq!(detect_duplicates(temp_dir.path(), 1.0).len(), 1);
    Ok(())
}

#[test]
fn test_identical_documents_are_duplicates() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let doc = "# Guide\n## Install\nRun the installer.\n## Usage\nCall it.\n";
    create_test_file(temp_dir.path(), "guide.md", doc)?;
    create_test_file(temp_dir.path(), "docs/guide-copy.md", doc)?;

    let results = detect_duplicates(temp_dir.path(), 0.3);
    assert_eq!(results.len(), 1);
    let pair = &results[0];
    assert_eq!(pair.category, OverlapCategory::Duplicate);
    assert!((pair.heading_similarity - 1.0).abs() < f64::EPSILON);
    assert!((pair.content_similarity - 1.0).abs() < f64::EPSILON);
    assert_eq!(pair.headings.shared, 3);
    assert_eq!(pair.lines.doc1, pair.lines.doc2);
    Ok(())
}

#[test]
fn test_code_blocks_do_not_affect_content_similarity() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(
        temp_dir.path(),
        "a.md",
        "# Build\nSteps.\n```sh\nmake all\n```\n",
    )?;
    create_test_file(
        temp_dir.path(),
        "b.md",
        "# Build\nSteps.\n```python\nprint('entirely different')\n```\n",
    )?;

    let results = detect_duplicates(temp_dir.path(), 0.0);
    assert_eq!(results.len(), 1);
    assert!((results[0].content_similarity - 1.0).abs() < f64::EPSILON);
    Ok(())
}

#[test]
fn test_shared_prose_without_shared_headings_is_distinct() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let prose = "The same paragraph of text appears in both files.\n";
    create_test_file(temp_dir.path(), "a.md", &format!("# Alpha\n{prose}"))?;
    create_test_file(temp_dir.path(), "b.md", &format!("# Beta\n{prose}"))?;

    let results = detect_duplicates(temp_dir.path(), 0.0);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].category, OverlapCategory::Distinct);
    assert!(results[0].heading_similarity.abs() < f64::EPSILON);
    assert!(results[0].content_similarity > 0.8);
    Ok(())
}

#[test]
fn test_unreadable_document_is_skipped() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let doc = "# Setup\n## Install\n";
    create_test_file(temp_dir.path(), "a.md", doc)?;
    create_test_file(temp_dir.path(), "b.md", doc)?;
    fs::write(temp_dir.path().join("broken.md"), [0xff, 0xfe, b'#', b' ', 0xc3])?;

    let results = detect_duplicates(temp_dir.path(), 0.0);
    assert_eq!(results.len(), 1, "Only the readable pair survives");
    let (doc1, doc2) = names(&results[0], temp_dir.path());
    assert_eq!((doc1.as_str(), doc2.as_str()), ("a.md", "b.md"));
    Ok(())
}

#[test]
fn test_configured_detector() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let doc = "# Setup\n## Install\n";
    create_test_file(temp_dir.path(), "a.md", doc)?;
    create_test_file(temp_dir.path(), "b.markdown", doc)?;
    create_test_file(temp_dir.path(), "drafts/c.md", doc)?;
    create_test_file(temp_dir.path(), "vendor/d.md", doc)?;
    create_test_file(temp_dir.path(), "api.generated.md", doc)?;

    let settings: tidyroot::Settings = toml::from_str(
        r#"
        [duplicates]
        extensions = ["md", "markdown"]
        exclude_dirs = ["vendor"]
        ignore = ["drafts/**", "*.generated.md"]
        "#,
    )?;
    let detector = DuplicateDetector::new(&settings.duplicates)?;

    let documents: Vec<String> = detector
        .find_documents(temp_dir.path())
        .iter()
        .filter_map(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .collect();
    assert_eq!(documents, vec!["a.md", "b.markdown"]);
    assert_eq!(detector.detect(temp_dir.path(), 0.3).len(), 1);
    Ok(())
}

#[test]
fn test_invalid_ignore_glob_is_rejected() -> Result<()> {
    let settings: tidyroot::Settings = toml::from_str("[duplicates]\nignore = [\"docs/[\"]\n")?;
    let err = DuplicateDetector::new(&settings.duplicates).err();
    assert!(matches!(err, Some(tidyroot::TidyError::InvalidPattern { .. })));
    Ok(())
}

#[test]
fn test_line_endings_are_normalized() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let doc = "# Guide\n## Install\nRun the installer.\n\n## Usage\nCall it with a path.\n";
    create_test_file(temp_dir.path(), "a.md", doc)?;
    create_test_file(temp_dir.path(), "b.md", &doc.replace('\n', "\r\n"))?;

    let results = detect_duplicates(temp_dir.path(), 0.0);
    assert_eq!(results.len(), 1);
    assert!((results[0].content_similarity - 1.0).abs() < f64::EPSILON);
    assert!((results[0].heading_similarity - 1.0).abs() < f64::EPSILON);
    assert_eq!(results[0].lines.doc1, results[0].lines.doc2);
    Ok(())
}

fn headings_doc(names: &[String]) -> String {
    names.iter().map(|name| format!("## {name}\n")).collect()
}

#[test]
fn test_threshold_compares_unrounded_score() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let shared: Vec<String> = (0..8).map(|n| format!("shared {n}")).collect();
    let first: Vec<String> = (0..10).map(|n| format!("first {n}")).collect();
    let second: Vec<String> = (0..9).map(|n| format!("second {n}")).collect();
    create_test_file(
        temp_dir.path(),
        "a.md",
        &headings_doc(&[shared.clone(), first].concat()),
    )?;
    create_test_file(temp_dir.path(), "b.md", &headings_doc(&[shared, second].concat()))?;

    // 8 shared of 27 distinct headings: 0.296, shown as 0.3
    assert!(detect_duplicates(temp_dir.path(), 0.3).is_empty());

    let results = detect_duplicates(temp_dir.path(), 0.29);
    assert_eq!(results.len(), 1);
    assert!((results[0].heading_similarity - 8.0 / 27.0).abs() < f64::EPSILON);
    assert_eq!(serde_json::to_value(&results[0])?["heading_similarity"], 0.3);
    Ok(())
}

#[test]
fn test_configured_extensions_keep_markdown() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let doc = "# Setup\n## Install\n";
    create_test_file(temp_dir.path(), "a.md", doc)?;
    create_test_file(temp_dir.path(), "b.markdown", doc)?;

    let settings: tidyroot::Settings =
        toml::from_str("[duplicates]\nextensions = [\"markdown\"]\n")?;
    let detector = DuplicateDetector::new(&settings.duplicates)?;

    assert_eq!(detector.find_documents(temp_dir.path()).len(), 2);
    Ok(())
}
