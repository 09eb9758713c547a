// tests/integration_tests/config_test.rs
use super::common::{create_config_file, create_test_file};
use anyhow::Result;
use tempfile::TempDir;
use tidyroot::{Category, FileClassifier, PatternTables, TidyError, load_settings};

#[test]
fn test_config_in_parent_directory() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_config_file(
        temp_dir.path(),
        "[classify]\nconfig_files = [\"deno.json\"]\n\n[tree]\ndepth = 5\n",
    )?;
    let project = temp_dir.path().join("workspace/app");
    create_test_file(&project, "deno.json", "{}")?;

    let settings = load_settings(&project)?;
    assert_eq!(settings.tree.depth, 5);
    assert_eq!(settings.classify.config_files, vec!["deno.json"]);

    let classifier = FileClassifier::new(PatternTables::with_settings(&settings.classify));
    let results = classifier.scan_project_root(&project)?;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].category, Category::Config);
    Ok(())
}

#[test]
fn test_nearest_config_wins() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_config_file(temp_dir.path(), "[tree]\ndepth = 5\n")?;
    let project = temp_dir.path().join("app");
    create_config_file(&project, "[tree]\ndepth = 2\n")?;

    let settings = load_settings(&project)?;
    assert_eq!(settings.tree.depth, 2);
    Ok(())
}

#[test]
fn test_malformed_config_is_an_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_config_file(temp_dir.path(), "[tree]\ndepth = \"deep\"\n")?;

    let err = load_settings(temp_dir.path()).err();
    assert!(matches!(err, Some(TidyError::ConfigParse { .. })));
    Ok(())
}

#[test]
fn test_unknown_keys_are_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_config_file(temp_dir.path(), "[tree]\nwidth = 80\n")?;

    assert!(load_settings(temp_dir.path()).is_err());
    Ok(())
}

#[test]
fn test_root_docs_extension() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_config_file(temp_dir.path(), "[classify]\nroot_docs = [\"AUTHORS.md\"]\n")?;
    create_test_file(temp_dir.path(), "AUTHORS.md", "# Authors\n")?;

    let settings = load_settings(temp_dir.path())?;
    let classifier = FileClassifier::new(PatternTables::with_settings(&settings.classify));
    let results = classifier.scan_project_root(temp_dir.path())?;

    assert_eq!(results.len(), 1, "The hidden config file is not classified");
    assert_eq!(results[0].action, tidyroot::Action::KeepRoot);
    Ok(())
}
