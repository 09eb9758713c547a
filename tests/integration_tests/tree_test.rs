// tests/integration_tests/tree_test.rs
use super::common::create_test_file;
use anyhow::Result;
use tempfile::TempDir;
use tidyroot::{TreeGenerator, add_descriptions, readme_section};

fn setup_project() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path().join("webapp");
    create_test_file(&root, "package.json", "{}")?;
    create_test_file(&root, "README.md", "# Web app\n")?;
    create_test_file(&root, ".env", "TOKEN=1\n")?;
    create_test_file(&root, "src/index.js", "")?;
    create_test_file(&root, "src/components/button.js", "")?;
    create_test_file(&root, "src/components/icons/star.svg", "")?;
    create_test_file(&root, "tests/app.test.js", "")?;
    create_test_file(&root, "node_modules/left-pad/index.js", "")?;
    create_test_file(&root, "coverage/lcov.info", "")?;
    create_test_file(&root, ".git/HEAD", "ref: refs/heads/main\n")?;
    Ok(temp_dir)
}

#[test]
fn test_tree_stops_at_depth_three() -> Result<()> {
    let temp_dir = setup_project()?;
    let tree = TreeGenerator::default().render(&temp_dir.path().join("webapp"), 3);

    let expected = "\
webapp/
├─ src/
│  ├─ components/
│  │  ├─ icons/
│  │  └─ button.js
│  └─ index.js
├─ tests/
│  └─ app.test.js
├─ README.md
└─ package.json";
    assert_eq!(tree, expected);
    Ok(())
}

#[test]
fn test_depth_limit() -> Result<()> {
    let temp_dir = setup_project()?;
    let tree = TreeGenerator::default().render(&temp_dir.path().join("webapp"), 1);

    assert_eq!(
        tree,
        "webapp/\n├─ src/\n├─ tests/\n├─ README.md\n└─ package.json"
    );
    Ok(())
}

#[test]
fn test_configured_exclusions() -> Result<()> {
    let temp_dir = setup_project()?;
    let settings: tidyroot::Settings = toml::from_str("[tree]\nexclude_dirs = [\"tests\"]\n")?;
    let tree = TreeGenerator::new(&settings.tree).render(&temp_dir.path().join("webapp"), 1);

    assert!(!tree.contains("tests/"));
    assert!(tree.contains("├─ src/"));
    Ok(())
}

#[test]
fn test_described_section() -> Result<()> {
    let temp_dir = setup_project()?;
    let tree = TreeGenerator::default().render(&temp_dir.path().join("webapp"), 1);
    let section = readme_section(&add_descriptions(&tree));

    let lines: Vec<&str> = section.lines().collect();
    assert_eq!(lines[0], "## Project Structure");
    assert_eq!(lines[2], "```");
    assert_eq!(lines[3], "webapp/");
    assert!(lines[4].starts_with("├─ src/ ") && lines[4].ends_with("# Source code"));
    assert!(lines[5].ends_with("# Test suite"));
    assert!(lines[6].ends_with("# Project overview and quick start"));
    assert!(lines[7].ends_with("# Node.js dependencies and scripts"));
    assert_eq!(lines.last().copied(), Some("```"));
    Ok(())
}
