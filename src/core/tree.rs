// src/core/tree.rs
//! Annotated directory trees for README "Project Structure" sections.

use crate::config::TreeSettings;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const EXCLUDE_DIRS: &[&str] = &[
    "node_modules",
    "dist",
    "build",
    "target",
    "out",
    "__pycache__",
    ".pytest_cache",
    ".mypy_cache",
    ".git",
    ".venv",
    "venv",
    "env",
    ".tox",
    ".nox",
    "htmlcov",
    "coverage",
];

const FILE_DESCRIPTIONS: &[(&str, &str)] = &[
    ("README.md", "Project overview and quick start"),
    (".gitignore", "Git ignore patterns"),
    ("package.json", "Node.js dependencies and scripts"),
    ("package-lock.json", "npm dependency lock file"),
    ("yarn.lock", "Yarn dependency lock file"),
    ("pyproject.toml", "Python package configuration"),
    ("setup.py", "Python package setup"),
    ("requirements.txt", "Python dependencies"),
    ("Cargo.toml", "Rust package manifest"),
    ("Cargo.lock", "Rust dependency lock file"),
    ("go.mod", "Go module definition"),
    ("go.sum", "Go dependency checksums"),
    ("tsconfig.json", "TypeScript configuration"),
    (".eslintrc", "ESLint configuration"),
    (".prettierrc", "Prettier configuration"),
    ("Dockerfile", "Docker image definition"),
    ("docker-compose.yml", "Docker Compose configuration"),
    ("LICENSE", "Project license"),
    ("LICENSE.md", "Project license"),
    ("CHANGELOG.md", "Version history"),
    ("Makefile", "Build automation"),
];

const DIR_DESCRIPTIONS: &[(&str, &str)] = &[
    ("src", "Source code"),
    ("lib", "Library code"),
    ("tests", "Test suite"),
    ("test", "Test suite"),
    ("__tests__", "Test suite"),
    ("docs", "Documentation"),
    ("scripts", "Build and deployment scripts"),
    ("examples", "Usage examples"),
    ("tmp", "Temporary files (gitignored)"),
    ("dist", "Build output (gitignored)"),
    ("build", "Build output (gitignored)"),
    ("public", "Static assets"),
    ("assets", "Static assets"),
    ("components", "Components"),
    ("utils", "Utility functions"),
    ("helpers", "Helper functions"),
    ("models", "Data models"),
    ("views", "View templates"),
    ("controllers", "Controllers"),
    ("routes", "Application routes"),
    ("api", "API definitions"),
    ("config", "Configuration files"),
];

/// Column at which descriptions start.
const DESCRIPTION_COLUMN: usize = 30;

const BRANCH: &str = "├─";
const LAST_BRANCH: &str = "└─";
const PIPE_INDENT: &str = "│  ";
const BLANK_INDENT: &str = "   ";

#[derive(Debug, Clone)]
pub struct TreeGenerator {
    exclude: HashSet<String>,
}

impl Default for TreeGenerator {
    fn default() -> Self {
        Self {
            exclude: EXCLUDE_DIRS.iter().map(|dir| (*dir).to_owned()).collect(),
        }
    }
}

impl TreeGenerator {
    #[must_use]
    pub fn new(settings: &TreeSettings) -> Self {
        let mut generator = Self::default();
        generator
            .exclude
            .extend(settings.exclude_dirs.iter().cloned());
        generator
    }

    fn should_exclude(&self, name: &str) -> bool {
        name.starts_with('.') || self.exclude.contains(name)
    }

    /// Renders `root` and up to `max_depth` levels below it.
    #[must_use]
    pub fn render(&self, root: &Path, max_depth: usize) -> String {
        let root_name = root.file_name().map_or_else(
            || root.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        );

        let mut lines = vec![format!("{root_name}/")];
        self.walk(root, "", 0, max_depth, &mut lines);
        lines.join("\n")
    }

    fn walk(
        &self,
        dir: &Path,
        prefix: &str,
        depth: usize,
        max_depth: usize,
        lines: &mut Vec<String>,
    ) {
        if depth >= max_depth {
            return;
        }

        let children = match self.sorted_children(dir) {
            Ok(children) => children,
            Err(err) => {
                debug!("Cannot list {}: {err}", dir.display());
                return;
            }
        };

        let count = children.len();
        for (index, (path, name, is_dir)) in children.into_iter().enumerate() {
            let is_last = index + 1 == count;
            let connector = if is_last { LAST_BRANCH } else { BRANCH };

            if is_dir {
                lines.push(format!("{prefix}{connector} {name}/"));
                let indent = if is_last { BLANK_INDENT } else { PIPE_INDENT };
                self.walk(&path, &format!("{prefix}{indent}"), depth + 1, max_depth, lines);
            } else {
                lines.push(format!("{prefix}{connector} {name}"));
            }
        }
    }

    /// Visible children, directories first, then by name.
    fn sorted_children(&self, dir: &Path) -> std::io::Result<Vec<(PathBuf, String, bool)>> {
        let mut children = Vec::new();
        for item in fs::read_dir(dir)? {
            let item = item?;
            let name = item.file_name().to_string_lossy().into_owned();
            if self.should_exclude(&name) {
                continue;
            }
            let path = item.path();
            let is_dir = path.is_dir();
            children.push((path, name, is_dir));
        }
        children.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| a.1.cmp(&b.1)));
        Ok(children)
    }
}

fn lookup(table: &[(&str, &'static str)], name: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, description)| *description)
}

/// Appends `# description` to lines naming a well-known file or directory.
#[must_use]
pub fn add_descriptions(tree: &str) -> String {
    tree.split('\n')
        .map(|line| {
            let Some(entry) = line.split("─ ").nth(1) else {
                return line.to_owned();
            };
            let description = match entry.strip_suffix('/') {
                Some(dir_name) => lookup(DIR_DESCRIPTIONS, dir_name),
                None => lookup(FILE_DESCRIPTIONS, entry),
            };
            match description {
                Some(description) => {
                    let padding = DESCRIPTION_COLUMN.saturating_sub(line.chars().count());
                    format!("{line}{}# {description}", " ".repeat(padding))
                }
                None => line.to_owned(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wraps a rendered tree in a README section.
#[must_use]
pub fn readme_section(tree: &str) -> String {
    format!("## Project Structure\n\n```\n{tree}\n```\n")
}
