// src/core/classifier/patterns.rs
use crate::config::ClassifySettings;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

pub const CONFIG_FILES: &[&str] = &[
    "package.json",
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "pyproject.toml",
    "setup.py",
    "setup.cfg",
    "requirements.txt",
    "Pipfile",
    "Pipfile.lock",
    "poetry.lock",
    "Cargo.toml",
    "Cargo.lock",
    "go.mod",
    "go.sum",
    "Gemfile",
    "Gemfile.lock",
    "composer.json",
    "composer.lock",
    "Makefile",
    "justfile",
    "CMakeLists.txt",
    "Dockerfile",
    "docker-compose.yml",
    ".dockerignore",
    ".prettierrc",
    ".eslintrc",
    ".eslintrc.js",
    ".eslintrc.json",
    "tsconfig.json",
    "jsconfig.json",
    ".editorconfig",
    "ruff.toml",
    ".rustfmt.toml",
    ".gitignore",
    ".gitattributes",
    ".gitleaksignore",
    ".env.example",
    ".env.template",
];

pub const ROOT_DOCS: &[&str] = &[
    "README.md",
    "CHANGELOG.md",
    "LICENSE",
    "LICENSE.txt",
    "LICENSE.md",
    "CODE_OF_CONDUCT.md",
    "SECURITY.md",
    "CONTRIBUTING.md",
];

pub const TEMP_SUFFIXES: &[&str] = &[
    ".tmp", ".temp", ".bak", ".backup", ".swp", ".swo", ".log", ".pid",
];

pub const TEMP_PREFIXES: &[&str] = &["temp_", "tmp_", "test_", "debug_"];

// Narrower than TEMP_PREFIXES: `debug_` scripts are kept.
pub const TEMP_SCRIPT_PREFIXES: &[&str] = &["temp_", "tmp_", "test_"];

pub const TEMP_SCRIPT_NAMES: &[&str] = &["test.sh", "temp.sh", "quick.sh", "debug.sh"];

pub const SHELL_EXTENSIONS: &[&str] = &["sh", "bash", "zsh"];

const TEST_NAME_PATTERNS: &[&str] = &[
    r"\.test\.(js|ts|jsx|tsx)$",
    r"\.spec\.(js|ts|jsx|tsx)$",
    r"_test\.(py|go)$",
    r"test_.*\.py$",
    r"_spec\.rb$",
];

static TEST_NAME_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    TEST_NAME_PATTERNS
        .iter()
        .map(|pattern| Regex::new(pattern).expect("valid regex literal"))
        .collect()
});

static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").expect("valid regex literal"));

static COMPACT_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{8}").expect("valid regex literal"));

/// Name tables consulted by the classifier rules. Built-in entries can only
/// be extended, never removed, by configuration.
#[derive(Debug, Clone)]
pub struct PatternTables {
    config_files: HashSet<String>,
    root_docs: HashSet<String>,
}

impl Default for PatternTables {
    fn default() -> Self {
        Self {
            config_files: CONFIG_FILES.iter().map(|name| (*name).to_owned()).collect(),
            root_docs: ROOT_DOCS.iter().map(|name| (*name).to_owned()).collect(),
        }
    }
}

impl PatternTables {
    #[must_use]
    pub fn with_settings(settings: &ClassifySettings) -> Self {
        let mut tables = Self::default();
        tables
            .config_files
            .extend(settings.config_files.iter().cloned());
        tables.root_docs.extend(settings.root_docs.iter().cloned());
        tables
    }

    #[must_use]
    pub fn is_config_file(&self, name: &str) -> bool {
        self.config_files.contains(name)
    }

    #[must_use]
    pub fn is_root_doc(&self, name: &str) -> bool {
        self.root_docs.contains(name) || name.to_uppercase().starts_with("LICENSE")
    }
}

#[must_use]
pub fn has_date_token(name: &str) -> bool {
    ISO_DATE.is_match(name) || COMPACT_DATE.is_match(name)
}

#[must_use]
pub fn is_temporary_name(name: &str) -> bool {
    TEMP_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
        || TEMP_PREFIXES.iter().any(|prefix| name.starts_with(prefix))
        || has_date_token(name)
        || name.ends_with('~')
}

#[must_use]
pub fn is_temporary_script_name(name: &str) -> bool {
    has_date_token(name)
        || TEMP_SCRIPT_PREFIXES
            .iter()
            .any(|prefix| name.starts_with(prefix))
        || TEMP_SCRIPT_NAMES.contains(&name.to_lowercase().as_str())
}

#[must_use]
pub fn is_test_name(name: &str) -> bool {
    TEST_NAME_REGEXES.iter().any(|regex| regex.is_match(name))
}
