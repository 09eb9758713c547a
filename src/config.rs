// src/config.rs
use crate::error::TidyError;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = ".tidyroot.toml";

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub classify: ClassifySettings,
    pub duplicates: DuplicateSettings,
    pub tree: TreeSettings,
}

/// Extra names appended to the built-in classifier tables.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifySettings {
    pub config_files: Vec<String>,
    pub root_docs: Vec<String>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DuplicateSettings {
    /// Document extensions added to `md`, without the leading dot.
    pub extensions: Vec<String>,
    pub exclude_dirs: Vec<String>,
    pub ignore: Vec<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct TreeSettings {
    pub depth: usize,
    pub exclude_dirs: Vec<String>,
}

impl Default for TreeSettings {
    fn default() -> Self {
        Self {
            depth: 3,
            exclude_dirs: Vec::new(),
        }
    }
}

impl Settings {
    /// Parses settings from the contents of a `.tidyroot.toml` file.
    ///
    /// # Errors
    ///
    /// Returns [`TidyError::ConfigParse`] if the content is not valid TOML or
    /// contains unknown keys.
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, TidyError> {
        toml::from_str(content).map_err(|source| TidyError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Finds the nearest `.tidyroot.toml`, starting in `dir` and walking up the
/// parent directories. The first file found wins; no merging across levels.
///
/// # Errors
///
/// This function may return an error if:
/// * A config file exists but cannot be read
/// * The config file is not valid TOML for the settings schema
pub fn load_settings(dir: &Path) -> Result<Settings, TidyError> {
    let mut current_dir = dir.to_path_buf();
    let mut visited: HashSet<PathBuf> = HashSet::new();

    while visited.insert(current_dir.clone()) {
        let config_file = current_dir.join(CONFIG_FILE_NAME);

        if config_file.is_file() {
            debug!("Loading settings from {}", config_file.display());
            let content =
                fs::read_to_string(&config_file).map_err(|source| TidyError::ConfigRead {
                    path: config_file.clone(),
                    source,
                })?;
            return Settings::from_toml(&content, &config_file);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => break,
        }
    }

    debug!("No {CONFIG_FILE_NAME} found above {}", dir.display());
    Ok(Settings::default())
}
