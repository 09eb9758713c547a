// src/models/classification.rs
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Config,
    Doc,
    Script,
    Test,
    Temp,
    Unknown,
}

impl Category {
    pub const ALL: [Self; 6] = [
        Self::Config,
        Self::Doc,
        Self::Script,
        Self::Test,
        Self::Temp,
        Self::Unknown,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::Doc => "doc",
            Self::Script => "script",
            Self::Test => "test",
            Self::Temp => "temp",
            Self::Unknown => "unknown",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Config => "⚙️",
            Self::Doc => "📄",
            Self::Script => "📜",
            Self::Test => "🧪",
            Self::Temp => "🗑️",
            Self::Unknown => "❓",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    KeepRoot,
    MoveDocs,
    MoveScripts,
    MoveTmp,
    MoveTests,
    Review,
}

impl Action {
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::KeepRoot => "Keep in root",
            Self::MoveDocs => "Move to docs/",
            Self::MoveScripts => "Move to scripts/",
            Self::MoveTmp => "Move to tmp/",
            Self::MoveTests => "Move to tests/",
            Self::Review => "Needs review",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub path: String,
    pub category: Category,
    pub action: Action,
    pub reason: &'static str,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationSummary {
    pub total: usize,
    pub config: usize,
    pub doc: usize,
    pub script: usize,
    pub test: usize,
    pub temp: usize,
    pub unknown: usize,
}

impl ClassificationSummary {
    #[must_use]
    pub fn from_results(results: &[Classification]) -> Self {
        let mut summary = Self {
            total: results.len(),
            ..Self::default()
        };
        for result in results {
            let slot = match result.category {
                Category::Config => &mut summary.config,
                Category::Doc => &mut summary.doc,
                Category::Script => &mut summary.script,
                Category::Test => &mut summary.test,
                Category::Temp => &mut summary.temp,
                Category::Unknown => &mut summary.unknown,
            };
            *slot = slot.saturating_add(1);
        }
        summary
    }
}
