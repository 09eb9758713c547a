// src/core/classifier/rules.rs
use super::entry::FileEntry;
use super::patterns::{
    PatternTables, SHELL_EXTENSIONS, is_temporary_name, is_temporary_script_name, is_test_name,
};
use crate::models::{Action, Category};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub category: Category,
    pub action: Action,
    pub reason: &'static str,
}

impl Verdict {
    const fn new(category: Category, action: Action, reason: &'static str) -> Self {
        Self {
            category,
            action,
            reason,
        }
    }
}

pub const UNKNOWN: Verdict = Verdict::new(Category::Unknown, Action::Review, "Needs manual review");

/// One entry in the ordered classification table.
pub struct Rule {
    pub name: &'static str,
    pub applies: fn(&PatternTables, &FileEntry) -> bool,
    pub verdict: fn(&FileEntry) -> Verdict,
}

/// Evaluated top to bottom; the first rule whose `applies` holds decides.
pub const RULES: &[Rule] = &[
    Rule {
        name: "config",
        applies: |tables, entry| tables.is_config_file(&entry.name),
        verdict: |_| {
            Verdict::new(
                Category::Config,
                Action::KeepRoot,
                "Standard configuration file",
            )
        },
    },
    Rule {
        name: "root-doc",
        applies: |tables, entry| tables.is_root_doc(&entry.name),
        verdict: |_| Verdict::new(Category::Doc, Action::KeepRoot, "Root documentation file"),
    },
    Rule {
        name: "temp",
        applies: |_, entry| is_temporary_name(&entry.name),
        verdict: |_| Verdict::new(Category::Temp, Action::MoveTmp, "Temporary file"),
    },
    Rule {
        name: "test",
        applies: |_, entry| is_test_name(&entry.name),
        verdict: |_| Verdict::new(Category::Test, Action::MoveTests, "Test file"),
    },
    Rule {
        name: "doc",
        applies: |_, entry| entry.name.ends_with(".md"),
        verdict: |_| Verdict::new(Category::Doc, Action::MoveDocs, "Documentation file"),
    },
    Rule {
        name: "script",
        applies: |_, entry| {
            SHELL_EXTENSIONS.contains(&entry.extension.as_str())
                || entry.is_owner_executable()
                || entry.has_shebang()
        },
        verdict: |entry| {
            if is_temporary_script_name(&entry.name) {
                Verdict::new(Category::Script, Action::MoveTmp, "Temporary script")
            } else {
                Verdict::new(Category::Script, Action::MoveScripts, "Executable script")
            }
        },
    },
];

/// Returns the matching rule's name alongside its verdict; `None` as the
/// name means nothing matched and the entry fell through to review.
#[must_use]
pub fn evaluate(tables: &PatternTables, entry: &FileEntry) -> (Option<&'static str>, Verdict) {
    RULES
        .iter()
        .find(|rule| (rule.applies)(tables, entry))
        .map_or((None, UNKNOWN), |rule| {
            (Some(rule.name), (rule.verdict)(entry))
        })
}
