use crate::error::Result;
use crate::utils::io;
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::rule::{CompiledRuleSet, RuleSet};

/// In-memory content of the file being rewritten.
#[derive(Debug)]
pub struct Document {
    path: PathBuf,
    content: String,
}

impl Document {
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Document {
            path: path.to_path_buf(),
            content: io::read_text(path)?,
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Run every rule over the content, in order.
    pub fn apply(&mut self, rules: &CompiledRuleSet) {
        self.content = apply(rules, &self.content);
    }

    /// Overwrite the source file with the current content.
    pub fn save(self) -> Result<()> {
        io::write_text(&self.path, &self.content)
    }
}

/// Outcome of a single rewrite.
#[derive(Debug, Clone, Serialize)]
pub struct RewriteReport {
    pub path: String,
    pub changed: bool,
    pub bytes_before: usize,
    pub bytes_after: usize,
}

/// Apply `rules` to `text`. Each rule sees the output of the previous one.
pub fn apply(rules: &CompiledRuleSet, text: &str) -> String {
    let mut document = text.to_string();
    for rule in rules.iter() {
        document = rule.replace_all(&document).into_owned();
    }
    document
}

/// Read `path`, apply `rules`, and overwrite `path` with the result.
///
/// Patterns are compiled before the file is touched. The file is written even
/// when no rule matched.
pub fn rewrite(path: &Path, rules: &RuleSet) -> Result<RewriteReport> {
    let compiled = rules.compile()?;

    let mut document = Document::load(path)?;
    let before = document.content().to_string();
    document.apply(&compiled);

    let report = RewriteReport {
        path: path.display().to_string(),
        changed: document.content() != before,
        bytes_before: before.len(),
        bytes_after: document.content().len(),
    };

    document.save()?;

    Ok(report)
}
