use crate::error::{Error, Result};
use crate::rewrite::RuleSet;
use crate::utils::io;
use std::path::{Path, PathBuf};

/// Project-relative location of the events file.
pub const DEFAULT_TARGET: &str = "src/game/config/events.js";

/// Where the rules for a run come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSource {
    /// [`RuleSet::events`].
    BuiltIn,
    /// A JSON rule file.
    File(PathBuf),
}

impl RuleSource {
    pub fn load(&self) -> Result<RuleSet> {
        match self {
            RuleSource::BuiltIn => Ok(RuleSet::events()),
            RuleSource::File(path) => load_rules(path),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            RuleSource::BuiltIn => "built-in event rules".to_string(),
            RuleSource::File(path) => path.display().to_string(),
        }
    }
}

/// Parse a rule file of the form `{ "rules": [ { label, pattern, replacement } ] }`.
pub fn load_rules(path: &Path) -> Result<RuleSet> {
    let content = io::read_text(path)?;
    parse_rules(&content, &path.display().to_string())
}

pub(crate) fn parse_rules(content: &str, origin: &str) -> Result<RuleSet> {
    serde_json::from_str(content).map_err(|e| Error::config_invalid_json(origin, e))
}

/// Resolve the target path argument, falling back to [`DEFAULT_TARGET`].
pub fn resolve_target(path: Option<&str>) -> Result<PathBuf> {
    match path {
        Some(p) if p.trim().is_empty() => Err(Error::validation_invalid_argument(
            "path",
            "Target path cannot be empty",
        )),
        Some(p) => Ok(PathBuf::from(p)),
        None => Ok(PathBuf::from(DEFAULT_TARGET)),
    }
}
