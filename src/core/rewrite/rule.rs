//! Substitution rules and the built-in event-file rule set.

use crate::error::{Error, Result};
use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

// ============================================================================
// Built-in rule data
// ============================================================================

/// Zero-argument `effect` arrow function, any whitespace between tokens.
pub const SIGNATURE_PATTERN: &str = r"effect:\s*\(\)\s*=>";

/// Names destructured into every rewritten `effect` signature, in order.
pub const INJECTED_NAMES: &[&str] = &[
    "Player",
    "gameStore",
    "SoundManager",
    "Achievements",
    "LootManager",
    "Game",
];

/// Namespace qualifier stripped from global references.
pub const GLOBAL_NAMESPACE: &str = "window";

/// Globals rewritten from `window.<Name>` to `<Name>`, in application order.
///
/// `Ascension` is not known to occur in the events file; its rule is a no-op
/// there.
pub const GLOBAL_NAMES: &[&str] = &[
    "Player",
    "gameStore",
    "SoundManager",
    "Achievements",
    "LootManager",
    "Game",
    "Events",
    "Ascension",
];

// ============================================================================
// Types
// ============================================================================

/// How a rule locates the text it replaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    /// Regular expression. The replacement may reference captures (`$1`, `${name}`).
    Regex(String),
    /// Exact substring. The replacement is inserted verbatim.
    Literal(String),
}

impl Pattern {
    pub fn as_str(&self) -> &str {
        match self {
            Pattern::Regex(s) | Pattern::Literal(s) => s,
        }
    }
}

/// One (match pattern, replacement) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionRule {
    /// Short name used in error details.
    pub label: String,
    pub pattern: Pattern,
    pub replacement: String,
}

impl SubstitutionRule {
    pub fn regex(label: &str, pattern: &str, replacement: &str) -> Self {
        SubstitutionRule {
            label: label.to_string(),
            pattern: Pattern::Regex(pattern.to_string()),
            replacement: replacement.to_string(),
        }
    }

    pub fn literal(label: &str, from: &str, to: &str) -> Self {
        SubstitutionRule {
            label: label.to_string(),
            pattern: Pattern::Literal(from.to_string()),
            replacement: to.to_string(),
        }
    }

    fn compile(&self, index: usize) -> Result<CompiledRule> {
        let source = self.pattern.as_str();
        if source.is_empty() {
            return Err(Error::config_invalid_value(
                format!("rules[{}].pattern", index),
                None,
                format!("Rule '{}' has an empty pattern", self.label),
            ));
        }

        let (regex_source, expand) = match &self.pattern {
            Pattern::Regex(p) => (Cow::Borrowed(p.as_str()), true),
            Pattern::Literal(p) => (Cow::Owned(regex::escape(p)), false),
        };

        let regex = Regex::new(&regex_source).map_err(|e| {
            Error::config_invalid_value(
                format!("rules[{}].pattern", index),
                Some(source.to_string()),
                format!("Rule '{}' does not compile: {}", self.label, e),
            )
        })?;

        Ok(CompiledRule {
            regex,
            replacement: self.replacement.clone(),
            expand,
        })
    }
}

/// Ordered sequence of substitution rules.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RuleSet {
    pub rules: Vec<SubstitutionRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<SubstitutionRule>) -> Self {
        RuleSet { rules }
    }

    /// The event-file rules: one signature rule, then one reference rule per
    /// entry in [`GLOBAL_NAMES`].
    pub fn events() -> Self {
        let signature = format!("effect: ({{ {} }}) =>", INJECTED_NAMES.join(", "));

        let mut rules = Vec::with_capacity(GLOBAL_NAMES.len() + 1);
        rules.push(SubstitutionRule::regex(
            "effect signature",
            SIGNATURE_PATTERN,
            &signature,
        ));

        for name in GLOBAL_NAMES {
            rules.push(SubstitutionRule::literal(
                &format!("{}.{}", GLOBAL_NAMESPACE, name),
                &format!("{}.{}", GLOBAL_NAMESPACE, name),
                name,
            ));
        }

        RuleSet { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Compile every pattern, failing on the first invalid one.
    pub fn compile(&self) -> Result<CompiledRuleSet> {
        let rules = self
            .rules
            .iter()
            .enumerate()
            .map(|(i, rule)| rule.compile(i))
            .collect::<Result<Vec<_>>>()?;

        Ok(CompiledRuleSet { rules })
    }
}

/// A rule with its pattern compiled, ready to run.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    regex: Regex,
    replacement: String,
    expand: bool,
}

impl CompiledRule {
    /// Replace every non-overlapping match, left to right.
    pub fn replace_all<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if self.expand {
            self.regex.replace_all(text, self.replacement.as_str())
        } else {
            self.regex.replace_all(text, NoExpand(&self.replacement))
        }
    }
}

#[derive(Debug, Clone)]
pub struct CompiledRuleSet {
    rules: Vec<CompiledRule>,
}

impl CompiledRuleSet {
    pub fn iter(&self) -> impl Iterator<Item = &CompiledRule> {
        self.rules.iter()
    }
}
