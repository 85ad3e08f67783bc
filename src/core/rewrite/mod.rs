//! Event-file rewriting — turn implicit `window.*` globals into explicit parameters.
//!
//! A `RuleSet` is an ordered list of substitutions. The `Rewriter` reads one
//! file, runs every rule over its text in order, and overwrites the file with
//! the result. Matching is purely textual: no parsing, no identifier
//! boundaries, strings and comments included.

mod rewriter;
mod rule;

pub use rewriter::{apply, rewrite, Document, RewriteReport};
pub use rule::{
    CompiledRule, CompiledRuleSet, Pattern, RuleSet, SubstitutionRule, GLOBAL_NAMES,
    GLOBAL_NAMESPACE, INJECTED_NAMES, SIGNATURE_PATTERN,
};
