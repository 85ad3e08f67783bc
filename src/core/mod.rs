pub mod config;
pub mod error;
pub mod rewrite;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use rewrite::{apply, rewrite, RewriteReport, RuleSet, SubstitutionRule};
