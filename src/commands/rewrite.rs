use clap::Args;
use std::path::PathBuf;

use rewire::config::{self, RuleSource};
use rewire::log_status;
use rewire::RewriteReport;

#[derive(Args, Debug)]
pub struct RewriteArgs {
    /// Events file to rewrite in place (default: src/game/config/events.js)
    pub path: Option<String>,

    /// JSON rule file replacing the built-in event rules
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,
}

impl RewriteArgs {
    fn rule_source(&self) -> RuleSource {
        match &self.rules {
            Some(path) => RuleSource::File(path.clone()),
            None => RuleSource::BuiltIn,
        }
    }
}

pub fn run(args: RewriteArgs) -> rewire::Result<RewriteReport> {
    let target = config::resolve_target(args.path.as_deref())?;
    let source = args.rule_source();
    let rules = source.load()?;

    if rules.is_empty() {
        log_status!("rewire", "{} has no rules; content will be unchanged", source.describe());
    } else {
        log_status!("rewire", "Using {} ({} rules)", source.describe(), rules.len());
    }
    println!("Processing {}...", target.display());

    let report = rewire::rewrite(&target, &rules)?;

    log_status!(
        "rewire",
        "{} bytes -> {} bytes",
        report.bytes_before,
        report.bytes_after
    );
    println!("Done.");

    Ok(report)
}
