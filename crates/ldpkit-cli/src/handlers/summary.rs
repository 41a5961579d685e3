//! Summary command handler

use super::load_catalog;
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::Reporter;
use crate::SummaryArgs;
use ldpkit::{compute_summary, report::DEFAULT_TITLE};

/// Execute the summary command
pub fn execute_summary(config: &CliConfig, args: &SummaryArgs) -> CliResult<()> {
    let catalog = load_catalog(&args.catalog, args.ldp_order)?;
    let records = catalog.records();
    let summary = compute_summary(&records);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let reporter = Reporter::new(config.color.should_color(), config.verbosity.is_quiet());
    if records.is_empty() {
        reporter.warning("catalog declares no requirement-tagged test methods");
    }

    reporter.header(catalog.title.as_deref().unwrap_or(DEFAULT_TITLE));
    reporter.coverage(&summary);
    if config.verbosity.is_verbose() {
        for module in &catalog.modules {
            reporter.line(&format!("  {} ({} methods)", module.name, module.methods.len()));
        }
    }
    reporter.line("");
    reporter.success(&summary.summary_line());
    Ok(())
}
