//! Report command handler

use super::load_catalog;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::Reporter;
use crate::{ReportArgs, ReportFormat};
use ldpkit::{build_report_model, ReportModel};
use std::fs;
use std::path::{Path, PathBuf};

/// Execute the report command, returning where the report was written
pub fn execute_report(config: &CliConfig, args: &ReportArgs) -> CliResult<PathBuf> {
    let reporter = Reporter::new(config.color.should_color(), config.verbosity.is_quiet());
    if args.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
        return Err(CliError::invalid_argument("--title must not be empty"));
    }

    let catalog = load_catalog(&args.catalog, args.ldp_order)?;
    let records = catalog.records();
    if records.is_empty() {
        reporter.warning("catalog declares no requirement-tagged test methods");
    }

    let mut model = build_report_model(&records);
    if let Some(title) = args.title.as_ref().or(catalog.title.as_ref()) {
        model = model.with_title(title.clone());
    }

    let content = render_report(&model, args.format)?;
    let path = args
        .output
        .clone()
        .unwrap_or_else(|| config.report_path(args.format.file_name()));
    write_report(&path, &content)?;

    tracing::info!(
        format = ?args.format,
        path = %path.display(),
        tests = model.summary.total_tests,
        "report written"
    );
    reporter.success(&format!("Report generated at: {}", path.display()));
    Ok(path)
}

/// Render a report model in the requested format
pub fn render_report(model: &ReportModel, format: ReportFormat) -> CliResult<String> {
    match format {
        ReportFormat::Html => Ok(model.render_html()),
        ReportFormat::Markdown => Ok(model.render_markdown()),
        ReportFormat::Json => model
            .render_json()
            .map_err(|e| CliError::report_generation(e.to_string())),
    }
}

/// Write report content, creating parent directories as needed
pub fn write_report(path: &Path, content: &str) -> CliResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
