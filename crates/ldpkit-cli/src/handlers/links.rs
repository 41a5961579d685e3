//! Links command handler

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::Reporter;
use crate::LinksArgs;
use ldpkit::link::REL_TYPE;
use ldpkit::{contains_link, resolve_if_relative, InteractionModel, LinkHeader, LinkValue};

/// Execute the links command
pub fn execute_links(config: &CliConfig, args: &LinksArgs) -> CliResult<()> {
    let reporter = Reporter::new(config.color.should_color(), config.verbosity.is_quiet());
    let base = args.base.as_deref();

    let lines = describe_links(&args.headers, base, args.rel.as_deref())?;
    if lines.is_empty() {
        reporter.warning("no matching links");
    }
    for line in &lines {
        reporter.line(line);
    }

    if let Some(expected) = &args.expect {
        let rel = args.rel.as_deref().unwrap_or(REL_TYPE);
        if !contains_link(expected, rel, base, &args.headers)? {
            return Err(CliError::check_failed(format!(
                "no link to <{expected}> with rel=\"{rel}\""
            )));
        }
        reporter.success(&format!("found <{expected}> with rel=\"{rel}\""));
    }
    Ok(())
}

/// One line per link-value: resolved target, relation and, for `type`
/// links, the LDP interaction model it names.
pub fn describe_links(
    headers: &[String],
    base: Option<&str>,
    rel: Option<&str>,
) -> CliResult<Vec<String>> {
    let header = LinkHeader::parse(headers)?;
    tracing::debug!(links = header.len(), "parsed Link header");

    let selected: Vec<&LinkValue> = match rel {
        Some(rel) => header.with_rel(rel).collect(),
        None => header.links().iter().collect(),
    };

    let mut lines = Vec::with_capacity(selected.len());
    for link in selected {
        let resolved = resolve_if_relative(base, &link.target)?;
        let mut line = format!("{resolved}  rel=\"{}\"", link.rel().unwrap_or_default());
        if link.has_rel(REL_TYPE) {
            if let Some(model) = InteractionModel::from_uri(&resolved) {
                line.push_str(&format!("  ({model})"));
            }
        }
        lines.push(line);
    }
    Ok(lines)
}
