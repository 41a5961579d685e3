//! Prefer command handler

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::Reporter;
use crate::PreferArgs;
use ldpkit::{check_preference_applied, has_return_representation};

/// What a set of `Preference-Applied` values says about `return=representation`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceOutcome {
    /// No header values
    Absent,
    /// At least one value acknowledges the preference
    Acknowledged,
    /// Values present, none acknowledges the preference
    NotAcknowledged,
}

/// Classify `Preference-Applied` values
#[must_use]
pub fn describe_preference(values: &[String]) -> PreferenceOutcome {
    if values.is_empty() {
        PreferenceOutcome::Absent
    } else if has_return_representation(values) {
        PreferenceOutcome::Acknowledged
    } else {
        PreferenceOutcome::NotAcknowledged
    }
}

/// Execute the prefer command
pub fn execute_prefer(config: &CliConfig, args: &PreferArgs) -> CliResult<()> {
    let reporter = Reporter::new(config.color.should_color(), config.verbosity.is_quiet());

    match describe_preference(&args.values) {
        PreferenceOutcome::Absent => {
            reporter.line("no Preference-Applied values: nothing to check");
        }
        PreferenceOutcome::Acknowledged => {
            reporter.success("return=representation acknowledged");
        }
        PreferenceOutcome::NotAcknowledged => {
            if args.strict {
                check_preference_applied(&args.values)?;
            }
            reporter.warning("Preference-Applied does not acknowledge return=representation");
        }
    }
    Ok(())
}
