//! ldpkit CLI: LDP conformance toolkit
//!
//! ## Usage
//!
//! ```bash
//! ldpkit summary suite.yaml                         # Coverage counters
//! ldpkit report suite.yaml --format markdown        # Write a report
//! ldpkit links -H '<a>; rel="type"' --base http://example.org/c/
//! ldpkit prefer 'return=representation'             # Preference-Applied check
//! ```

use clap::Parser;
use ldpkit_cli::{
    handlers::{execute_links, execute_prefer, execute_report, execute_summary},
    logging, Cli, CliConfig, CliResult, ColorChoice, Commands, Verbosity,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let config = build_config(&cli);
    console::set_colors_enabled(config.color.should_color());
    logging::init(&config);

    match cli.command {
        Commands::Summary(args) => execute_summary(&config, &args),
        Commands::Report(args) => execute_report(&config, &args).map(|_| ()),
        Commands::Links(args) => execute_links(&config, &args),
        Commands::Prefer(args) => execute_prefer(&config, &args),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let color: ColorChoice = cli.color.into();

    CliConfig::new().with_verbosity(verbosity).with_color(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_config() {
        let cli = Cli::parse_from(["ldpkit", "-v", "--color", "never", "prefer"]);
        let config = build_config(&cli);
        assert_eq!(config.verbosity, Verbosity::Verbose);
        assert_eq!(config.color, ColorChoice::Never);
    }

    #[test]
    fn test_quiet_wins() {
        let cli = Cli::parse_from(["ldpkit", "-q", "-vv", "prefer"]);
        assert!(build_config(&cli).verbosity.is_quiet());
    }
}
