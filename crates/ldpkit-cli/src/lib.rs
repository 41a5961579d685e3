//! ldpkit CLI Library
//!
//! Command-line surface for the ldpkit conformance toolkit: catalog loading,
//! report files, header checks and logging setup.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::format_push_string)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
mod output;

pub use commands::{
    Cli, ColorArg, Commands, LinksArgs, PreferArgs, ReportArgs, ReportFormat, SummaryArgs,
};
pub use config::{CliConfig, ColorChoice, Verbosity, DEFAULT_REPORT_DIR};
pub use error::{CliError, CliResult};
pub use output::{coverage_lines, Reporter};
