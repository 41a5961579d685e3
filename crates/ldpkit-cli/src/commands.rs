//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// ldpkit: LDP conformance toolkit - requirement coverage and header checks
#[derive(Parser, Debug)]
#[command(name = "ldpkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the coverage summary of a test catalog
    Summary(SummaryArgs),

    /// Generate a test cases report
    Report(ReportArgs),

    /// Split and resolve Link header values
    Links(LinksArgs),

    /// Check Preference-Applied header values
    Prefer(PreferArgs),
}

/// Arguments for the summary command
#[derive(Parser, Debug)]
pub struct SummaryArgs {
    /// Catalog file (YAML, or JSON with a .json extension)
    pub catalog: PathBuf,

    /// Reorder modules into the LDP suite order before counting
    #[arg(long)]
    pub ldp_order: bool,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the report command
#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// Catalog file (YAML, or JSON with a .json extension)
    pub catalog: PathBuf,

    /// Report format
    #[arg(short, long, default_value = "html")]
    pub format: ReportFormat,

    /// Output file (defaults to report/<name for the format>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report title (overrides the catalog title)
    #[arg(long)]
    pub title: Option<String>,

    /// Reorder modules into the LDP suite order before counting
    #[arg(long)]
    pub ldp_order: bool,
}

/// Report output format
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// HTML report
    #[default]
    Html,
    /// JSON
    Json,
    /// Markdown
    Markdown,
}

impl ReportFormat {
    /// Default file name for this format
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Html => "LdpTestCasesHtmlReport.html",
            Self::Json => "LdpTestCasesReport.json",
            Self::Markdown => "LdpTestCasesReport.md",
        }
    }
}

/// Arguments for the links command
#[derive(Parser, Debug)]
pub struct LinksArgs {
    /// Link header value (repeat for multiple header lines)
    #[arg(long = "header", short = 'H', required = true)]
    pub headers: Vec<String>,

    /// Request URI that relative targets resolve against
    #[arg(long)]
    pub base: Option<String>,

    /// Only report links with this relation
    #[arg(long)]
    pub rel: Option<String>,

    /// Fail unless a link to this URI with --rel (default "type") is present
    #[arg(long)]
    pub expect: Option<String>,
}

/// Arguments for the prefer command
#[derive(Parser, Debug)]
pub struct PreferArgs {
    /// Preference-Applied header values
    pub values: Vec<String>,

    /// Fail when values are present but none acknowledges return=representation
    #[arg(long)]
    pub strict: bool,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
