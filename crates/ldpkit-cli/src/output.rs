//! Terminal output

use console::{style, Style, Term};
use ldpkit::{CoverageSummary, RequirementLevel};

/// Line-oriented reporter for command results
#[derive(Debug)]
pub struct Reporter {
    out: Term,
    err: Term,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(true, false)
    }
}

impl Reporter {
    /// Create a new reporter
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            use_color,
            quiet,
        }
    }

    /// Print a plain line
    pub fn line(&self, message: &str) {
        if self.quiet {
            return;
        }
        let _ = self.out.write_line(message);
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if self.quiet {
            return;
        }

        let prefix = if self.use_color {
            style("✓").green().bold().to_string()
        } else {
            "PASS".to_string()
        };

        let _ = self.out.write_line(&format!("{prefix} {message}"));
    }

    /// Print a failure message
    pub fn failure(&self, message: &str) {
        // shown even in quiet mode
        let prefix = if self.use_color {
            style("✗").red().bold().to_string()
        } else {
            "FAIL".to_string()
        };

        let _ = self.err.write_line(&format!("{prefix} {message}"));
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        let prefix = if self.use_color {
            style("⚠").yellow().bold().to_string()
        } else {
            "WARN".to_string()
        };

        let _ = self.err.write_line(&format!("{prefix} {message}"));
    }

    /// Print a section header
    pub fn header(&self, title: &str) {
        if self.quiet {
            return;
        }

        let styled = if self.use_color {
            style(title).bold().underlined().to_string()
        } else {
            format!("=== {title} ===")
        };

        let _ = self.out.write_line("");
        let _ = self.out.write_line(&styled);
    }

    /// Print a coverage summary table
    pub fn coverage(&self, summary: &CoverageSummary) {
        if self.quiet {
            return;
        }
        for line in coverage_lines(summary, self.use_color) {
            let _ = self.out.write_line(&line);
        }
    }
}

/// Render a coverage summary as aligned text lines
#[must_use]
pub fn coverage_lines(summary: &CoverageSummary, use_color: bool) -> Vec<String> {
    let good = if use_color {
        Style::new().green().bold()
    } else {
        Style::new()
    };
    let bad = if use_color {
        Style::new().red()
    } else {
        Style::new()
    };

    let mut lines = vec![
        format!("{:<28}{}", "Total tests", summary.total_tests),
        format!("{:<28}{}", "Automated", good.apply_to(summary.total_implemented)),
        format!("{:<28}{}", "Not implemented", bad.apply_to(summary.unimplemented)),
        format!("{:<28}{}", "Disabled", summary.disabled),
        format!("{:<28}{}", "Client only", summary.client_only),
        format!("{:<28}{}", "Manual", summary.manual),
        String::new(),
        format!(
            "{:<28}{} ({} pending, {} approved)",
            "Requirements covered", summary.requirements_covered, summary.pending, summary.approved
        ),
    ];

    for level in RequirementLevel::ALL {
        let counts = summary.level(level);
        lines.push(format!(
            "  {:<26}{} total, {} automated, {} not implemented",
            level.as_str(),
            counts.total,
            good.apply_to(counts.implemented),
            bad.apply_to(counts.not_implemented)
        ));
    }

    lines
}
