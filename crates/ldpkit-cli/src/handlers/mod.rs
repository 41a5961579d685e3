//! Command handlers - extracted from main.rs for testability
//!
//! Each handler module contains:
//! - The execution logic for a CLI command
//! - Pure helper functions
//! - Tests

pub mod links;
pub mod prefer;
pub mod report;
pub mod summary;

pub use links::{describe_links, execute_links};
pub use prefer::{describe_preference, execute_prefer, PreferenceOutcome};
pub use report::{execute_report, render_report, write_report};
pub use summary::execute_summary;

use crate::error::{CliError, CliResult};
use ldpkit::SuiteCatalog;
use std::path::Path;

/// Load a catalog file, optionally reordered into the LDP suite order
pub fn load_catalog(path: &Path, ldp_order: bool) -> CliResult<SuiteCatalog> {
    if !path.is_file() {
        return Err(CliError::config(format!("catalog not found: {}", path.display())));
    }

    let catalog = SuiteCatalog::load(path)?;
    tracing::info!(
        path = %path.display(),
        modules = catalog.modules.len(),
        "loaded test catalog"
    );

    Ok(if ldp_order {
        catalog.in_ldp_order()
    } else {
        catalog
    })
}
