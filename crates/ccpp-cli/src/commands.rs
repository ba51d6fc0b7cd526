//! Validation command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use ccpp_ingest::{DiscoveryOptions, resolve_metadata_paths};
use ccpp_model::{RunReport, ValidationOptions};
use ccpp_validate::validate_paths;
use tracing::{info, info_span};

/// Exit status when no problem was found.
pub const EXIT_OK: i32 = 0;
/// Exit status when at least one file has problems.
pub const EXIT_PROBLEMS: i32 = 1;
/// Exit status when the run could not be carried out.
pub const EXIT_FATAL: i32 = 2;

/// Everything a validation run needs.
#[derive(Debug, Clone)]
pub struct ValidateRequest {
    pub location: PathBuf,
    pub discovery: DiscoveryOptions,
    pub options: ValidationOptions,
}

impl ValidateRequest {
    pub fn new(location: impl Into<PathBuf>) -> Self {
        Self {
            location: location.into(),
            discovery: DiscoveryOptions::default(),
            options: ValidationOptions::default(),
        }
    }

    #[must_use]
    pub fn with_discovery(mut self, discovery: DiscoveryOptions) -> Self {
        self.discovery = discovery;
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: ValidationOptions) -> Self {
        self.options = options;
        self
    }
}

/// Resolve the location and validate every metadata file found.
///
/// Only an unusable location is an error; per-file failures end up in the
/// returned report.
pub fn run_validate(request: &ValidateRequest) -> Result<RunReport> {
    let span = info_span!("validate", location = %request.location.display());
    let _guard = span.enter();

    let paths = resolve_metadata_paths(&request.location, &request.discovery)
        .context("resolve metadata location")?;
    info!(count = paths.len(), "validating metadata files");

    Ok(validate_paths(&paths, &request.options))
}

/// Process exit status for a finished run.
pub fn exit_code(report: &RunReport) -> i32 {
    if report.has_problems() {
        EXIT_PROBLEMS
    } else {
        EXIT_OK
    }
}
