//! Rule checks for CCPP metadata files.
//!
//! Every variable record is checked independently: property presence,
//! standard name characters, long name characters and unit/type
//! compatibility, optionally followed by advisory hints. Findings are
//! collected per file; a problem in one file never stops the others.

mod checks;
pub mod units;

use std::path::{Path, PathBuf};

use ccpp_ingest::read_metadata_file;
use ccpp_model::{
    DefectKind, FileReport, Issue, MetadataFile, ParseDefect, RunReport, ValidationOptions,
    Variable,
};
use tracing::{debug, info, info_span, warn};

pub use checks::{long_name_allowed, standard_name_allowed};
pub use units::allowed_units;

/// Findings for a single variable record, in report order.
pub fn check_variable(variable: &Variable, options: &ValidationOptions) -> Vec<Issue> {
    checks::run_all(variable, options)
}

/// Validate an already parsed file.
///
/// Parse defects come first, followed by the findings of each variable in
/// file order.
pub fn validate_file(file: &MetadataFile, options: &ValidationOptions) -> FileReport {
    let mut report = FileReport::new(&file.path);
    report.extend(file.defects.iter().map(defect_issue));
    for (table, variable) in file.variables() {
        let issues = check_variable(variable, options);
        if !issues.is_empty() {
            debug!(
                table = %table.name,
                variable = %variable.local_name,
                count = issues.len(),
                "variable has findings"
            );
        }
        report.extend(issues);
    }
    report
}

/// Read, parse and validate one file on disk.
///
/// A file that cannot be read yields a report holding a single error.
pub fn validate_path(path: &Path, options: &ValidationOptions) -> FileReport {
    let span = info_span!("file", path = %path.display());
    let _guard = span.enter();
    match read_metadata_file(path) {
        Ok(file) => validate_file(&file, options),
        Err(error) => {
            warn!(%error, "could not read metadata file");
            let mut report = FileReport::new(path);
            report.add(Issue::UnreadableFile {
                reason: error.to_string(),
            });
            report
        }
    }
}

/// Validate files one after another.
pub fn validate_paths(paths: &[PathBuf], options: &ValidationOptions) -> RunReport {
    let mut run = RunReport::new();
    for path in paths {
        run.push(validate_path(path, options));
    }
    info!(
        files = run.file_count(),
        problems = run.problem_count(),
        warnings = run.warning_count(),
        questions = run.question_count(),
        "validation finished"
    );
    run
}

fn defect_issue(defect: &ParseDefect) -> Issue {
    match &defect.kind {
        DefectKind::UnterminatedName { text } => Issue::UnterminatedName {
            line: defect.line,
            text: text.clone(),
        },
        DefectKind::PropertyOutsideRecord { property } => Issue::PropertyOutsideRecord {
            line: defect.line,
            property: *property,
        },
    }
}
