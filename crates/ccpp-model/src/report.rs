use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::issue::{Issue, Severity};

/// Findings for a single metadata file, in the order they were produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub issues: Vec<Issue>,
}

impl FileReport {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            issues: Vec::new(),
        }
    }

    pub fn add(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    pub fn extend(&mut self, issues: impl IntoIterator<Item = Issue>) {
        self.issues.extend(issues);
    }

    fn by_severity(&self, severity: Severity) -> impl Iterator<Item = &Issue> {
        self.issues
            .iter()
            .filter(move |issue| issue.severity() == severity)
    }

    pub fn problems(&self) -> impl Iterator<Item = &Issue> {
        self.by_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.by_severity(Severity::Warning)
    }

    pub fn questions(&self) -> impl Iterator<Item = &Issue> {
        self.by_severity(Severity::Advisory)
    }

    pub fn problem_count(&self) -> usize {
        self.problems().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn question_count(&self) -> usize {
        self.questions().count()
    }

    pub fn has_problems(&self) -> bool {
        self.problems().next().is_some()
    }
}

/// Findings for every file visited in one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub files: Vec<FileReport>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, report: FileReport) {
        self.files.push(report);
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn problem_count(&self) -> usize {
        self.files.iter().map(FileReport::problem_count).sum()
    }

    pub fn warning_count(&self) -> usize {
        self.files.iter().map(FileReport::warning_count).sum()
    }

    pub fn question_count(&self) -> usize {
        self.files.iter().map(FileReport::question_count).sum()
    }

    pub fn has_problems(&self) -> bool {
        self.files.iter().any(FileReport::has_problems)
    }

    pub fn has_questions(&self) -> bool {
        self.question_count() > 0
    }
}
