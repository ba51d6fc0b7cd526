//! Machine-readable report.

use serde::Serialize;

use ccpp_model::{Issue, RunReport, Severity};

#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub passed: bool,
    pub summary: JsonSummary,
    pub files: Vec<JsonFile>,
}

#[derive(Debug, Serialize)]
pub struct JsonSummary {
    pub files: usize,
    pub problems: usize,
    pub warnings: usize,
    pub questions: usize,
}

#[derive(Debug, Serialize)]
pub struct JsonFile {
    pub path: String,
    pub issues: Vec<JsonIssue>,
}

#[derive(Debug, Serialize)]
pub struct JsonIssue {
    pub code: &'static str,
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable: Option<String>,
    pub message: String,
}

impl From<&Issue> for JsonIssue {
    fn from(issue: &Issue) -> Self {
        Self {
            code: issue.code(),
            severity: issue.severity(),
            variable: issue.variable().map(str::to_string),
            message: issue.message(),
        }
    }
}

impl From<&RunReport> for JsonReport {
    fn from(run: &RunReport) -> Self {
        Self {
            passed: !run.has_problems(),
            summary: JsonSummary {
                files: run.file_count(),
                problems: run.problem_count(),
                warnings: run.warning_count(),
                questions: run.question_count(),
            },
            files: run
                .files
                .iter()
                .map(|file| JsonFile {
                    path: file.path.display().to_string(),
                    issues: file.issues.iter().map(JsonIssue::from).collect(),
                })
                .collect(),
        }
    }
}

/// Pretty-printed JSON for the whole run.
pub fn render_json(run: &RunReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport::from(run))
}
