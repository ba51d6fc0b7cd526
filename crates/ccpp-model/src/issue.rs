//! Validation issue types.
//!
//! Each variant carries only the data its message needs. Severity decides
//! which report channel an issue lands in: errors are problems, warnings are
//! reported separately, advisories are the "double-check" questions.

use serde::{Deserialize, Serialize};

use crate::metadata::Property;

/// Issue severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Rule violation or malformed record; fails the run.
    Error,
    /// Something the checker could not judge.
    Warning,
    /// Worth a second look, never fails the run.
    Advisory,
}

impl Severity {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::Advisory => "Advisory",
        }
    }
}

/// A single finding for one metadata file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    // Record structure
    /// A record never set one of the five properties.
    MissingProperty { variable: String, property: Property },
    /// A bracket line with no closing bracket.
    UnterminatedName { line: usize, text: String },
    /// A property line with no open record to attach to.
    PropertyOutsideRecord { line: usize, property: Property },
    /// The file could not be read or decoded.
    UnreadableFile { reason: String },

    // Naming
    /// Standard name uses characters outside `[a-z0-9_]`.
    StandardNameCharacters { variable: String, value: String },
    /// Standard name starts with a digit or underscore.
    StandardNameFirstCharacter { variable: String, value: String },
    /// Standard name is present but blank.
    StandardNameEmpty { variable: String },
    /// Long name contains non-ASCII or non-printable characters.
    LongNameCharacters { variable: String, value: String },

    // Units
    /// Units are not allowed for the declared type.
    InvalidUnits {
        variable: String,
        units: String,
        var_type: String,
    },
    /// Declared type has no unit rule.
    UnrecognizedType { variable: String, var_type: String },
    /// Units look inconsistent with the standard name.
    SuggestedUnits {
        standard_name: String,
        units: String,
        suggested: String,
    },
}

impl Issue {
    /// Stable identifier for machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            Issue::MissingProperty { .. } => "missing-property",
            Issue::UnterminatedName { .. } => "unterminated-name",
            Issue::PropertyOutsideRecord { .. } => "property-outside-record",
            Issue::UnreadableFile { .. } => "unreadable-file",
            Issue::StandardNameCharacters { .. } => "standard-name-characters",
            Issue::StandardNameFirstCharacter { .. } => "standard-name-first-character",
            Issue::StandardNameEmpty { .. } => "standard-name-empty",
            Issue::LongNameCharacters { .. } => "long-name-characters",
            Issue::InvalidUnits { .. } => "invalid-units",
            Issue::UnrecognizedType { .. } => "unrecognized-type",
            Issue::SuggestedUnits { .. } => "suggested-units",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Issue::UnrecognizedType { .. } => Severity::Warning,
            Issue::SuggestedUnits { .. } => Severity::Advisory,
            _ => Severity::Error,
        }
    }

    /// Variable the issue is about, when there is one.
    pub fn variable(&self) -> Option<&str> {
        match self {
            Issue::MissingProperty { variable, .. }
            | Issue::StandardNameCharacters { variable, .. }
            | Issue::StandardNameFirstCharacter { variable, .. }
            | Issue::StandardNameEmpty { variable }
            | Issue::LongNameCharacters { variable, .. }
            | Issue::InvalidUnits { variable, .. }
            | Issue::UnrecognizedType { variable, .. } => Some(variable.as_str()),
            Issue::SuggestedUnits { standard_name, .. } => Some(standard_name.as_str()),
            Issue::UnterminatedName { .. }
            | Issue::PropertyOutsideRecord { .. }
            | Issue::UnreadableFile { .. } => None,
        }
    }

    /// Report line for this issue.
    pub fn message(&self) -> String {
        match self {
            Issue::MissingProperty { variable, property } => {
                format!("Variable {variable} is missing required property {property}.")
            }
            Issue::UnterminatedName { line, text } => {
                format!("Line {line}: cannot read variable name from {text}.")
            }
            Issue::PropertyOutsideRecord { line, property } => {
                format!("Line {line}: {property} appears outside of any variable record.")
            }
            Issue::UnreadableFile { reason } => format!("File could not be read: {reason}."),
            Issue::StandardNameCharacters { variable, value } => {
                format!("Variable {variable} has standard name {value} with invalid characters.")
            }
            Issue::StandardNameFirstCharacter { variable, value } => format!(
                "Variable {variable} has standard name {value} with an invalid first character."
            ),
            Issue::StandardNameEmpty { variable } => {
                format!("Variable {variable} has an empty standard name.")
            }
            Issue::LongNameCharacters { variable, value } => {
                format!("Variable {variable} has long name {value} with invalid characters.")
            }
            Issue::InvalidUnits {
                variable,
                units,
                var_type,
            } => format!("Variable {variable} has invalid units {units} for {var_type} type."),
            Issue::UnrecognizedType { variable, var_type } => {
                format!("Variable {variable} has unrecognized type {var_type}.")
            }
            Issue::SuggestedUnits {
                standard_name,
                units,
                suggested,
            } => format!(
                "Variable {standard_name} has units {units}, should possibly be '{suggested}'."
            ),
        }
    }
}
