//! Data model for CCPP metadata files and the findings produced when
//! validating them.

pub mod issue;
pub mod metadata;
pub mod options;
pub mod report;

pub use issue::{Issue, Severity};
pub use metadata::{DefectKind, MetadataFile, ParseDefect, Property, Table, Variable};
pub use options::{UnknownTypeMode, ValidationOptions};
pub use report::{FileReport, RunReport};
