//! Configuration options for metadata validation.

use serde::{Deserialize, Serialize};

/// How variables with a type outside the unit rule table are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnknownTypeMode {
    /// Record a warning in the file report.
    #[default]
    Warn,
    /// Skip the variable's unit check silently.
    Ignore,
}

/// Options controlling the rule checker.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationOptions {
    /// Run the name/unit consistency advisories.
    ///
    /// Default: false. Advisories never fail a run.
    pub advisories: bool,

    /// Handling of type values without a unit rule.
    pub unknown_type: UnknownTypeMode,
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_advisories(mut self, enable: bool) -> Self {
        self.advisories = enable;
        self
    }

    #[must_use]
    pub fn with_unknown_type(mut self, mode: UnknownTypeMode) -> Self {
        self.unknown_type = mode;
        self
    }
}
