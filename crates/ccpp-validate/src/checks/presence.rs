//! Missing property checks.

use ccpp_model::{Issue, Variable};

/// One issue per property the record never set.
pub fn check(variable: &Variable) -> Vec<Issue> {
    variable
        .missing_properties()
        .into_iter()
        .map(|property| Issue::MissingProperty {
            variable: variable.local_name.clone(),
            property,
        })
        .collect()
}
