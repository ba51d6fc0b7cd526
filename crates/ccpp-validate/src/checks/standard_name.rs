//! Standard name checks.
//!
//! A standard name is lowercase ASCII letters, digits and underscores, and
//! must not start with a digit or an underscore. The first-character rule
//! is only looked at once the character set passes.

use ccpp_model::{Issue, Variable};

/// True when every character is in `[a-z0-9_]`.
pub fn standard_name_allowed(value: &str) -> bool {
    value
        .chars()
        .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_')
}

pub fn check(variable: &Variable) -> Option<Issue> {
    let value = variable.standard_name.as_deref()?;
    let name = variable.local_name.clone();

    if !standard_name_allowed(value) {
        return Some(Issue::StandardNameCharacters {
            variable: name,
            value: value.to_string(),
        });
    }

    match value.chars().next() {
        None => Some(Issue::StandardNameEmpty { variable: name }),
        Some(first) if first.is_ascii_digit() || first == '_' => {
            Some(Issue::StandardNameFirstCharacter {
                variable: name,
                value: value.to_string(),
            })
        }
        Some(_) => None,
    }
}
