//! Long name checks.
//!
//! Long names are free text but restricted to printable ASCII plus space,
//! tab and newline.

use ccpp_model::{Issue, Variable};

/// True when the value is ASCII letters, digits, punctuation or whitespace
/// from `" \t\n"` only.
pub fn long_name_allowed(value: &str) -> bool {
    value.is_ascii()
        && value.chars().all(|ch| {
            ch.is_ascii_alphanumeric() || ch.is_ascii_punctuation() || matches!(ch, ' ' | '\t' | '\n')
        })
}

pub fn check(variable: &Variable) -> Option<Issue> {
    let value = variable.long_name.as_deref()?;
    if long_name_allowed(value) {
        return None;
    }
    Some(Issue::LongNameCharacters {
        variable: variable.local_name.clone(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_name_allowed() {
        assert!(long_name_allowed("mean layer temperature (K), 2-m"));
        assert!(long_name_allowed("tab\tseparated"));
        assert!(long_name_allowed(""));
        assert!(!long_name_allowed("temp\u{e9}rature"));
        assert!(!long_name_allowed("non\u{a0}breaking"));
        assert!(!long_name_allowed("carriage\rreturn"));
        assert!(!long_name_allowed("bell\u{7}"));
    }
}
