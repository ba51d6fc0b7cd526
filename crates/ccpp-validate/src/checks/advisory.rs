//! Name/unit consistency hints.
//!
//! A standard name mentioning `fraction`, `index` or `count` usually wants
//! the matching unit. These are questions for a human, not violations.

use ccpp_model::{Issue, Variable};

/// (declared type, standard name fragment, expected units)
const HINTS: &[(&str, &str, &str)] = &[
    ("real", "fraction", "fraction"),
    ("integer", "index", "index"),
    ("integer", "count", "count"),
];

pub fn check(variable: &Variable) -> Vec<Issue> {
    let (Some(var_type), Some(standard_name), Some(units)) = (
        variable.var_type.as_deref(),
        variable.standard_name.as_deref(),
        variable.units.as_deref(),
    ) else {
        return Vec::new();
    };

    HINTS
        .iter()
        .filter(|(hint_type, fragment, expected)| {
            *hint_type == var_type && standard_name.contains(fragment) && units != *expected
        })
        .map(|(_, _, expected)| Issue::SuggestedUnits {
            standard_name: standard_name.to_string(),
            units: units.to_string(),
            suggested: (*expected).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ccpp_model::Property;

    fn variable(var_type: &str, standard_name: &str, units: &str) -> Variable {
        Variable::new("v")
            .with(Property::Type, var_type)
            .with(Property::StandardName, standard_name)
            .with(Property::Units, units)
    }

    #[test]
    fn fraction_hint_for_reals() {
        let issues = check(&variable("real", "cloud_area_fraction", "1"));
        assert_eq!(issues.len(), 1);
        assert!(check(&variable("real", "cloud_area_fraction", "fraction")).is_empty());
        assert!(check(&variable("integer", "cloud_area_fraction", "1")).is_empty());
    }

    #[test]
    fn index_and_count_hints_for_integers() {
        let issues = check(&variable("integer", "index_of_first_count", "1"));
        let suggested: Vec<String> = issues
            .iter()
            .filter_map(|issue| match issue {
                Issue::SuggestedUnits { suggested, .. } => Some(suggested.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(suggested, vec!["index", "count"]);
    }
}
