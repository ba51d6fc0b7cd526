//! Property tests for the character-set rules.

use ccpp_model::{Issue, Property, ValidationOptions, Variable};
use ccpp_validate::{check_variable, long_name_allowed, standard_name_allowed};
use proptest::prelude::*;

fn named(standard_name: &str) -> Variable {
    Variable::new("v")
        .with(Property::StandardName, standard_name)
        .with(Property::LongName, "a long name")
        .with(Property::Units, "1")
        .with(Property::Dimensions, "()")
        .with(Property::Type, "integer")
}

proptest! {
    #[test]
    fn valid_standard_names_pass(name in "[a-z][a-z0-9_]{0,30}") {
        prop_assert!(standard_name_allowed(&name));
        prop_assert!(check_variable(&named(&name), &ValidationOptions::default()).is_empty());
    }

    #[test]
    fn uppercase_fails_on_character_set(
        head in "[a-z0-9_]{0,10}",
        upper in "[A-Z]",
        tail in "[a-z0-9_]{0,10}",
    ) {
        let name = format!("{head}{upper}{tail}");
        let issues = check_variable(&named(&name), &ValidationOptions::default());
        prop_assert_eq!(issues.len(), 1);
        let is_character_issue = matches!(issues[0], Issue::StandardNameCharacters { .. });
        prop_assert!(is_character_issue);
    }

    #[test]
    fn punctuation_fails_on_character_set(
        head in "[_0-9][a-z]{0,10}",
        mark in "[-.,:;!?/()\\[\\]*+=@#$%&]",
    ) {
        // A bad first character must not be reported once the set fails.
        let name = format!("{head}{mark}");
        let issues = check_variable(&named(&name), &ValidationOptions::default());
        prop_assert_eq!(issues.len(), 1);
        let is_character_issue = matches!(issues[0], Issue::StandardNameCharacters { .. });
        prop_assert!(is_character_issue);
    }

    #[test]
    fn non_ascii_long_names_fail(
        head in "[a-z ]{0,10}",
        ch in any::<char>().prop_filter("non-ascii", |c| !c.is_ascii()),
        tail in "[a-z ]{0,10}",
    ) {
        let value = format!("{head}{ch}{tail}");
        prop_assert!(!long_name_allowed(&value));
    }
}
