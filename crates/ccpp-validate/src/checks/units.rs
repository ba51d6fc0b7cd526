//! Unit/type compatibility checks.

use ccpp_model::{Issue, UnknownTypeMode, Variable};

use crate::units::allowed_units;

pub fn check(variable: &Variable, unknown_type: UnknownTypeMode) -> Option<Issue> {
    let var_type = variable.var_type.as_deref()?;

    let Some(allowed) = allowed_units(var_type) else {
        return match unknown_type {
            UnknownTypeMode::Warn => Some(Issue::UnrecognizedType {
                variable: variable.local_name.clone(),
                var_type: var_type.to_string(),
            }),
            UnknownTypeMode::Ignore => None,
        };
    };
    // Missing units are already reported by the presence check.
    let units = variable.units.as_deref()?;

    if allowed.contains(&units) {
        return None;
    }
    Some(Issue::InvalidUnits {
        variable: variable.local_name.clone(),
        units: units.to_string(),
        var_type: var_type.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ccpp_model::Property;

    fn typed(var_type: &str, units: &str) -> Variable {
        Variable::new("v")
            .with(Property::Type, var_type)
            .with(Property::Units, units)
    }

    #[test]
    fn character_needs_none() {
        assert_eq!(check(&typed("character", "none"), UnknownTypeMode::Warn), None);
        assert_eq!(
            check(&typed("character", "percent"), UnknownTypeMode::Warn)
                .as_ref()
                .map(Issue::message),
            Some("Variable v has invalid units percent for character type.".to_string())
        );
    }

    #[test]
    fn logical_needs_flag() {
        assert_eq!(check(&typed("logical", "flag"), UnknownTypeMode::Warn), None);
        assert!(check(&typed("logical", "1"), UnknownTypeMode::Warn).is_some());
    }

    #[test]
    fn units_are_case_sensitive() {
        assert_eq!(check(&typed("real", "Pa"), UnknownTypeMode::Warn), None);
        assert!(check(&typed("real", "pa"), UnknownTypeMode::Warn).is_some());
    }

    #[test]
    fn unknown_type_modes() {
        let variable = typed("ty_demo_data", "DDT");
        assert!(matches!(
            check(&variable, UnknownTypeMode::Warn),
            Some(Issue::UnrecognizedType { .. })
        ));
        assert_eq!(check(&variable, UnknownTypeMode::Ignore), None);
    }

    #[test]
    fn unknown_type_without_units_still_warns() {
        let variable = Variable::new("v").with(Property::Type, "ty_demo");
        assert!(matches!(
            check(&variable, UnknownTypeMode::Warn),
            Some(Issue::UnrecognizedType { .. })
        ));
        assert_eq!(check(&Variable::new("v").with(Property::Type, "real"), UnknownTypeMode::Warn), None);
    }
}
