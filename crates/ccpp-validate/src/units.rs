//! Unit rule table: which unit strings each declared type accepts.

/// Units accepted for `real` variables.
#[rustfmt::skip]
pub const REAL_UNITS: &[&str] = &[
    "1",
    "cm",
    "d", "days",
    "dBZ",
    "degree",
    "flag",
    "flashes min-1",
    "fraction",
    "g", "g mol-1", "g m-2",
    "h",
    "hPa",
    "J", "J cal-1", "J K-1", "J K-1 mol-1", "J kg-1", "J kg-1 K-1", "J m-2", "J s-1",
    "J s2 K-1 kg-1 m-1",
    "K", "K kg kg-1", "K m", "K m s-1", "K m-1", "K s-1", "K-1", "K2",
    "kg", "kg kg-1", "kg kg-1 m s-1", "kg kg-1 s-1", "kg m-1 s-2", "kg m-2", "kg m-2 s-1",
    "kg m-3", "kg-1", "kg-1 s-1", "kg2 kg-2",
    "km", "km-1", "km-2",
    "m", "m s-1", "m s-1 kg kg-1", "m s-2", "m K-1", "m-1", "m-2", "m-3", "m2", "m2 radian-2",
    "m2 s-1", "m2 s-2", "m2 s-2 K-1", "m2 s-3", "m3", "m3 kg-1", "m3 m-3", "m6 kg-1",
    "min",
    "mm", "mm h-1", "mm s-1",
    "mol", "mol mol-1", "mol-1",
    "MW",
    "Pa", "Pa s", "Pa s-1",
    "percent",
    "radian",
    "radian2 m-2",
    "s", "s m-1", "s-1", "s2 m-1",
    "ug", "ug m-2", "ug m-2 s-1",
    "um",
    "various",
    "W", "W m-2", "W m-2 K-1", "W m-2 K-4", "W m-2 s",
];

/// Units accepted for `integer` variables.
pub const INTEGER_UNITS: &[&str] = &["1", "flag", "index", "count"];

/// Units accepted for `character` variables.
pub const CHARACTER_UNITS: &[&str] = &["none"];

/// Units accepted for `logical` variables.
pub const LOGICAL_UNITS: &[&str] = &["flag"];

/// Allowed units for a declared type, or `None` when the type has no rule.
///
/// Type names are matched exactly; `Real` is not `real`.
pub fn allowed_units(var_type: &str) -> Option<&'static [&'static str]> {
    match var_type {
        "character" => Some(CHARACTER_UNITS),
        "logical" => Some(LOGICAL_UNITS),
        "real" => Some(REAL_UNITS),
        "integer" => Some(INTEGER_UNITS),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn real_units_are_unique() {
        let unique: HashSet<&str> = REAL_UNITS.iter().copied().collect();
        assert_eq!(unique.len(), REAL_UNITS.len());
        assert_eq!(REAL_UNITS.len(), 91);
    }

    #[test]
    fn dispatch_by_type() {
        assert_eq!(allowed_units("character"), Some(CHARACTER_UNITS));
        assert_eq!(allowed_units("logical"), Some(LOGICAL_UNITS));
        assert!(allowed_units("real").unwrap().contains(&"W m-2"));
        assert!(allowed_units("integer").unwrap().contains(&"count"));
        assert_eq!(allowed_units("Real"), None);
        assert_eq!(allowed_units("ty_demo"), None);
    }
}
