//! Validation check modules.
//!
//! Each module performs one kind of check on a single variable record.

mod advisory;
mod long_name;
mod presence;
mod standard_name;
mod units;

use ccpp_model::{Issue, ValidationOptions, Variable};

pub use long_name::long_name_allowed;
pub use standard_name::standard_name_allowed;

/// Run all checks on one variable, in report order.
pub fn run_all(variable: &Variable, options: &ValidationOptions) -> Vec<Issue> {
    let mut issues = Vec::new();

    // 1. Every record must carry all five properties
    issues.extend(presence::check(variable));

    // 2. Standard name character set, then first character
    issues.extend(standard_name::check(variable));

    // 3. Long name character set
    issues.extend(long_name::check(variable));

    // 4. Units must suit the declared type
    issues.extend(units::check(variable, options.unknown_type));

    // 5. Name/unit consistency hints
    if options.advisories {
        issues.extend(advisory::check(variable));
    }

    issues
}
