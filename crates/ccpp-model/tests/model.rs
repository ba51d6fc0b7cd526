//! Tests for ccpp-model types.

use ccpp_model::{FileReport, Issue, MetadataFile, Property, RunReport, Severity, Variable};

fn complete(local_name: &str) -> Variable {
    Variable::new(local_name)
        .with(Property::StandardName, "air_temperature")
        .with(Property::LongName, "mean layer temperature")
        .with(Property::Units, "K")
        .with(Property::Dimensions, "(horizontal_loop_extent,vertical_layer_dimension)")
        .with(Property::Type, "real")
}

#[test]
fn complete_variable_has_no_missing_properties() {
    let variable = complete("t");
    assert!(variable.missing_properties().is_empty());
    assert_eq!(variable.get(Property::Type), Some("real"));
}

#[test]
fn variables_iterate_in_file_order() {
    let mut file = MetadataFile::new("demo.meta");
    let first = file.open_table("demo_init");
    file.tables[first].variables.push(complete("a"));
    file.tables[first].variables.push(complete("b"));
    let second = file.open_table("demo_run");
    file.tables[second].variables.push(complete("c"));

    let order: Vec<(&str, &str)> = file
        .variables()
        .map(|(table, variable)| (table.name.as_str(), variable.local_name.as_str()))
        .collect();
    assert_eq!(
        order,
        vec![("demo_init", "a"), ("demo_init", "b"), ("demo_run", "c")]
    );
    assert_eq!(file.variable_count(), 3);
}

#[test]
fn variable_serializes_type_key() {
    let json = serde_json::to_value(complete("t")).expect("serialize variable");
    assert_eq!(json["type"], "real");
    assert_eq!(json["local_name"], "t");
}

#[test]
fn file_report_keeps_insertion_order() {
    let mut report = FileReport::new("demo.meta");
    report.extend([
        Issue::LongNameCharacters {
            variable: "b".to_string(),
            value: "caf\u{e9}".to_string(),
        },
        Issue::StandardNameCharacters {
            variable: "a".to_string(),
            value: "Bad".to_string(),
        },
    ]);
    let codes: Vec<&str> = report.problems().map(Issue::code).collect();
    assert_eq!(codes, vec!["long-name-characters", "standard-name-characters"]);
}

#[test]
fn empty_run_has_no_problems() {
    let run = RunReport::new();
    assert!(!run.has_problems());
    assert_eq!(run.problem_count(), 0);
    assert_eq!(Severity::Error.label(), "Error");
}
