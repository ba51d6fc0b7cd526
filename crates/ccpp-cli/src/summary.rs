//! Report printing for each `--format`.

use anyhow::{Context, Result};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use ccpp_model::{RunReport, Severity};
use ccpp_report::{render_json, render_text};

use crate::cli::ReportFormatArg;

pub fn print_report(report: &RunReport, format: ReportFormatArg) -> Result<()> {
    match format {
        ReportFormatArg::Text => print!("{}", render_text(report)),
        ReportFormatArg::Json => {
            let json = render_json(report).context("serialize report")?;
            println!("{json}");
        }
        ReportFormatArg::Table => print_tables(report),
    }
    Ok(())
}

fn print_tables(report: &RunReport) {
    let mut totals = Table::new();
    totals.set_header(vec![
        header_cell("Files"),
        header_cell("Problems"),
        header_cell("Warnings"),
        header_cell("Questions"),
    ]);
    apply_totals_table_style(&mut totals);
    for index in 0..4 {
        align_column(&mut totals, index, CellAlignment::Right);
    }
    totals.add_row(vec![
        Cell::new(report.file_count()).add_attribute(Attribute::Bold),
        count_cell(report.problem_count(), Color::Red),
        count_cell(report.warning_count(), Color::Yellow),
        count_cell(report.question_count(), Color::Cyan),
    ]);
    println!("{totals}");

    let mut issues = Table::new();
    issues.set_header(vec![
        header_cell("File"),
        header_cell("Severity"),
        header_cell("Variable"),
        header_cell("Code"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut issues);
    align_column(&mut issues, 1, CellAlignment::Center);
    let mut rows = 0usize;
    for file in &report.files {
        for issue in &file.issues {
            issues.add_row(vec![
                Cell::new(file.path.display()).fg(Color::Blue),
                severity_cell(issue.severity()),
                Cell::new(issue.variable().unwrap_or("-")),
                dim_cell(issue.code()),
                Cell::new(issue.message()),
            ]);
            rows += 1;
        }
    }
    if rows > 0 {
        println!();
        println!("Issues:");
        println!("{issues}");
    }
    if !report.has_problems() {
        println!("All files passed all checks!");
    }
}

fn apply_totals_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::UpperBoundary(Width::Fixed(10)),
            ColumnConstraint::UpperBoundary(Width::Fixed(24)),
            ColumnConstraint::UpperBoundary(Width::Fixed(30)),
            ColumnConstraint::UpperBoundary(Width::Percentage(50)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(severity: Severity) -> Cell {
    let cell = Cell::new(severity.label());
    match severity {
        Severity::Error => cell.fg(Color::Red).add_attribute(Attribute::Bold),
        Severity::Warning => cell.fg(Color::Yellow),
        Severity::Advisory => cell.fg(Color::Cyan),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_cells_use_labels() {
        assert_eq!(severity_cell(Severity::Error).content(), "Error");
        assert_eq!(severity_cell(Severity::Warning).content(), "Warning");
        assert_eq!(severity_cell(Severity::Advisory).content(), "Advisory");
    }
}
