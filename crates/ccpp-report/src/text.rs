//! Plain-text report.
//!
//! Problems are grouped by file. A run without problems prints a single
//! pass line. Warnings and double-check questions follow in their own
//! sections so they never read as failures.

use ccpp_model::{FileReport, Issue, RunReport};

const INDENT: &str = "    ";

/// Render the whole run as it is printed to standard output.
pub fn render_text(run: &RunReport) -> String {
    let mut out = String::new();

    for file in run.files.iter().filter(|file| file.has_problems()) {
        write_section(&mut out, "Problems found in file", file, file.problems());
    }
    if !run.has_problems() {
        out.push_str("\nAll files passed all checks!\n");
    }

    for file in run.files.iter().filter(|file| file.warning_count() > 0) {
        write_section(&mut out, "Warnings in file", file, file.warnings());
    }

    if run.has_questions() {
        if run.has_problems() {
            out.push_str("Also, some stuff should be double-checked:\n");
        } else {
            out.push_str("But some stuff should be double-checked:\n");
        }
        for file in run.files.iter().filter(|file| file.question_count() > 0) {
            write_section(&mut out, "Questions in file", file, file.questions());
        }
    }

    out
}

fn write_section<'a>(
    out: &mut String,
    heading: &str,
    file: &FileReport,
    issues: impl Iterator<Item = &'a Issue>,
) {
    out.push_str(&format!("\n{heading} {}:\n", file.path.display()));
    for issue in issues {
        out.push_str(INDENT);
        out.push_str(&issue.message());
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_run_passes() {
        assert_eq!(
            render_text(&RunReport::new()),
            "\nAll files passed all checks!\n"
        );
    }

    #[test]
    fn clean_files_are_not_listed() {
        let mut run = RunReport::new();
        run.push(FileReport::new("clean.meta"));
        let text = render_text(&run);
        assert!(!text.contains("clean.meta"));
        assert!(text.contains("All files passed all checks!"));
    }

    #[test]
    fn problem_lines_are_indented() {
        let mut file = FileReport::new("bad.meta");
        file.add(Issue::StandardNameEmpty {
            variable: "im".to_string(),
        });
        let mut run = RunReport::new();
        run.push(file);
        assert_eq!(
            render_text(&run),
            "\nProblems found in file bad.meta:\n    Variable im has an empty standard name.\n"
        );
    }
}
