//! Metadata table parser.
//!
//! A metadata file is a sequence of argument tables:
//!
//! ```text
//! [ccpp-arg-table]
//!   name = demo_run
//!   type = scheme
//! [im]
//!   standard_name = horizontal_loop_extent
//!   long_name = horizontal loop extent
//!   units = count
//!   dimensions = ()
//!   type = integer
//! ########################################################################
//! ```
//!
//! The parser is a three-state machine fed one line at a time. It never
//! fails: structural problems it can recover from are recorded as
//! [`ParseDefect`]s on the returned file, everything else is skipped.

use std::path::Path;

use ccpp_model::{DefectKind, MetadataFile, ParseDefect, Property};
use tracing::{debug, trace};

use crate::assignment::assignment_value;
use crate::error::{IngestError, Result};

/// Line (after trimming) that opens an argument table.
pub const TABLE_OPEN_MARKER: &str = "[ccpp-arg-table]";

/// Prefix of the line that closes an argument table.
pub const TABLE_CLOSE_MARKER: &str = "####";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    /// Looking for the next table-open marker.
    Seeking,
    /// Marker seen; the next line should name the table.
    NamingTable,
    /// Inside table `table`, attaching properties to record `variable`.
    InTable {
        table: usize,
        variable: Option<usize>,
    },
}

/// Read a metadata file and parse it.
///
/// The file is read to completion and closed before parsing starts.
pub fn read_metadata_file(path: &Path) -> Result<MetadataFile> {
    let text = std::fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_metadata(path, &text))
}

/// Parse the text of one metadata file.
pub fn parse_metadata(path: &Path, text: &str) -> MetadataFile {
    parse_lines(path, text.lines())
}

fn parse_lines<'a>(path: &Path, lines: impl IntoIterator<Item = &'a str>) -> MetadataFile {
    let mut file = MetadataFile::new(path);
    let mut state = ParserState::Seeking;
    let mut lines = lines.into_iter().enumerate().map(|(index, line)| (index + 1, line));

    while let Some((number, line)) = lines.next() {
        state = match state {
            ParserState::Seeking => {
                if line.trim() == TABLE_OPEN_MARKER {
                    ParserState::NamingTable
                } else {
                    ParserState::Seeking
                }
            }
            ParserState::NamingTable => {
                if line.trim_start().starts_with("name") {
                    let name = assignment_value(line).trim();
                    let table = file.open_table(name);
                    // Table type declaration.
                    let _ = lines.next();
                    debug!(table = name, line = number, "opened table");
                    ParserState::InTable {
                        table,
                        variable: None,
                    }
                } else {
                    debug!(line = number, "table marker not followed by a name, skipping");
                    ParserState::Seeking
                }
            }
            ParserState::InTable { table, variable } => {
                if line.starts_with(TABLE_CLOSE_MARKER) {
                    trace!(line = number, "closed table");
                    ParserState::Seeking
                } else if line.starts_with('[') {
                    let variable = match bracketed_name(line) {
                        Some(name) => Some(file.tables[table].open_variable(name)),
                        None => {
                            file.defects.push(ParseDefect {
                                line: number,
                                kind: DefectKind::UnterminatedName {
                                    text: line.trim().to_string(),
                                },
                            });
                            None
                        }
                    };
                    ParserState::InTable { table, variable }
                } else {
                    if let Some(property) = property_key(line) {
                        match variable {
                            Some(index) => file.tables[table].variables[index]
                                .set(property, assignment_value(line).trim()),
                            None => file.defects.push(ParseDefect {
                                line: number,
                                kind: DefectKind::PropertyOutsideRecord { property },
                            }),
                        }
                    }
                    ParserState::InTable { table, variable }
                }
            }
        };
    }

    debug!(
        path = %path.display(),
        tables = file.tables.len(),
        variables = file.variable_count(),
        defects = file.defects.len(),
        "parsed metadata file"
    );
    file
}

/// Text between the first `[` and the last `]`, trimmed.
fn bracketed_name(line: &str) -> Option<&str> {
    let start = line.find('[')? + 1;
    let end = line.rfind(']')?;
    (end >= start).then(|| line[start..end].trim())
}

/// Property named at the start of a line, if any.
fn property_key(line: &str) -> Option<Property> {
    let trimmed = line.trim_start();
    Property::ALL
        .into_iter()
        .find(|property| trimmed.starts_with(property.as_str()))
}
