//! Reading CCPP metadata files from disk.
//!
//! [`discovery`] turns a user-supplied location into a list of `.meta`
//! files, [`parser`] turns the text of one file into a [`MetadataFile`].
//!
//! [`MetadataFile`]: ccpp_model::MetadataFile

pub mod assignment;
pub mod discovery;
pub mod error;
pub mod parser;

pub use assignment::assignment_value;
pub use discovery::{DiscoveryOptions, find_metadata_files, resolve_metadata_paths};
pub use error::{IngestError, Result};
pub use parser::{TABLE_CLOSE_MARKER, TABLE_OPEN_MARKER, parse_metadata, read_metadata_file};
