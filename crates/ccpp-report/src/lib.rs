//! Report rendering for validation runs.

pub mod json;
pub mod text;

pub use json::{JsonReport, render_json};
pub use text::render_text;
