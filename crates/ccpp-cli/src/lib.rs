//! CLI library components for the CCPP metadata validator.

pub mod commands;
pub mod logging;
