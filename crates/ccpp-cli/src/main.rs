//! CCPP metadata validator CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use ccpp_cli::commands::{EXIT_FATAL, ValidateRequest, exit_code, run_validate};
use ccpp_cli::logging::{LogConfig, LogFormat, init_logging};
use ccpp_ingest::DiscoveryOptions;
use ccpp_model::{UnknownTypeMode, ValidationOptions};

mod cli;
mod summary;

use crate::cli::{Cli, LogFormatArg, LogLevelArg};
use crate::summary::print_report;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(EXIT_FATAL);
    }
    let exit_code = match run_validate(&request_from_cli(&cli)) {
        Ok(report) => match print_report(&report, cli.format) {
            Ok(()) => exit_code(&report),
            Err(error) => {
                eprintln!("error: {error:#}");
                EXIT_FATAL
            }
        },
        Err(error) => {
            eprintln!("error: {error:#}");
            EXIT_FATAL
        }
    };
    std::process::exit(exit_code);
}

fn request_from_cli(cli: &Cli) -> ValidateRequest {
    let unknown_type = if cli.ignore_unknown_types {
        UnknownTypeMode::Ignore
    } else {
        UnknownTypeMode::Warn
    };
    let discovery = cli
        .exclude_dirs
        .iter()
        .fold(DiscoveryOptions::default().with_extension(&cli.extension), |options, name| {
            options.with_excluded_dir(name)
        });
    ValidateRequest::new(&cli.metafile_loc)
        .with_discovery(discovery)
        .with_options(
            ValidationOptions::new()
                .with_advisories(cli.advisories)
                .with_unknown_type(unknown_type),
        )
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig::default()
        .with_level_filter(level_filter)
        .with_env_filter(!(cli.verbosity.is_present() || cli.log_level.is_some()))
        .with_format(format)
        .with_ansi(with_ansi)
        // Log files are read after the fact.
        .with_timestamps(cli.log_file.is_some())
        .with_log_file(cli.log_file.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("ccpp-meta-validate").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn exclude_dirs_reach_discovery() {
        let cli = parse(&["-m", "physics", "--exclude-dir", "build", "--exclude-dir", "old"]);
        let request = request_from_cli(&cli);
        assert_eq!(request.discovery.excluded_dirs, vec![".git", "build", "old"]);
        assert_eq!(request.discovery.extension, ".meta");
        assert_eq!(request.options.unknown_type, UnknownTypeMode::Warn);
    }

    #[test]
    fn explicit_log_level_disables_env_filter() {
        let cli = parse(&[
            "-m",
            "physics",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "--log-file",
            "run.log",
            "--color",
            "never",
        ]);
        let config = log_config_from_cli(&cli);
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(!config.use_env_filter);
        assert_eq!(config.format, LogFormat::Json);
        assert!(!config.with_ansi);
        assert!(config.with_timestamps);
        assert_eq!(config.log_file, Some(std::path::PathBuf::from("run.log")));
    }

    #[test]
    fn default_logging_follows_rust_log() {
        let config = log_config_from_cli(&parse(&["-m", "physics"]));
        assert!(config.use_env_filter);
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(!config.with_timestamps);
        assert_eq!(config.log_file, None);
    }
}
