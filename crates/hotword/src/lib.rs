//! Library interface for the `hotword` CLI.
//!
//! This crate exposes the CLI's argument parser and command structure as a library,
//! primarily for documentation generation and testing. The actual entry point is
//! in `main.rs`.
//!
//! # Structure
//!
//! - [`Cli`] - The root argument parser (clap derive)
//! - [`Commands`] - Available subcommands
//! - [`commands`] - Command implementations

pub mod commands;

use clap::{CommandFactory, Parser, Subcommand};
use hotword_core::LogLevel;
use std::path::PathBuf;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Configure global color output based on this choice.
    ///
    /// Call this once at startup to set the color mode.
    pub fn apply(self) {
        match self {
            Self::Auto => {} // owo-colors auto-detects by default
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG               Log filter (e.g., debug, hotword_core=trace)
    HOTWORD_LOG_PATH       Explicit log file path
    HOTWORD_LOG_DIR        Log directory
    HOTWORD_SEARCH_DEPTH   Scope length used for mining (any config key works)
";
/// Command-line interface definition for hotword.
#[derive(Parser)]
#[command(name = "hotword")]
#[command(about = "Hot word mining and word-association graphs for Chinese text", long_about = None)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print only the version number (for scripting)
    #[arg(long)]
    pub version_only: bool,

    /// Path to configuration file (overrides discovery)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Base log level (overrides config; RUST_LOG still wins)
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands for the CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Print the hot words of a text
    Mine(commands::mine::MineArgs),

    /// Draw the word-association graph of a seed character as SVG
    Graph(commands::graph::GraphArgs),

    /// Show package information
    Info(commands::info::InfoArgs),
}

/// Returns the clap command for documentation generation
pub fn command() -> clap::Command {
    Cli::command()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        command().debug_assert();
    }

    #[test]
    fn parses_mine_flags() {
        let cli = Cli::try_parse_from([
            "hotword", "mine", "poem.txt", "--max-num", "5", "--depth", "4", "--debug",
        ])
        .unwrap();
        let Some(Commands::Mine(args)) = cli.command else {
            panic!("expected mine command");
        };
        assert_eq!(args.source, "poem.txt");
        assert_eq!(args.max_num, Some(5));
        assert_eq!(args.depth, Some(4));
        assert!(args.debug);
        assert!(!args.web.webpage);
    }

    #[test]
    fn parses_global_log_level() {
        let cli = Cli::try_parse_from(["hotword", "--log-level", "warn", "info"]).unwrap();
        assert_eq!(cli.log_level, Some(LogLevel::Warn));
    }
}
