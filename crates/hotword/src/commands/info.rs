//! Info command implementation

use clap::Args;
use hotword_core::config::{Config, ConfigSources};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    search_depth: usize,
    max_results: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<String>,
    interpolate_density: usize,
    hide_labels: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    layout_seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cache_path: Option<String>,
    no_cache: bool,
    fetch_delay_ms: u64,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            search_depth: config.search_depth,
            max_results: config.max_results,
            seed: config.seed.clone(),
            interpolate_density: config.interpolate_density,
            hide_labels: config.hide_labels,
            layout_seed: config.layout_seed,
            max_input_bytes: config.max_input(),
            cache_path: config.page_cache_path().map(|p| p.to_string()),
            no_cache: config.no_cache,
            fetch_delay_ms: config.fetch_delay_ms,
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information and the effective configuration.
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    let package = &full_info.package;
    println!("{} {}", package.name.bold(), package.version.green());
    if !package.description.is_empty() {
        println!("{}", package.description);
    }
    if !package.license.is_empty() {
        println!("{}: {}", "License".dimmed(), package.license);
    }
    if !package.repository.is_empty() {
        println!("{}: {}", "Repository".dimmed(), package.repository.cyan());
    }

    let info = &full_info.config;
    println!();
    println!("{}", "Configuration".bold().underline());
    if let Some(ref path) = info.config_file {
        println!("{}: {}", "Config file".dimmed(), path.cyan());
    } else {
        println!("{}: {}", "Config file".dimmed(), "none loaded".yellow());
    }
    println!("{}: {}", "Log level".dimmed(), info.log_level);
    if let Some(ref dir) = info.log_dir {
        println!("{}: {}", "Log directory".dimmed(), dir);
    }

    println!();
    println!("{}", "Mining".bold().underline());
    println!("{}: {}", "Search depth".dimmed(), info.search_depth);
    if info.max_results == 0 {
        println!("{}: {}", "Max results".dimmed(), "all".dimmed());
    } else {
        println!("{}: {}", "Max results".dimmed(), info.max_results);
    }
    print_opt("Input limit (bytes)", &info.max_input_bytes);

    println!();
    println!("{}", "Graph".bold().underline());
    print_opt("Seed", &info.seed);
    print_opt("Layout seed", &info.layout_seed);
    println!("{}: {}", "Spline density".dimmed(), info.interpolate_density);
    println!("{}: {}", "Hide labels".dimmed(), info.hide_labels);

    println!();
    println!("{}", "Web pages".bold().underline());
    print_opt("Page cache", &info.cache_path);
    println!("{}: {}", "Always download".dimmed(), info.no_cache);
    println!("{}: {}", "Fetch delay (ms)".dimmed(), info.fetch_delay_ms);

    Ok(())
}

/// Print an optional value or "(not set)".
fn print_opt<T: std::fmt::Display>(label: &str, value: &Option<T>) {
    match value {
        Some(v) => println!("{}: {}", label.dimmed(), v),
        None => println!("{}: {}", label.dimmed(), "(not set)".dimmed()),
    }
}
