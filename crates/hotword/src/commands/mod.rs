//! Command implementations.

use std::time::Duration;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use hotword_core::config::Config;
use hotword_core::{SourceOptions, TextSource};
use indicatif::{ProgressBar, ProgressStyle};

pub mod graph;
pub mod info;
pub mod mine;

/// Web page flags shared by `mine` and `graph`.
#[derive(Args, Debug, Default)]
pub struct WebArgs {
    /// Treat SOURCE as a web page URL.
    #[arg(long)]
    pub webpage: bool,

    /// Page cache database (overrides config).
    #[arg(long, value_name = "FILE")]
    pub cache_path: Option<Utf8PathBuf>,

    /// Download the page even when it is cached.
    #[arg(long)]
    pub no_cache: bool,

    /// Pause before downloading, in milliseconds (overrides config).
    #[arg(long, value_name = "MS")]
    pub fetch_delay_ms: Option<u64>,
}

impl WebArgs {
    /// The source named by `arg`.
    pub fn text_source(&self, arg: &str) -> TextSource {
        TextSource::from_arg(arg, self.webpage)
    }

    /// Source settings from `config` with these flags applied.
    pub fn source_options(&self, config: &Config) -> SourceOptions {
        let mut options = config.source_options();
        if let Some(ref path) = self.cache_path {
            options.cache_path = Some(path.clone());
        }
        options.no_cache |= self.no_cache;
        if let Some(ms) = self.fetch_delay_ms {
            options.fetch_delay = Duration::from_millis(ms);
        }
        options
    }
}

/// Read the text behind `source`, with a spinner on stderr while a page downloads.
pub fn read_source(source: &TextSource, options: &SourceOptions) -> anyhow::Result<String> {
    let spinner = match source {
        TextSource::Webpage(url) => Some(fetch_spinner(url)),
        TextSource::File(_) => None,
    };
    let text = source.read(options);
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    text.with_context(|| format!("failed to read {}", source.label()))
}

fn fetch_spinner(url: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("fetching {url}"));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
