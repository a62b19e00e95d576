//! Mine command: print the hot words of a text.

use anyhow::Context;
use clap::Args;
use hotword_core::config::Config;
use hotword_core::{HotwordReport, MiningOptions, StageTimer, mine_hotwords};
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

/// Arguments for the `mine` subcommand.
#[derive(Args, Debug)]
pub struct MineArgs {
    /// Text file, or URL with --webpage.
    pub source: String,

    #[command(flatten)]
    pub web: super::WebArgs,

    /// Print at most N words (0 = all).
    #[arg(long, value_name = "N")]
    pub max_num: Option<usize>,

    /// Scope length in characters.
    #[arg(long, value_name = "D")]
    pub depth: Option<usize>,

    /// Log the elapsed time of each mining stage.
    #[arg(long)]
    pub debug: bool,
}

/// Mine `args.source` and print one `<word> <frequency>` line per hot word.
#[instrument(name = "cmd_mine", skip_all, fields(source = %args.source))]
pub fn cmd_mine(args: MineArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(webpage = args.web.webpage, max_num = ?args.max_num, depth = ?args.depth, "executing mine command");

    let source = args.web.text_source(&args.source);
    let text = super::read_source(&source, &args.web.source_options(config))?;

    let options = MiningOptions {
        depth: args.depth.unwrap_or(config.search_depth),
        top_k: args.max_num.unwrap_or(config.max_results),
        filter: config.char_filter(),
    };
    let mut timer = StageTimer::new(args.debug);
    let report = mine_hotwords(&text, &options, &mut timer)
        .with_context(|| format!("failed to mine {}", source.label()))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_lines(&report));
        if report.words.is_empty() {
            eprintln!("{}", "no hot words found".dimmed());
        }
    }

    Ok(())
}

fn render_lines(report: &HotwordReport) -> String {
    report
        .words
        .iter()
        .map(|word| format!("{} {}\n", word.text, word.frequency))
        .collect()
}
