//! Graph command: draw the association tree of a seed character.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use hotword_core::config::Config;
use hotword_core::{GraphOptions, build_association_graph, seed_char};
use owo_colors::OwoColorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `graph` subcommand.
#[derive(Args, Debug)]
pub struct GraphArgs {
    /// Text file, or URL with --webpage.
    pub source: String,

    /// Root character of the graph (first character is used).
    #[arg(long)]
    pub seed: Option<String>,

    #[command(flatten)]
    pub web: super::WebArgs,

    /// Scope length in characters.
    #[arg(long, value_name = "D")]
    pub depth: Option<usize>,

    /// Output file name without extension (defaults to the seed).
    #[arg(long, value_name = "NAME")]
    pub output: Option<String>,

    /// Draw nodes without character labels.
    #[arg(long)]
    pub hide_labels: bool,

    /// Draw character labels even when config hides them.
    #[arg(long, conflicts_with = "hide_labels")]
    pub show_labels: bool,

    /// Seed for the layout's random fan direction.
    #[arg(long, value_name = "N")]
    pub layout_seed: Option<u64>,

    /// Spline samples per segment.
    #[arg(long, value_name = "N")]
    pub density: Option<usize>,
}

#[derive(Serialize)]
struct GraphSummary {
    seed: char,
    output: Utf8PathBuf,
    bytes: usize,
}

/// Build the graph of `args.source` and write it as `<name>.svg`.
#[instrument(name = "cmd_graph", skip_all, fields(source = %args.source))]
pub fn cmd_graph(args: GraphArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(seed = ?args.seed, webpage = args.web.webpage, depth = ?args.depth, "executing graph command");

    let seed = seed_char(
        args.seed
            .as_deref()
            .or(config.seed.as_deref())
            .unwrap_or_default(),
    )?;
    let options = GraphOptions {
        depth: args.depth.unwrap_or(config.search_depth),
        seed,
        filter: config.char_filter(),
        density: args.density.unwrap_or(config.interpolate_density),
        hide_labels: hide_labels(&args, config),
    };

    let source = args.web.text_source(&args.source);
    let text = super::read_source(&source, &args.web.source_options(config))?;

    let mut rng = match args.layout_seed.or(config.layout_seed) {
        Some(n) => StdRng::seed_from_u64(n),
        None => StdRng::from_entropy(),
    };
    let svg = build_association_graph(&text, &options, &mut rng)
        .with_context(|| format!("failed to build graph of {}", source.label()))?;

    let output = output_path(args.output.as_deref().or(config.output_name.as_deref()), seed);
    std::fs::write(output.as_std_path(), &svg)
        .with_context(|| format!("failed to write {output}"))?;

    let summary = GraphSummary {
        seed,
        output,
        bytes: svg.len(),
    };
    if global_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{} {}", "Wrote".green(), summary.output);
    }

    Ok(())
}

/// Flags win over config; without either flag the config decides.
fn hide_labels(args: &GraphArgs, config: &Config) -> bool {
    if args.show_labels {
        false
    } else {
        args.hide_labels || config.hide_labels
    }
}

fn output_path(name: Option<&str>, seed: char) -> Utf8PathBuf {
    let name = name.map_or_else(|| seed.to_string(), str::to_string);
    Utf8PathBuf::from(format!("{name}.svg"))
}
