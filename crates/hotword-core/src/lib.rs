//! Core library for hotword.
//!
//! Mines hot words (repeated multi-character strings) from Chinese text and
//! draws word-association graphs around a seed character.
//!
//! # Modules
//!
//! - [`mine`] - Hot-word mining pipeline
//! - [`graph`] - Association tree, radial layout and SVG rendering
//! - [`source`] - Reading text from files and web pages
//! - [`cache`] - SQLite cache of fetched pages
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```no_run
//! use hotword_core::{MiningOptions, StageTimer, mine_hotwords};
//!
//! let text = "你好，你好，你好，你好，你好，";
//! let options = MiningOptions { depth: 4, ..MiningOptions::default() };
//! let report = mine_hotwords(text, &options, &mut StageTimer::disabled())
//!     .expect("depth is positive");
//!
//! for word in &report.words {
//!     println!("{} {}", word.text, word.frequency);
//! }
//! ```
#![deny(unsafe_code)]

pub mod cache;
pub mod charset;
pub mod config;
pub mod error;
pub mod expand;
pub mod graph;
pub mod layout;
pub mod mine;
pub mod rank;
pub mod scope;
pub mod source;
pub mod strip;
pub mod svg;
pub mod timing;
pub mod tree;

pub use cache::PageCache;
pub use charset::CharFilter;
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{
    ConfigError, ConfigResult, MiningError, MiningResult, SourceError, SourceResult,
};
pub use expand::Candidate;
pub use graph::{GraphOptions, build_association_graph, seed_char};
pub use mine::{HotwordReport, MiningOptions, mine_hotwords};
pub use source::{DEFAULT_MAX_INPUT_BYTES, SourceOptions, TextSource};
pub use timing::StageTimer;
