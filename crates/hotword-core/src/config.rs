//! Configuration loading and discovery.
//!
//! This module provides configuration file discovery by:
//! 1. Walking up from the current directory to find project config
//! 2. Loading user config from XDG config directory
//! 3. Merging with sensible defaults
//!
//! # Supported formats
//!
//! The following configuration file formats are supported:
//! - TOML (`.toml`)
//! - YAML (`.yaml`, `.yml`)
//! - JSON (`.json`)
//!
//! # Config file locations (in order of precedence, highest first):
//! - `hotword.<ext>` in current directory or any parent
//! - `.hotword.<ext>` in current directory or any parent
//! - `~/.config/hotword/config.<ext>` (user config)
//!
//! Where `<ext>` is one of: `toml`, `yaml`, `yml`, `json`
//!
//! When multiple files exist in the same directory, all are merged via figment.
//! Later extensions override earlier: toml < yaml < yml < json.
//!
//! `HOTWORD_*` environment variables override every file.
//!
//! # Example
//! ```no_run
//! use camino::Utf8PathBuf;
//! use hotword_core::config::{Config, ConfigLoader};
//!
//! let cwd = std::env::current_dir().unwrap();
//! let cwd = Utf8PathBuf::try_from(cwd).expect("current directory is not valid UTF-8");
//! let (config, _sources) = ConfigLoader::new()
//!     .with_project_search(&cwd)
//!     .load()
//!     .unwrap();
//! println!("search depth: {}", config.search_depth);
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use std::time::Duration;

use crate::cache::PAGE_CACHE_FILE;
use crate::charset::CharFilter;
use crate::error::{ConfigError, ConfigResult};
use crate::graph::DEFAULT_INTERPOLATE_DENSITY;
use crate::mine::DEFAULT_SEARCH_DEPTH;
use crate::source::{
    DEFAULT_FETCH_DELAY_MS, DEFAULT_MAX_INPUT_BYTES, DEFAULT_USER_AGENT, SourceOptions,
};

/// The configuration for hotword.
///
/// Deserialized from config files found during discovery (TOML, YAML, or
/// JSON). Command-line flags override these values.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for JSONL log files (falls back to platform defaults if unset).
    pub log_dir: Option<Utf8PathBuf>,
    /// Scope length in code points used by `mine` and `graph`.
    pub search_depth: usize,
    /// Number of hot words printed by `mine` (0 = all).
    pub max_results: usize,
    /// Characters that never start or extend a hot word (replaces the default set).
    pub excludes: Option<String>,
    /// Characters never used as a mining root (replaces the default stop-list).
    pub stop_chars: Option<String>,
    /// Default seed character for `graph`.
    pub seed: Option<String>,
    /// Base name of the SVG written by `graph` (defaults to the seed).
    pub output_name: Option<String>,
    /// Leave character labels out of the graph.
    pub hide_labels: bool,
    /// Seed for the layout's random fan direction; unset means a fresh draw per run.
    pub layout_seed: Option<u64>,
    /// Spline samples per graph segment.
    pub interpolate_density: usize,
    /// User agent sent when fetching web pages.
    pub user_agent: Option<String>,
    /// Maximum input size in bytes (default: 5 MiB).
    ///
    /// Omit to use the default. Use `disable_input_limit` to remove the
    /// limit entirely.
    pub max_input_bytes: Option<usize>,
    /// Disable the input size limit entirely.
    ///
    /// When `true`, `max_input_bytes` is ignored and no size check is performed.
    /// Default: `false`.
    pub disable_input_limit: bool,
    /// Page cache database (defaults to `pages.sqlite` in the user cache directory).
    pub cache_path: Option<Utf8PathBuf>,
    /// Download pages even when cached; the fresh copy is still stored.
    pub no_cache: bool,
    /// Pause before every page download, in milliseconds.
    pub fetch_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            log_dir: None,
            search_depth: DEFAULT_SEARCH_DEPTH,
            max_results: 0,
            excludes: None,
            stop_chars: None,
            seed: None,
            output_name: None,
            hide_labels: false,
            layout_seed: None,
            interpolate_density: DEFAULT_INTERPOLATE_DENSITY,
            user_agent: None,
            max_input_bytes: None,
            disable_input_limit: false,
            cache_path: None,
            no_cache: false,
            fetch_delay_ms: DEFAULT_FETCH_DELAY_MS,
        }
    }
}

impl Config {
    /// Character rules built from `excludes` and `stop_chars`.
    pub fn char_filter(&self) -> CharFilter {
        CharFilter::from_overrides(self.excludes.as_deref(), self.stop_chars.as_deref())
    }

    /// Effective input limit, honoring `disable_input_limit`.
    pub fn max_input(&self) -> Option<usize> {
        if self.disable_input_limit {
            None
        } else {
            self.max_input_bytes.or(Some(DEFAULT_MAX_INPUT_BYTES))
        }
    }

    /// Settings for reading text sources.
    pub fn source_options(&self) -> SourceOptions {
        SourceOptions {
            max_input_bytes: self.max_input(),
            user_agent: self
                .user_agent
                .clone()
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            cache_path: self.page_cache_path(),
            no_cache: self.no_cache,
            fetch_delay: Duration::from_millis(self.fetch_delay_ms),
        }
    }

    /// Configured page cache, else the default one in the user cache directory.
    pub fn page_cache_path(&self) -> Option<Utf8PathBuf> {
        self.cache_path
            .clone()
            .or_else(|| user_cache_dir().map(|dir| dir.join(PAGE_CACHE_FILE)))
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Metadata about which configuration sources were loaded.
///
/// Returned alongside [`Config`] from [`ConfigLoader::load()`] so commands
/// can report the actual config files without re-discovering them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project config files found by walking up, ordered low→high precedence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// User config file from XDG config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Explicit config files loaded (e.g., from `--config` flag).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// Returns the highest-precedence config file that was loaded.
    ///
    /// Precedence: explicit files > project files > user file.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }
}

/// Supported configuration file extensions (in order of preference).
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Application name for XDG directory lookup and config file names.
const APP_NAME: &str = "hotword";

/// Prefix of environment variable overrides.
const ENV_PREFIX: &str = "HOTWORD_";

/// Builder for loading configuration from multiple sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Starting directory for project config search.
    project_search_root: Option<Utf8PathBuf>,
    /// Whether to include user config from XDG directory.
    include_user_config: bool,
    /// Stop searching when we hit a directory containing this file/dir.
    boundary_marker: Option<String>,
    /// Explicit config files to load (for testing or programmatic use).
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a new config loader with default settings.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Set the starting directory for project config search.
    ///
    /// The loader will walk up from this directory looking for config files.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set whether to include user config from `~/.config/hotword/`.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Set a boundary marker to stop directory traversal.
    ///
    /// When walking up directories, stop if we find a directory containing
    /// this file or directory name. Default is `.git`.
    pub fn with_boundary_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.boundary_marker = Some(marker.into());
        self
    }

    /// Disable boundary marker (search all the way to filesystem root).
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary_marker = None;
        self
    }

    /// Add an explicit config file to load.
    ///
    /// Files are loaded in order, with later files taking precedence.
    /// Explicit files are loaded after discovered files.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration, merging all discovered sources.
    ///
    /// Precedence (highest to lowest):
    /// 1. `HOTWORD_*` environment variables
    /// 2. Explicit files (in order added via `with_file`)
    /// 3. Project config (closest to search root)
    /// 4. User config (`~/.config/hotword/config.<ext>`)
    /// 5. Default values
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let mut sources = ConfigSources::default();

        if self.include_user_config
            && let Some(user_config) = self.find_user_config()
        {
            figment = Self::merge_file(figment, &user_config);
            sources.user_file = Some(user_config);
        }

        if let Some(ref root) = self.project_search_root {
            let project_configs = self.find_project_configs(root);
            for pc in &project_configs {
                figment = Self::merge_file(figment, pc);
            }
            sources.project_files = project_configs;
        }

        for file in &self.explicit_files {
            figment = Self::merge_file(figment, file);
        }
        sources.explicit_files = self.explicit_files;

        // HOTWORD_SEARCH_DEPTH=4, HOTWORD_LOG_LEVEL=debug, etc.
        figment = figment.merge(Env::prefixed(ENV_PREFIX).lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(
            log_level = config.log_level.as_str(),
            search_depth = config.search_depth,
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Find project config files by walking up from the given directory.
    ///
    /// Returns all matching config files from the closest directory that has
    /// any match, dotfiles before regular files (low→high precedence).
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        let mut current = Some(start.to_path_buf());

        while let Some(dir) = current {
            let mut found = Vec::new();

            for ext in CONFIG_EXTENSIONS {
                let dotfile = dir.join(format!(".{APP_NAME}.{ext}"));
                if dotfile.is_file() {
                    found.push(dotfile);
                }
            }
            for ext in CONFIG_EXTENSIONS {
                let regular = dir.join(format!("{APP_NAME}.{ext}"));
                if regular.is_file() {
                    found.push(regular);
                }
            }

            if !found.is_empty() {
                return found;
            }

            // Check for boundary marker AFTER checking config files,
            // so a config in the same directory as the marker is found.
            if let Some(ref marker) = self.boundary_marker
                && dir.join(marker).exists()
                && dir != start
            {
                break;
            }

            current = dir.parent().map(Utf8Path::to_path_buf);
        }

        Vec::new()
    }

    /// Find user config in XDG config directory.
    fn find_user_config(&self) -> Option<Utf8PathBuf> {
        let config_dir = user_config_dir()?;
        CONFIG_EXTENSIONS
            .iter()
            .map(|ext| config_dir.join(format!("config.{ext}")))
            .find(|path| path.is_file())
    }

    /// Merge a config file into the figment, detecting format from extension.
    fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
        match path.extension() {
            Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
            Some("json") => figment.merge(Json::file_exact(path.as_str())),
            _ => figment.merge(Toml::file_exact(path.as_str())),
        }
    }
}

/// Get the project directories for XDG-compliant path resolution.
///
/// Returns `None` if the home directory cannot be determined.
fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", APP_NAME)
}

/// Get the user config directory path.
///
/// Returns `~/.config/hotword/` on Linux, `~/Library/Application Support/hotword/`
/// on macOS, and equivalent on other platforms.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = project_dirs()?;
    Utf8PathBuf::from_path_buf(proj_dirs.config_dir().to_path_buf()).ok()
}

/// Get the user cache directory path.
///
/// Default home of the page cache.
pub fn user_cache_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = project_dirs()?;
    Utf8PathBuf::from_path_buf(proj_dirs.cache_dir().to_path_buf()).ok()
}

/// Get the local data directory path (machine-specific, not synced).
///
/// Default home of the JSONL log files.
pub fn user_data_local_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = project_dirs()?;
    Utf8PathBuf::from_path_buf(proj_dirs.data_local_dir().to_path_buf()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;

    /// Serializes tests that mutate environment variables via `set_var`/`remove_var`.
    ///
    /// `load()` merges `HOTWORD_*` last, so every test that loads must hold it too.
    static TEST_ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn env_lock() -> MutexGuard<'static, ()> {
        TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn load_file(contents: &str, name: &str) -> Config {
        let _lock = env_lock();
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(name);
        fs::write(&config_path, contents).unwrap();
        let config_path = Utf8PathBuf::try_from(config_path).unwrap();

        let (config, _sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&config_path)
            .load()
            .unwrap();
        config
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.log_dir.is_none());
        assert_eq!(config.search_depth, 10);
        assert_eq!(config.max_results, 0);
        assert_eq!(config.interpolate_density, 10);
        assert!(!config.hide_labels);
    }

    #[test]
    fn test_loader_builds_with_defaults() {
        let _lock = env_lock();
        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .load()
            .unwrap();
        assert_eq!(config, Config::default());
        assert!(sources.primary_file().is_none());
    }

    #[test]
    fn test_single_file_overrides_default() {
        let config = load_file(
            "log_level = \"debug\"\nlog_dir = \"/tmp/hotword\"\nsearch_depth = 6\n",
            "config.toml",
        );
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(
            config.log_dir.as_ref().map(|dir| dir.as_str()),
            Some("/tmp/hotword")
        );
        assert_eq!(config.search_depth, 6);
    }

    #[test]
    fn test_yaml_and_json_formats() {
        let yaml = load_file("max_results: 20\nseed: 春\nhide_labels: true\n", "c.yaml");
        assert_eq!(yaml.max_results, 20);
        assert_eq!(yaml.seed.as_deref(), Some("春"));
        assert!(yaml.hide_labels);

        let json = load_file(r#"{"layout_seed": 42, "output_name": "spring"}"#, "c.json");
        assert_eq!(json.layout_seed, Some(42));
        assert_eq!(json.output_name.as_deref(), Some("spring"));
    }

    #[test]
    fn test_later_file_overrides_earlier() {
        let _lock = env_lock();
        let tmp = TempDir::new().unwrap();

        let base_config = tmp.path().join("base.toml");
        fs::write(&base_config, "search_depth = 4").unwrap();

        let override_config = tmp.path().join("override.toml");
        fs::write(&override_config, "search_depth = 8").unwrap();

        let base_config = Utf8PathBuf::try_from(base_config).unwrap();
        let override_config = Utf8PathBuf::try_from(override_config).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&base_config)
            .with_file(&override_config)
            .load()
            .unwrap();

        assert_eq!(config.search_depth, 8);
        assert_eq!(sources.primary_file(), Some(override_config.as_path()));
    }

    #[test]
    fn test_project_config_discovery() {
        let _lock = env_lock();
        let tmp = TempDir::new().unwrap();
        let project_dir = tmp.path().join("project");
        let sub_dir = project_dir.join("texts").join("poems");
        fs::create_dir_all(&sub_dir).unwrap();

        fs::write(project_dir.join(".hotword.toml"), r#"log_level = "debug""#).unwrap();

        let sub_dir = Utf8PathBuf::try_from(sub_dir).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&sub_dir)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(sources.project_files.len(), 1);
    }

    #[test]
    fn test_boundary_marker_stops_search() {
        let _lock = env_lock();
        let tmp = TempDir::new().unwrap();

        // /parent/.hotword.toml, /parent/child/.git/, /parent/child/work/
        let parent = tmp.path().join("parent");
        let child = parent.join("child");
        let work = child.join("work");
        fs::create_dir_all(&work).unwrap();

        fs::write(parent.join(".hotword.toml"), r#"log_level = "warn""#).unwrap();
        fs::create_dir(child.join(".git")).unwrap();

        let work = Utf8PathBuf::try_from(work).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_boundary_marker(".git")
            .with_project_search(&work)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Info);
        assert!(sources.project_files.is_empty());
    }

    #[test]
    fn dotfile_before_regular_file() {
        let _lock = env_lock();
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".hotword.toml"), "search_depth = 3\nhide_labels = true\n")
            .unwrap();
        fs::write(tmp.path().join("hotword.toml"), "search_depth = 5\n").unwrap();

        let tmp_path = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&tmp_path)
            .load()
            .unwrap();

        // Regular file wins, dotfile values it doesn't set survive.
        assert_eq!(config.search_depth, 5);
        assert!(config.hide_labels);
        assert_eq!(sources.project_files.len(), 2);
    }

    #[test]
    fn invalid_value_is_a_deserialize_error() {
        let _lock = env_lock();
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        fs::write(&config_path, "search_depth = -3\n").unwrap();
        let config_path = Utf8PathBuf::try_from(config_path).unwrap();

        let result = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&config_path)
            .load();
        assert!(matches!(result, Err(ConfigError::Deserialize(_))));
    }

    #[test]
    fn input_limit_resolution() {
        let mut config = Config::default();
        assert_eq!(config.max_input(), Some(DEFAULT_MAX_INPUT_BYTES));
        config.max_input_bytes = Some(1024);
        assert_eq!(config.max_input(), Some(1024));
        config.disable_input_limit = true;
        assert_eq!(config.max_input(), None);
        assert_eq!(config.source_options().max_input_bytes, None);
    }

    #[test]
    fn char_filter_uses_overrides() {
        let config = load_file("excludes = \"春\"\nstop_chars = \"\"\n", "config.toml");
        let filter = config.char_filter();
        assert!(!filter.qualifies('春'));
        assert!(filter.qualifies('，'));
        assert!(!filter.is_stop_char('了'));
    }

    #[test]
    fn user_agent_defaults_when_unset() {
        let options = Config::default().source_options();
        assert_eq!(options.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn deserializes_from_yaml_str() {
        let config: Config = serde_yaml::from_str("search_depth: 7\nexcludes: '，。'\n").unwrap();
        assert_eq!(config.search_depth, 7);
        assert_eq!(config.excludes.as_deref(), Some("，。"));
        assert_eq!(config.max_results, 0);
    }

    #[test]
    #[allow(unsafe_code)]
    fn test_env_var_overrides_file_config() {
        let _lock = env_lock();

        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        fs::write(&config_path, "search_depth = 4\n").unwrap();
        let config_path = Utf8PathBuf::try_from(config_path).unwrap();

        // SAFETY: Test environment; the mutex serializes env access across tests.
        unsafe {
            std::env::set_var("HOTWORD_SEARCH_DEPTH", "12");
        }

        let (config, _sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&config_path)
            .load()
            .unwrap();

        // SAFETY: Cleanup after test.
        unsafe {
            std::env::remove_var("HOTWORD_SEARCH_DEPTH");
        }

        assert_eq!(config.search_depth, 12);
    }

    #[test]
    #[allow(unsafe_code)]
    fn locked_load_never_sees_env_set_by_another_thread() {
        let (set_tx, set_rx) = std::sync::mpsc::channel();
        let setter = std::thread::spawn(move || {
            let _lock = env_lock();
            // SAFETY: the lock is held until the variable is removed again.
            unsafe {
                std::env::set_var("HOTWORD_SEARCH_DEPTH", "12");
            }
            set_tx.send(()).unwrap();
            std::thread::sleep(Duration::from_millis(50));
            // SAFETY: still under the lock.
            unsafe {
                std::env::remove_var("HOTWORD_SEARCH_DEPTH");
            }
        });

        set_rx.recv().unwrap();
        let config = load_file("search_depth = 6\n", "config.toml");
        setter.join().unwrap();

        assert_eq!(config.search_depth, 6);
    }

    #[test]
    fn page_cache_settings() {
        let config = load_file(
            "cache_path = \"/tmp/hotword/pages.sqlite\"\nno_cache = true\nfetch_delay_ms = 0\n",
            "config.toml",
        );
        let options = config.source_options();
        assert_eq!(
            options.cache_path.as_ref().map(|p| p.as_str()),
            Some("/tmp/hotword/pages.sqlite")
        );
        assert!(options.no_cache);
        assert!(options.fetch_delay.is_zero());
    }

    #[test]
    fn default_fetch_delay_and_cache_location() {
        let config = Config::default();
        assert_eq!(config.source_options().fetch_delay, Duration::from_millis(500));
        if let Some(path) = config.page_cache_path() {
            assert!(path.as_str().ends_with(PAGE_CACHE_FILE));
        }
    }

    #[test]
    fn test_user_config_dir() {
        if let Some(path) = user_config_dir() {
            assert!(path.as_str().contains("hotword"));
        }
    }
}
