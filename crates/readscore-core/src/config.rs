//! Configuration loading and discovery.
//!
//! Settings are merged in layers, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. user config: `config.<ext>` in the platform config dir (`~/.config/readscore/` on Linux)
//! 3. project config: `.readscore.<ext>` then `readscore.<ext>` in the nearest
//!    directory (walking up, stopping at `.git`) that has any
//! 4. explicit files (`--config`), in the order given
//! 5. `READSCORE_*` environment variables
//!
//! `<ext>` is `toml`, `yaml`, `yml` or `json`; several files in one directory
//! are all merged, in that extension order.
//!
//! ```no_run
//! use camino::Utf8PathBuf;
//! use readscore_core::config::ConfigLoader;
//!
//! let cwd = Utf8PathBuf::try_from(std::env::current_dir().unwrap()).unwrap();
//! let (config, sources) = ConfigLoader::new().with_project_search(&cwd).load().unwrap();
//! println!("{:?} from {:?}", config.metrics, sources.primary_file());
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::metrics::Metric;

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

/// The configuration for readscore.
///
/// Deserialized from config files found during discovery (TOML, YAML, or JSON)
/// and `READSCORE_*` environment variables.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for log files. File logging is off when unset.
    pub log_dir: Option<Utf8PathBuf>,
    /// Metrics reported by `score` when none are given on the command line.
    /// Omit for all metrics.
    pub metrics: Option<Vec<Metric>>,
    /// Default maximum Flesch-Kincaid grade level for the `score` command.
    pub max_grade: Option<f64>,
    /// Decimal places in text output (default: 2).
    pub precision: Option<usize>,
    /// Maximum input size in bytes (default: 5 MiB).
    ///
    /// Omit to use the default. Use `disable_input_limit` to remove the limit
    /// entirely.
    pub max_input_bytes: Option<usize>,
    /// Disable the input size limit entirely.
    ///
    /// When `true`, `max_input_bytes` is ignored and no size check is performed.
    pub disable_input_limit: bool,
}

impl Config {
    /// The effective input size limit, or `None` when disabled.
    pub fn input_limit(&self) -> Option<usize> {
        if self.disable_input_limit {
            None
        } else {
            Some(self.max_input_bytes.unwrap_or(DEFAULT_MAX_INPUT_BYTES))
        }
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information.
    Info,
    /// Warnings about potential issues (default).
    #[default]
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

/// Config file extensions, in merge order.
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Application name for the user config dir and project file names.
const APP_NAME: &str = "readscore";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "READSCORE_";

/// The config files a load merged, by layer.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// User config file, if one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Project config files from the nearest directory that has any.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// Files passed explicitly (`--config`).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// All files in merge order (lowest precedence first).
    pub fn files(&self) -> impl Iterator<Item = &Utf8Path> {
        self.user_file
            .iter()
            .chain(&self.project_files)
            .chain(&self.explicit_files)
            .map(Utf8PathBuf::as_path)
    }

    /// The file with the highest precedence, if any file was merged.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.files().last()
    }

    /// Whether no config file was found.
    pub fn is_empty(&self) -> bool {
        self.files().next().is_none()
    }
}

/// Builder for loading configuration from multiple sources.
#[derive(Debug)]
pub struct ConfigLoader {
    project_search_root: Option<Utf8PathBuf>,
    include_user_config: bool,
    boundary_marker: Option<String>,
    explicit_files: Vec<Utf8PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// A loader that reads user config and stops project search at `.git`.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Search for project config starting at `path` and walking up.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Include or skip the user config file.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Stop the upward search at a directory containing `marker`.
    ///
    /// Config in the marker's own directory is still found.
    pub fn with_boundary_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.boundary_marker = Some(marker.into());
        self
    }

    /// Search all the way to the filesystem root.
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary_marker = None;
        self
    }

    /// Merge `path` above discovered config. Later files win.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Find every config file this loader would merge, without reading them.
    pub fn discover(&self) -> ConfigSources {
        ConfigSources {
            user_file: if self.include_user_config {
                user_config_file()
            } else {
                None
            },
            project_files: self
                .project_search_root
                .as_deref()
                .map(|root| self.nearest_project_files(root))
                .unwrap_or_default(),
            explicit_files: self.explicit_files.clone(),
        }
    }

    /// Load configuration from defaults, discovered files and the environment.
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        let sources = self.discover();
        let config = extract(&sources)?;
        tracing::debug!(
            files = sources.files().count(),
            primary = ?sources.primary_file(),
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Like [`load`](Self::load), but fails with [`ConfigError::NotFound`]
    /// when no config file exists anywhere.
    pub fn load_or_error(self) -> ConfigResult<(Config, ConfigSources)> {
        let sources = self.discover();
        if sources.is_empty() {
            return Err(ConfigError::NotFound);
        }
        Ok((extract(&sources)?, sources))
    }

    fn nearest_project_files(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        for dir in start.ancestors() {
            let found = project_files_in(dir);
            if !found.is_empty() {
                return found;
            }
            let at_boundary = self
                .boundary_marker
                .as_ref()
                .is_some_and(|marker| dir != start && dir.join(marker).exists());
            if at_boundary {
                break;
            }
        }
        Vec::new()
    }
}

/// `.readscore.<ext>` files, then `readscore.<ext>` files, that exist in `dir`.
fn project_files_in(dir: &Utf8Path) -> Vec<Utf8PathBuf> {
    [".", ""]
        .iter()
        .flat_map(|prefix| {
            CONFIG_EXTENSIONS
                .iter()
                .map(move |ext| dir.join(format!("{prefix}{APP_NAME}.{ext}")))
        })
        .filter(|path| path.is_file())
        .collect()
}

fn extract(sources: &ConfigSources) -> ConfigResult<Config> {
    sources
        .files()
        .fold(
            Figment::new().merge(Serialized::defaults(Config::default())),
            |figment, file| match file.extension() {
                Some("yaml" | "yml") => figment.merge(Yaml::file_exact(file.as_str())),
                Some("json") => figment.merge(Json::file_exact(file.as_str())),
                _ => figment.merge(Toml::file_exact(file.as_str())),
            },
        )
        .merge(Env::prefixed(ENV_PREFIX).lowercase(true))
        .extract()
        .map_err(|e| ConfigError::Deserialize(Box::new(e)))
}

fn user_config_file() -> Option<Utf8PathBuf> {
    let dir = user_config_dir()?;
    CONFIG_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("config.{ext}")))
        .find(|path| path.is_file())
}

/// The platform config directory for readscore, if it can be determined.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    Utf8PathBuf::from_path_buf(dirs.config_dir().to_path_buf()).ok()
}
