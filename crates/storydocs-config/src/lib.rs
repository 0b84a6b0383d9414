//! Configuration management for storydocs.
//!
//! Parses `storydocs.toml` with serde and discovers it in the current
//! directory or its parents. CLI settings are applied during load via
//! [`CliSettings`].
//!
//! ```toml
//! [manifest]
//! path = "stories.yaml"
//!
//! [output]
//! dir = "dist/docs"
//! format = "html"
//! preview_url = "https://storybook.example.com/iframe.html"
//!
//! [hierarchy]
//! root_separator = "|"
//! separator = "/"
//! ```
//!
//! ## Environment Variable Expansion
//!
//! `manifest.path`, `output.dir` and `output.preview_url` support `${VAR}`
//! and `${VAR:-default}`.

mod expand;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "storydocs.toml";

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override manifest path.
    pub manifest: Option<PathBuf>,
    /// Override output directory.
    pub output_dir: Option<PathBuf>,
    /// Override output format.
    pub format: Option<OutputFormat>,
}

/// Rendered page format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// HTML document per page.
    #[default]
    Html,
    /// JSON page description per page.
    Json,
}

impl OutputFormat {
    /// File extension for pages in this format.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    manifest: ManifestConfigRaw,
    output: OutputConfigRaw,
    /// Component path display defaults.
    pub hierarchy: HierarchyConfig,

    /// Resolved manifest location (set after loading).
    #[serde(skip)]
    pub manifest_path: PathBuf,
    /// Resolved output settings (set after loading).
    #[serde(skip)]
    pub output_resolved: OutputConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ManifestConfigRaw {
    path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OutputConfigRaw {
    dir: Option<String>,
    format: Option<OutputFormat>,
    preview_url: Option<String>,
}

/// Resolved output configuration with an absolute directory.
#[derive(Debug, Default)]
pub struct OutputConfig {
    /// Directory pages are written to.
    pub dir: PathBuf,
    /// Page format.
    pub format: OutputFormat,
    /// URL example previews are embedded from.
    pub preview_url: Option<String>,
}

/// Defaults for how component paths are split into titles.
///
/// Applied as global `options` parameters, below anything the manifest sets.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct HierarchyConfig {
    /// Explicit root grouping.
    pub show_roots: Option<bool>,
    /// Root separator.
    pub root_separator: Option<String>,
    /// Literal group separator.
    pub separator: Option<String>,
    /// Regular expression group separator.
    pub separator_pattern: Option<String>,
}

impl HierarchyConfig {
    /// Whether any hierarchy option is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.show_roots.is_none()
            && self.root_separator.is_none()
            && self.separator.is_none()
            && self.separator_pattern.is_none()
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`manifest.path`").
        field: String,
        /// Error message (e.g., "${`STORIES`} not set").
        message: String,
    },
}

/// Require an optional string field to be non-empty when set.
fn require_non_empty(value: Option<&str>, field: &str) -> Result<(), ConfigError> {
    if value.is_some_and(str::is_empty) {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `storydocs.toml` in the current directory and its parents, falling
    /// back to defaults relative to the current directory.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(manifest) = &settings.manifest {
            self.manifest_path.clone_from(manifest);
        }
        if let Some(dir) = &settings.output_dir {
            self.output_resolved.dir.clone_from(dir);
        }
        if let Some(format) = settings.format {
            self.output_resolved.format = format;
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(self.manifest.path.as_deref(), "manifest.path")?;
        require_non_empty(self.output.dir.as_deref(), "output.dir")?;
        require_non_empty(self.output.preview_url.as_deref(), "output.preview_url")?;
        require_non_empty(
            self.hierarchy.root_separator.as_deref(),
            "hierarchy.root_separator",
        )?;
        require_non_empty(self.hierarchy.separator.as_deref(), "hierarchy.separator")?;
        require_non_empty(
            self.hierarchy.separator_pattern.as_deref(),
            "hierarchy.separator_pattern",
        )?;

        if self.hierarchy.separator.is_some() && self.hierarchy.separator_pattern.is_some() {
            return Err(ConfigError::Validation(
                "hierarchy.separator and hierarchy.separator_pattern are mutually exclusive"
                    .to_owned(),
            ));
        }

        Ok(())
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        let mut config = Self::default();
        config.resolve_paths(base);
        config
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.validate()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        expand::expand_fields(&mut [
            ("manifest.path", &mut self.manifest.path),
            ("output.dir", &mut self.output.dir),
            ("output.preview_url", &mut self.output.preview_url),
        ])
    }

    /// Resolve relative paths against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.manifest_path = resolve(self.manifest.path.as_deref(), "stories.yaml");
        self.output_resolved = OutputConfig {
            dir: resolve(self.output.dir.as_deref(), "dist"),
            format: self.output.format.unwrap_or_default(),
            preview_url: self.output.preview_url.clone(),
        };
    }
}
