//! # Console Configuration
//!
//! Configuration for the console shop.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command line (highest priority)                                    │
//! │     --catalog ./vorur.json                                             │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     KARFA_CATALOG, KARFA_GROUP_SEPARATOR,                              │
//! │     KARFA_CURRENCY_SUFFIX, KARFA_LOG                                   │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config PATH, or karfa.toml in the platform config dir            │
//! │     ~/.config/karfa/karfa.toml (Linux)                                 │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     ISK formatting, built-in catalog                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [display]
//! group_separator = "."   # "" disables grouping
//! currency_suffix = " kr."
//!
//! [catalog]
//! seed_path = "/srv/karfa/vorur.json"
//!
//! [logging]
//! filter = "warn,karfa_core=debug"
//! ```

use std::path::{Path, PathBuf};

use karfa_core::CurrencyFormat;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CliError, CliResult};

// =============================================================================
// Display Settings
// =============================================================================

/// How amounts are rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Thousands separator; empty disables grouping.
    #[serde(default = "default_group_separator")]
    pub group_separator: String,

    /// Text appended to every amount.
    #[serde(default = "default_currency_suffix")]
    pub currency_suffix: String,
}

fn default_group_separator() -> String {
    ".".to_string()
}

fn default_currency_suffix() -> String {
    " kr.".to_string()
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            group_separator: default_group_separator(),
            currency_suffix: default_currency_suffix(),
        }
    }
}

impl DisplaySettings {
    /// Builds the currency renderer. Call after [`CliConfig::validate`].
    pub fn currency_format(&self) -> CurrencyFormat {
        CurrencyFormat {
            group_separator: self.group_separator.chars().next(),
            suffix: self.currency_suffix.clone(),
        }
    }
}

// =============================================================================
// Catalog Settings
// =============================================================================

/// Where the product list comes from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// JSON seed file; the built-in products are used when unset.
    #[serde(default)]
    pub seed_path: Option<PathBuf>,
}

// =============================================================================
// Logging Settings
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `EnvFilter` directives, used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "warn,karfa_core=info,karfa_cli=info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            filter: default_log_filter(),
        }
    }
}

// =============================================================================
// Config
// =============================================================================

/// Complete console configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub display: DisplaySettings,

    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl CliConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`explicit_path`, else the platform default)
    /// 3. Environment variables
    ///
    /// A missing default file is fine; a missing explicit file is an error.
    pub fn load(explicit_path: Option<&Path>) -> CliResult<Self> {
        let mut config = match explicit_path {
            Some(path) if !path.exists() => {
                return Err(CliError::ConfigNotFound(path.to_path_buf()));
            }
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML config file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        debug!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parses TOML config text.
    pub fn from_toml(contents: &str) -> CliResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CliResult<()> {
        if self.display.group_separator.chars().count() > 1 {
            return Err(CliError::InvalidConfig(format!(
                "group_separator must be at most one character, got {:?}",
                self.display.group_separator
            )));
        }

        if self
            .display
            .group_separator
            .chars()
            .any(|c| c.is_ascii_digit())
        {
            return Err(CliError::InvalidConfig(
                "group_separator cannot be a digit".into(),
            ));
        }

        if self.logging.filter.trim().is_empty() {
            return Err(CliError::InvalidConfig(
                "logging.filter must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from `lookup`, keyed by environment variable name.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("KARFA_CATALOG") {
            debug!(path = %path, "Overriding catalog seed from environment");
            self.catalog.seed_path = Some(PathBuf::from(path));
        }

        if let Some(sep) = lookup("KARFA_GROUP_SEPARATOR") {
            self.display.group_separator = sep;
        }

        if let Some(suffix) = lookup("KARFA_CURRENCY_SUFFIX") {
            self.display.currency_suffix = suffix;
        }

        if let Some(filter) = lookup("KARFA_LOG") {
            self.logging.filter = filter;
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("is", "karfa", "karfa")
            .map(|dirs| dirs.config_dir().join("karfa.toml"))
    }
}
