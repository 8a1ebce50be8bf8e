//! # CLI Error Type
//!
//! Errors that stop the console app before or outside the menu loop.
//!
//! Shop errors never show up here: the session reports them on stderr and
//! carries on. What remains is start-up trouble (config, seed catalog) and
//! terminal I/O.

use std::path::PathBuf;

use karfa_core::SeedError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// `--config` pointed at a file that does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// Config file exists but is not valid TOML for `CliConfig`.
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config parsed but holds unusable values.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The seed catalog could not be used.
    #[error("Failed to load catalog {}: {source}", .path.display())]
    Seed {
        path: PathBuf,
        #[source]
        source: SeedError,
    },

    /// Reading a file or the terminal failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CliError::ConfigNotFound(PathBuf::from("/tmp/karfa.toml"));
        assert_eq!(err.to_string(), "Config file not found: /tmp/karfa.toml");

        let err = CliError::InvalidConfig("group_separator must be one character".into());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: group_separator must be one character"
        );
    }
}
