//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading the tool and language configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Validation error in a configuration value.
    #[error("Validation error in '{path}': {message}")]
    ValidationError { path: String, message: String },

    /// Missing required file.
    #[error("Missing required file: {path}")]
    MissingFile { path: String },

    /// No GitHub token in the environment, on the command line or in the config file.
    #[error("GitHub token not configured; pass --token, set GITHUB_TOKEN or add [secret.github] token")]
    MissingToken,
}
