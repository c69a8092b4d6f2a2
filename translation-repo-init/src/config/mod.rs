//! Configuration and language loading.
//!
//! This module handles parsing `config.toml` into an [`InitConfig`] and
//! `languages.toml` into a list of [`LanguageInfo`] descriptors.

mod error;
mod language;
mod settings;

pub use error::ConfigError;
pub use language::{load_languages, validate_language, LanguageInfo, Published};
pub use settings::{InitConfig, TOKEN_ENV};
