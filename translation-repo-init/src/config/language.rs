//! Language descriptors and the `languages.toml` file.

use crate::config::ConfigError;
use serde::Deserialize;
use std::convert::Infallible;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};
use url::Url;

/// Publication state of a translation.
///
/// Either a plain flag or an explicit homepage URL overriding the derived one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Published {
    /// Whether the translation is live on its own subdomain.
    Flag(bool),
    /// Homepage to use verbatim.
    Url(String),
}

impl Default for Published {
    fn default() -> Self {
        Self::Flag(false)
    }
}

impl FromStr for Published {
    type Err = Infallible;

    /// Parses `true`/`false`; anything else is kept as a homepage URL.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(match value.trim() {
            "true" => Self::Flag(true),
            "false" | "" => Self::Flag(false),
            other => Self::Url(other.to_string()),
        })
    }
}

/// A target language to bootstrap a translated repository for.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LanguageInfo {
    /// Short identifier, e.g. `ru`, `zh`, `pt-BR`.
    pub code: String,

    /// Display name, e.g. `Русский`.
    pub name: String,

    /// Publication state, used for the repository homepage.
    #[serde(default)]
    pub published: Published,
}

impl LanguageInfo {
    /// Creates a descriptor.
    pub fn new(code: impl Into<String>, name: impl Into<String>, published: Published) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            published,
        }
    }
}

/// Top-level structure for `languages.toml` with `[[language]]` tables.
#[derive(Debug, Deserialize)]
struct LanguagesFile {
    #[serde(default)]
    language: Vec<LanguageInfo>,
}

/// Loads the list of languages to bootstrap.
///
/// ```toml
/// [[language]]
/// code = "ru"
/// name = "Русский"
/// published = true
///
/// [[language]]
/// code = "zh"
/// name = "简体中文"
/// published = "https://zh.javascript.info"
/// ```
///
/// # Errors
///
/// Returns [`ConfigError`] if the file cannot be read or parsed, or a
/// language has an empty code or name.
pub fn load_languages(path: &Path) -> Result<Vec<LanguageInfo>, ConfigError> {
    debug!(path = %path.display(), "Loading languages");

    if !path.exists() {
        return Err(ConfigError::MissingFile {
            path: path.display().to_string(),
        });
    }

    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
        path: path.display().to_string(),
        source,
    })?;
    let parsed: LanguagesFile =
        toml::from_str(&contents).map_err(|source| ConfigError::TomlError {
            path: path.display().to_string(),
            source,
        })?;

    for language in &parsed.language {
        validate_language(language, path)?;
    }

    Ok(parsed.language)
}

/// Validates a single descriptor.
///
/// A homepage override that is not a URL is only warned about; it is still
/// applied verbatim.
pub fn validate_language(language: &LanguageInfo, path: &Path) -> Result<(), ConfigError> {
    if language.code.trim().is_empty() || language.name.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            path: path.display().to_string(),
            message: format!(
                "language code and name must not be empty (code = {:?}, name = {:?})",
                language.code, language.name
            ),
        });
    }

    if language.code.contains(['/', '\\']) || language.code.starts_with('.') {
        return Err(ConfigError::ValidationError {
            path: path.display().to_string(),
            message: format!("language code is not a valid path component: {}", language.code),
        });
    }

    if let Published::Url(homepage) = &language.published {
        if Url::parse(homepage).is_err() {
            warn!(code = %language.code, homepage = %homepage, "Homepage override is not a valid URL");
        }
    }

    Ok(())
}
