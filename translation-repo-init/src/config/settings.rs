//! Tool configuration loaded from `config.toml`.

use crate::config::ConfigError;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;
use url::Url;

/// Environment variable consulted for the GitHub token.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Raw `config.toml` contents before token resolution and validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct InitConfigFile {
    repo_root: PathBuf,
    org: String,
    lang_main: String,
    repo_suffix: String,
    #[serde(default = "default_ssh_host")]
    ssh_host: String,
    #[serde(default = "default_branch")]
    default_branch: String,
    #[serde(default = "default_source_topic")]
    source_topic: String,
    #[serde(default = "default_description_format")]
    description_format: String,
    #[serde(default = "default_homepage_format")]
    homepage_format: String,
    #[serde(default = "default_homepage")]
    default_homepage: String,
    #[serde(default)]
    secret: SecretSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SecretSection {
    #[serde(default)]
    github: GitHubSecret,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct GitHubSecret {
    token: Option<String>,
}

pub(crate) fn default_ssh_host() -> String {
    "github.com".to_string()
}

pub(crate) fn default_branch() -> String {
    "master".to_string()
}

pub(crate) fn default_source_topic() -> String {
    "javascript".to_string()
}

pub(crate) fn default_description_format() -> String {
    "Modern JavaScript Tutorial in {{name}}".to_string()
}

pub(crate) fn default_homepage_format() -> String {
    "https://{{code}}.javascript.info".to_string()
}

pub(crate) fn default_homepage() -> String {
    "https://javascript.info".to_string()
}

/// Process-wide settings for bootstrapping translation repositories.
///
/// Read-only for the duration of a run. The local clones live under
/// `repo_root` as `{code}.{repo_suffix}`, and the remote repositories under
/// `org` with the same name.
#[derive(Clone)]
pub struct InitConfig {
    /// Directory holding the local clones.
    pub repo_root: PathBuf,

    /// GitHub organization that owns every tutorial repository.
    pub org: String,

    /// Language code of the original (source-language) repository.
    pub lang_main: String,

    /// Suffix appended to the language code to form a repository name.
    pub repo_suffix: String,

    /// Host used in SSH remote URLs.
    pub ssh_host: String,

    /// Branch pushed when a translated repository is first initialized.
    pub default_branch: String,

    /// Topic naming the tutorial's source language.
    pub source_topic: String,

    /// Handlebars format for the repository description.
    pub description_format: String,

    /// Handlebars format for the homepage of a published translation.
    pub homepage_format: String,

    /// Homepage used while a translation is unpublished.
    pub default_homepage: String,

    /// GitHub token used for API calls.
    pub token: String,
}

impl fmt::Debug for InitConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InitConfig")
            .field("repo_root", &self.repo_root)
            .field("org", &self.org)
            .field("lang_main", &self.lang_main)
            .field("repo_suffix", &self.repo_suffix)
            .field("ssh_host", &self.ssh_host)
            .field("default_branch", &self.default_branch)
            .field("source_topic", &self.source_topic)
            .field("description_format", &self.description_format)
            .field("homepage_format", &self.homepage_format)
            .field("default_homepage", &self.default_homepage)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl InitConfig {
    /// Creates a configuration with default presentation settings.
    pub fn new(
        repo_root: impl Into<PathBuf>,
        org: impl Into<String>,
        lang_main: impl Into<String>,
        repo_suffix: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            repo_root: repo_root.into(),
            org: org.into(),
            lang_main: lang_main.into(),
            repo_suffix: repo_suffix.into(),
            ssh_host: default_ssh_host(),
            default_branch: default_branch(),
            source_topic: default_source_topic(),
            description_format: default_description_format(),
            homepage_format: default_homepage_format(),
            default_homepage: default_homepage(),
            token: token.into(),
        }
    }

    /// Loads and validates `config.toml`.
    ///
    /// The token is taken from `token_override` first, then from the
    /// `GITHUB_TOKEN` environment variable, then from `[secret.github] token`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is missing, unparsable, fails
    /// validation, or no token can be found.
    pub fn load(path: &Path, token_override: Option<String>) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading configuration");

        if !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            });
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            path: path.display().to_string(),
            source,
        })?;
        let file: InitConfigFile =
            toml::from_str(&contents).map_err(|source| ConfigError::TomlError {
                path: path.display().to_string(),
                source,
            })?;

        let token = resolve_token(token_override, file.secret.github.token)
            .ok_or(ConfigError::MissingToken)?;

        let config = Self {
            repo_root: file.repo_root,
            org: file.org,
            lang_main: file.lang_main,
            repo_suffix: file.repo_suffix,
            ssh_host: file.ssh_host,
            default_branch: file.default_branch,
            source_topic: file.source_topic,
            description_format: file.description_format,
            homepage_format: file.homepage_format,
            default_homepage: file.default_homepage,
            token,
        };
        config.validate(path)?;
        Ok(config)
    }

    /// Validates the loaded values.
    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let path_str = path.display().to_string();
        let required = [
            ("org", &self.org),
            ("lang-main", &self.lang_main),
            ("repo-suffix", &self.repo_suffix),
            ("ssh-host", &self.ssh_host),
            ("default-branch", &self.default_branch),
            ("source-topic", &self.source_topic),
        ];

        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    path: path_str,
                    message: format!("{key} must not be empty"),
                });
            }
        }

        if Url::parse(&self.default_homepage).is_err() {
            return Err(ConfigError::ValidationError {
                path: path_str,
                message: format!(
                    "default-homepage is not a valid URL: {}",
                    self.default_homepage
                ),
            });
        }

        for (key, format) in [
            ("description-format", &self.description_format),
            ("homepage-format", &self.homepage_format),
        ] {
            if let Err(e) = handlebars::Template::compile(format) {
                return Err(ConfigError::ValidationError {
                    path: path_str,
                    message: format!("{key} is not a valid template: {e}"),
                });
            }
        }

        Ok(())
    }

    /// Repository name for a language code, e.g. `ru.javascript.info`.
    #[must_use]
    pub fn repo_name(&self, code: &str) -> String {
        format!("{}.{}", code, self.repo_suffix)
    }

    /// Repository name of the original (main-language) repository.
    #[must_use]
    pub fn original_repo_name(&self) -> String {
        self.repo_name(&self.lang_main)
    }

    /// Local path of the original repository clone.
    #[must_use]
    pub fn original_path(&self) -> PathBuf {
        self.repo_root.join(self.original_repo_name())
    }

    /// Local path of a translated repository clone.
    #[must_use]
    pub fn translated_path(&self, code: &str) -> PathBuf {
        self.repo_root.join(self.repo_name(code))
    }

    /// SSH remote URL of a repository in the organization.
    #[must_use]
    pub fn ssh_url(&self, repo_name: &str) -> String {
        format!("git@{}:{}/{}", self.ssh_host, self.org, repo_name)
    }
}

/// Picks the first available token: explicit override, environment, file.
fn resolve_token(token_override: Option<String>, file_token: Option<String>) -> Option<String> {
    token_override
        .or_else(|| std::env::var(TOKEN_ENV).ok())
        .or(file_token)
        .filter(|token| !token.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(temp: &TempDir, contents: &str) -> PathBuf {
        let path = temp.path().join("config.toml");
        fs::write(&path, contents).unwrap();
        path
    }

    const MINIMAL: &str = r#"
repo-root = "/srv/repos"
org = "javascript-tutorial"
lang-main = "en"
repo-suffix = "javascript.info"
"#;

    #[test]
    fn load_applies_defaults() {
        temp_env::with_var_unset(TOKEN_ENV, || {
            let temp = TempDir::new().unwrap();
            let path = write_config(&temp, MINIMAL);

            let config = InitConfig::load(&path, Some("secret".to_string())).unwrap();

            assert_eq!(config.repo_root, PathBuf::from("/srv/repos"));
            assert_eq!(config.org, "javascript-tutorial");
            assert_eq!(config.ssh_host, "github.com");
            assert_eq!(config.default_branch, "master");
            assert_eq!(config.source_topic, "javascript");
            assert_eq!(
                config.description_format,
                "Modern JavaScript Tutorial in {{name}}"
            );
            assert_eq!(config.homepage_format, "https://{{code}}.javascript.info");
            assert_eq!(config.default_homepage, "https://javascript.info");
            assert_eq!(config.token, "secret");
        });
    }

    #[test]
    fn load_reads_token_from_secret_section() {
        temp_env::with_var_unset(TOKEN_ENV, || {
            let temp = TempDir::new().unwrap();
            let path = write_config(
                &temp,
                &format!("{MINIMAL}\n[secret.github]\ntoken = \"from-file\"\n"),
            );

            let config = InitConfig::load(&path, None).unwrap();
            assert_eq!(config.token, "from-file");
        });
    }

    #[test]
    fn environment_token_wins_over_file() {
        temp_env::with_var(TOKEN_ENV, Some("from-env"), || {
            let temp = TempDir::new().unwrap();
            let path = write_config(
                &temp,
                &format!("{MINIMAL}\n[secret.github]\ntoken = \"from-file\"\n"),
            );

            let config = InitConfig::load(&path, None).unwrap();
            assert_eq!(config.token, "from-env");
        });
    }

    #[test]
    fn load_without_token_fails() {
        temp_env::with_var_unset(TOKEN_ENV, || {
            let temp = TempDir::new().unwrap();
            let path = write_config(&temp, MINIMAL);

            let result = InitConfig::load(&path, None);
            assert!(matches!(result, Err(ConfigError::MissingToken)));
        });
    }

    #[test]
    fn load_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = InitConfig::load(&temp.path().join("nope.toml"), Some("t".to_string()));
        assert!(matches!(result, Err(ConfigError::MissingFile { .. })));
    }

    #[test]
    fn load_reports_invalid_toml() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "repo-root = [");
        let result = InitConfig::load(&path, Some("t".to_string()));
        assert!(matches!(result, Err(ConfigError::TomlError { .. })));
    }

    #[test]
    fn load_rejects_empty_org() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, &MINIMAL.replace("javascript-tutorial", " "));
        let result = InitConfig::load(&path, Some("t".to_string()));
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn load_rejects_invalid_default_homepage() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            &temp,
            &format!("{MINIMAL}default-homepage = \"not a url\"\n"),
        );
        let result = InitConfig::load(&path, Some("t".to_string()));
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn load_rejects_broken_description_format() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            &temp,
            &format!(
                "{MINIMAL}{}",
                "description-format = \"Tutorial in {{#if name}}\"\n"
            ),
        );
        let result = InitConfig::load(&path, Some("t".to_string()));
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn derives_names_paths_and_urls() {
        let config = InitConfig::new("/srv/repos", "javascript-tutorial", "en", "javascript.info", "t");

        assert_eq!(config.repo_name("ru"), "ru.javascript.info");
        assert_eq!(config.original_repo_name(), "en.javascript.info");
        assert_eq!(
            config.original_path(),
            PathBuf::from("/srv/repos/en.javascript.info")
        );
        assert_eq!(
            config.translated_path("ru"),
            PathBuf::from("/srv/repos/ru.javascript.info")
        );
        assert_eq!(
            config.ssh_url("ru.javascript.info"),
            "git@github.com:javascript-tutorial/ru.javascript.info"
        );
    }

    #[test]
    fn debug_output_redacts_token() {
        let config = InitConfig::new("/srv", "org", "en", "suffix", "super-secret");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
