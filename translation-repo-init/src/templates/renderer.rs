//! Template renderer.

use crate::config::LanguageInfo;
use handlebars::{no_escape, Handlebars};
use serde_json::json;

/// Creates a configured Handlebars registry.
///
/// The registry is configured with:
/// - No HTML escaping (descriptions and URLs are plain text)
/// - Strict mode (catches missing variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    hbs.register_escape_fn(no_escape);
    hbs.set_strict_mode(true);

    hbs
}

/// Renders per-language repository descriptions and homepages.
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Creates a new template renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders a per-language format with `code` and `name` in scope.
    ///
    /// `Modern JavaScript Tutorial in {{name}}` renders as
    /// `Modern JavaScript Tutorial in Русский` for Russian.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_language(
        &self,
        format: &str,
        language: &LanguageInfo,
    ) -> Result<String, super::TemplateError> {
        let data = json!({
            "code": language.code,
            "name": language.name,
        });
        Ok(self.handlebars.render_template(format, &data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Published;

    fn russian() -> LanguageInfo {
        LanguageInfo::new("ru", "Русский", Published::Flag(true))
    }

    #[test]
    fn renders_description() {
        let renderer = TemplateRenderer::new();
        let result = renderer
            .render_language("Modern JavaScript Tutorial in {{name}}", &russian())
            .unwrap();

        assert_eq!(result, "Modern JavaScript Tutorial in Русский");
    }

    #[test]
    fn renders_homepage_from_code() {
        let renderer = TemplateRenderer::new();
        let result = renderer
            .render_language("https://{{code}}.javascript.info", &russian())
            .unwrap();

        assert_eq!(result, "https://ru.javascript.info");
    }

    #[test]
    fn strict_mode_rejects_unknown_variables() {
        let renderer = TemplateRenderer::new();
        let result = renderer.render_language("Tutorial in {{language}}", &russian());

        assert!(result.is_err());
    }

    #[test]
    fn no_html_escaping() {
        let renderer = TemplateRenderer::new();
        let language = LanguageInfo::new("zh-tw", "繁體中文 (Taiwan) & <HK>", Published::default());

        let result = renderer.render_language("{{name}}", &language).unwrap();

        assert_eq!(result, "繁體中文 (Taiwan) & <HK>");
    }
}
