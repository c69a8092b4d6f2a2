//! Repository metadata: topics, homepage and merge settings.

mod topics;

pub use topics::{repo_topics, topic_slug, TUTORIAL_TOPIC};

use crate::config::{InitConfig, LanguageInfo, Published};
use crate::hosting::{RepoHost, RepoSettings};
use crate::init::InitError;
use crate::templates::{TemplateError, TemplateRenderer};
use tracing::{debug, info_span, Instrument};

/// Picks the homepage of a translated repository.
///
/// - an explicit URL is used verbatim;
/// - a published translation gets the rendered homepage format;
/// - an unpublished one points at the default homepage.
///
/// # Errors
///
/// Returns [`TemplateError`] if the homepage format cannot be rendered.
pub fn select_homepage(
    config: &InitConfig,
    renderer: &TemplateRenderer,
    language: &LanguageInfo,
) -> Result<String, TemplateError> {
    match &language.published {
        Published::Url(url) => Ok(url.clone()),
        Published::Flag(true) => renderer.render_language(&config.homepage_format, language),
        Published::Flag(false) => Ok(config.default_homepage.clone()),
    }
}

/// Applies topics and settings to the translated repository of `language`.
///
/// Both calls overwrite: the topic set is replaced as a whole and every
/// setting is sent, so repeated runs converge on the same state.
///
/// # Errors
///
/// Returns [`InitError`] if the homepage cannot be rendered or an API call fails.
pub async fn setup_repo<H: RepoHost + ?Sized>(
    host: &H,
    config: &InitConfig,
    renderer: &TemplateRenderer,
    language: &LanguageInfo,
) -> Result<(), InitError> {
    let repo_name = config.repo_name(&language.code);
    let span = info_span!("setup_repo", repo = %repo_name);

    async {
        let topics = repo_topics(&config.source_topic, &language.name);
        debug!(?topics, "Replacing topics");
        host.replace_topics(&config.org, &repo_name, &topics).await?;

        let homepage = select_homepage(config, renderer, language)?;
        let settings = RepoSettings::translation(repo_name.clone(), homepage);
        debug!(homepage = %settings.homepage, "Updating settings");
        host.update_settings(&config.org, &repo_name, &settings).await?;

        Ok(())
    }
    .instrument(span)
    .await
}
