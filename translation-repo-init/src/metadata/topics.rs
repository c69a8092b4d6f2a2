//! Topic tags for translated repositories.

use once_cell::sync::Lazy;
use regex::Regex;

/// Topic every translated repository carries besides its source language.
pub const TUTORIAL_TOPIC: &str = "tutorial";

/// Parentheses and spaces, each replaced by a single space.
static SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[() ]").expect("separator regex should be valid"));

/// A run of spaces.
static SPACE_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" +").expect("space run regex should be valid"));

/// Derives the topic slug of a language name.
///
/// The name is lowercased, every `(`, `)` and space becomes a space, the
/// result is trimmed, and then only the first run of spaces becomes a hyphen.
/// `C (язык программирования)` becomes `c-язык программирования`.
#[must_use]
pub fn topic_slug(name: &str) -> String {
    let lowered = name.to_lowercase();
    let separated = SEPARATOR_RE.replace_all(&lowered, " ");
    SPACE_RUN_RE.replace(separated.trim(), "-").into_owned()
}

/// Full topic set of a translated repository.
#[must_use]
pub fn repo_topics(source_topic: &str, language_name: &str) -> Vec<String> {
    vec![
        source_topic.to_string(),
        TUTORIAL_TOPIC.to_string(),
        topic_slug(language_name),
    ]
}
