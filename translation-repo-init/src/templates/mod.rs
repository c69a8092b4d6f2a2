//! Template rendering using Handlebars.
//!
//! Repository descriptions and homepages are configured as Handlebars formats
//! (e.g. `Modern JavaScript Tutorial in {{name}}`) and rendered per language.

mod error;
mod renderer;

pub use error::TemplateError;
pub use renderer::{create_handlebars_registry, TemplateRenderer};
