//! Sermon generation strategies.
//!
//! Both strategies implement [`SermonGenerator`] so the session controller
//! does not care which one it drives.

pub mod openai;
pub mod parse;
pub mod template;

pub use openai::OpenAIGenerator;
pub use template::TemplateGenerator;

use crate::config::Config;
use crate::error::{Result, SermonError};
use crate::provider::Strategy;
use crate::sermon::{SermonRequest, SermonResponse};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait SermonGenerator: Send + Sync {
    /// Produces a structurally complete sermon or fails; never a partial one.
    async fn generate(&self, request: &SermonRequest) -> Result<SermonResponse>;

    fn name(&self) -> &'static str;
}

/// Builds the generator selected by `config`.
pub fn build_generator(config: &Config) -> Result<Arc<dyn SermonGenerator>> {
    match config.strategy() {
        Strategy::Template => Ok(Arc::new(
            TemplateGenerator::new(config.locale()).with_delay(config.template_delay()),
        )),
        Strategy::OpenAI => {
            let api_key = config.resolved_api_key().ok_or_else(|| {
                SermonError::Config("OpenAI API key not set (OPENAI_API_KEY)".to_string())
            })?;
            Ok(Arc::new(
                OpenAIGenerator::new(&api_key, config.locale())
                    .with_base_url(config.openai_base_url())
                    .with_model(config.model())
                    .with_sampling(config.temperature(), config.max_tokens()),
            ))
        }
    }
}

/// Renders a locale template with the request fields in scope.
pub(crate) fn render(source: &str, request: &SermonRequest) -> Result<String> {
    let env = minijinja::Environment::new();
    let rendered = env.render_str(
        source,
        minijinja::context! {
            book => &request.book,
            chapter => &request.chapter,
            verses => &request.verses,
            theme => &request.theme,
        },
    )?;
    Ok(rendered)
}
