use std::sync::Arc;

use log::{debug, error, info};

use crate::heuristics::{preview, strip_wrapping_quotes};
use crate::providers::{CompletionRequest, Provider};
use super::prompts::{PromptTemplate, TranslationDirection};
use super::FallbackTranslator;

/// Sampling temperature for translations
const TRANSLATION_TEMPERATURE: f32 = 0.1;

/// Chat-model translation with machine-translation fallback
///
/// Requests carry no token cap.
#[derive(Debug, Clone)]
pub struct LlmTranslator {
    provider: Option<Arc<dyn Provider>>,
    fallback: FallbackTranslator,
}

impl LlmTranslator {
    /// Create a translator; without a provider every call goes to `fallback`
    pub fn new(provider: Option<Arc<dyn Provider>>, fallback: FallbackTranslator) -> Self {
        Self { provider, fallback }
    }

    /// Build the prompt for a language pair
    pub fn build_prompt(text: &str, source_language: &str, target_language: &str) -> String {
        PromptTemplate::for_pair(source_language, target_language)
            .render(text, source_language, target_language)
    }

    /// Clean a model answer into the final translation
    pub fn clean_reply(reply: &str) -> String {
        strip_wrapping_quotes(reply.trim()).to_string()
    }

    /// Translate `text` from `source_language` to `target_language`
    pub async fn translate(&self, text: &str, source_language: &str, target_language: &str) -> String {
        let Some(provider) = &self.provider else {
            return self.fallback.translate(text, source_language, target_language).await;
        };

        let direction = TranslationDirection::for_pair(source_language, target_language);
        let prompt = Self::build_prompt(text, source_language, target_language);
        debug!("{:?} prompt for model '{}':\n{}", direction, provider.model(), prompt);

        match provider.complete(CompletionRequest::new(prompt, TRANSLATION_TEMPERATURE)).await {
            Ok(response) => {
                let translated = Self::clean_reply(&response.text);
                info!(
                    "LLM translated '{}...' from {} to {}: '{}...'",
                    preview(text, 50), source_language, target_language, preview(&translated, 100)
                );
                translated
            }
            Err(e) => {
                error!("LLM translation failed: {}, falling back to machine translation", e);
                self.fallback.translate(text, source_language, target_language).await
            }
        }
    }
}
