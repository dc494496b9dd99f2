use std::sync::Arc;

use log::{debug, error, info, warn};

use crate::language_utils;
use crate::providers::{CompletionRequest, Provider};
use super::FallbackDetector;

/// Detection is deterministic
const DETECTION_TEMPERATURE: f32 = 0.0;

/// A language code never needs more than a handful of tokens
const DETECTION_MAX_TOKENS: u32 = 5;

/// Prompt used to classify a text; `{text}` is replaced by the input
pub const DETECTION_PROMPT: &str = r#"You are a language detection expert. Analyze the following text and determine its language.

Text: "{text}"

Language Detection Rules:
1. If text is STANDARD ENGLISH (proper English words and grammar) → return "en"
2. If text is ROMAN URDU (Urdu/Hindi words written in English letters) → return "ur"
3. If text is URDU in Arabic script → return "ur"
4. If text is any other language → return the 2-letter ISO code (de, fr, es, ar, etc.)

Examples:
- "what are my last 3 transactions" → "en" (Standard English)
- "check my balance please" → "en" (Standard English)
- "show me transaction history" → "en" (Standard English)
- "mera balance kya hai" → "ur" (Roman Urdu)
- "account me kitna paisa hai" → "ur" (Roman Urdu)
- "balance check karo" → "ur" (Roman Urdu)
- "wie geht es dir" → "de" (German)

Response format: Return ONLY the 2-letter language code (en, ur, de, fr, etc.). Nothing else."#;

/// Build the detection prompt for `text`
pub fn build_detection_prompt(text: &str) -> String {
    DETECTION_PROMPT.replace("{text}", text)
}

/// Normalize a model answer into a candidate language code
pub fn normalize_detection_reply(reply: &str) -> String {
    reply.trim().to_lowercase()
}

/// Prompt-based language detection with statistical fallback
#[derive(Debug, Clone)]
pub struct LlmDetector {
    provider: Option<Arc<dyn Provider>>,
    fallback: FallbackDetector,
}

impl LlmDetector {
    /// Create a detector; without a provider every call goes to `fallback`
    pub fn new(provider: Option<Arc<dyn Provider>>, fallback: FallbackDetector) -> Self {
        Self { provider, fallback }
    }

    /// Detect the language of `text`
    pub async fn detect(&self, text: &str) -> String {
        let Some(provider) = &self.provider else {
            return self.fallback.detect(text);
        };

        let prompt = build_detection_prompt(text);
        debug!("Detection prompt for model '{}':\n{}", provider.model(), prompt);

        let request = CompletionRequest::new(prompt, DETECTION_TEMPERATURE)
            .max_tokens(DETECTION_MAX_TOKENS);

        match provider.complete(request).await {
            Ok(response) => {
                let detected = normalize_detection_reply(&response.text);
                if language_utils::is_valid_detection(&detected) {
                    info!("LLM detected language '{}' for text: '{}'", detected, text);
                    detected
                } else {
                    warn!("LLM returned invalid language code '{}', falling back", detected);
                    self.fallback.detect(text)
                }
            }
            Err(e) => {
                error!("LLM language detection failed: {}, falling back", e);
                self.fallback.detect(text)
            }
        }
    }
}
