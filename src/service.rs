/*!
 * Language service orchestrating detection and translation.
 *
 * `LanguageService` is the entry point of the library. It applies the
 * heuristic filters first, then routes each request to the chat-model path
 * or the fallback path:
 *
 * - detection: chat model → statistical detector → English
 * - translation: chat model (Urdu pairs only) → machine translation → original text
 *
 * No public operation returns an error. Failures are logged and replaced by
 * the next step of the chain.
 */

use std::collections::BTreeMap;
use std::sync::Arc;

use log::{info, warn};

use crate::app_config::Config;
use crate::detection::{FallbackDetector, LlmDetector, StatisticalDetector, WhatlangDetector};
use crate::errors::ProviderError;
use crate::heuristics::{is_number_only_text, is_too_short};
use crate::language_utils::{self, DEFAULT_LANGUAGE, URDU};
use crate::providers::google::GoogleTranslate;
use crate::providers::openai::OpenAI;
use crate::providers::Provider;
use crate::translation::{FallbackTranslator, LlmTranslator, MachineTranslator};

/// Caller-owned store of the last language detected per sender
pub trait LanguageMemory: Send + Sync {
    /// Last known language code for `sender_id`
    fn last_language(&self, sender_id: &str) -> String;
}

impl<F> LanguageMemory for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn last_language(&self, sender_id: &str) -> String {
        self(sender_id)
    }
}

/// Sender and memory used to classify texts too short or numeric to detect
#[derive(Clone, Copy)]
pub struct DetectionContext<'a> {
    /// Sender whose previous language should be reused
    pub sender_id: &'a str,
    /// Where previous languages are stored
    pub memory: &'a dyn LanguageMemory,
}

impl<'a> DetectionContext<'a> {
    /// Create a context for `sender_id`
    pub fn new(sender_id: &'a str, memory: &'a dyn LanguageMemory) -> Self {
        Self { sender_id, memory }
    }

    fn last_language(&self) -> String {
        self.memory.last_language(self.sender_id)
    }
}

/// Language detection and translation service
#[derive(Debug, Clone)]
pub struct LanguageService {
    provider: Option<Arc<dyn Provider>>,
    fallback_detector: FallbackDetector,
    llm_detector: LlmDetector,
    fallback_translator: FallbackTranslator,
    llm_translator: LlmTranslator,
}

impl LanguageService {
    /// Create the service with real clients built from `config`
    ///
    /// Without an API key the service runs in fallback-only mode.
    pub fn new(config: &Config) -> Self {
        let mut builder = Self::builder()
            .statistical_detector(Arc::new(WhatlangDetector::new()))
            .machine_translator(Arc::new(GoogleTranslate::new(
                config.fallback.endpoint.clone(),
                config.fallback.timeout_secs,
            )));

        if let Some(reason) = config.llm_unavailable_reason() {
            warn!("Chat model unavailable ({}), using fallback detection and translation only", reason);
        } else {
            info!("OpenAI client initialized for language detection and translation (model '{}')", config.llm.model);
            builder = builder.provider(Arc::new(OpenAI::new(
                config.llm.api_key.clone(),
                config.llm.endpoint.clone(),
                config.llm.model.clone(),
                config.llm.timeout_secs,
            )));
        }

        builder.build()
    }

    /// Start building a service from injected components
    pub fn builder() -> LanguageServiceBuilder {
        LanguageServiceBuilder::default()
    }

    /// Whether the chat-model path is active
    pub fn uses_llm(&self) -> bool {
        self.provider.is_some()
    }

    /// Check that the chat provider answers
    pub async fn test_connection(&self) -> Result<(), ProviderError> {
        match &self.provider {
            Some(provider) => provider.test_connection().await,
            None => Err(ProviderError::NotConfigured("no chat model API key".to_string())),
        }
    }

    /// Detect the language of a message
    ///
    /// Texts shorter than three characters reuse the sender's last language
    /// when it is not English. Number-only texts reuse it unconditionally.
    /// Without a context both cases are English. A context with an empty
    /// sender counts as no context.
    pub async fn detect_language_smart(&self, text: &str, context: Option<DetectionContext<'_>>) -> String {
        let context = context.filter(|context| !context.sender_id.is_empty());

        if is_too_short(text) {
            if let Some(context) = context {
                let last_language = context.last_language();
                if last_language != DEFAULT_LANGUAGE {
                    info!("Short text detected, using last language: {}", last_language);
                    return last_language;
                }
            }
            return DEFAULT_LANGUAGE.to_string();
        }

        if is_number_only_text(text) {
            return match context {
                Some(context) => {
                    let last_language = context.last_language();
                    info!("Number-only text detected: '{}', using last language: {}", text, last_language);
                    last_language
                }
                None => DEFAULT_LANGUAGE.to_string(),
            };
        }

        let detected = if self.uses_llm() {
            let detected = self.llm_detector.detect(text).await;
            info!("LLM detection result: '{}' for text: '{}'", detected, text);
            detected
        } else {
            let detected = self.fallback_detector.detect(text);
            info!("Fallback detection result: '{}' for text: '{}'", detected, text);
            detected
        };

        if language_utils::is_valid_detection(&detected) {
            detected
        } else {
            warn!("Detected language '{}' not supported, defaulting to English", detected);
            DEFAULT_LANGUAGE.to_string()
        }
    }

    /// Detect the language of a text without sender context
    pub async fn detect_language(&self, text: &str) -> String {
        self.detect_language_smart(text, None).await
    }

    /// Translate a message into English
    pub async fn translate_to_english(&self, text: &str, source_language: &str) -> String {
        if source_language == DEFAULT_LANGUAGE {
            return text.to_string();
        }

        if is_number_only_text(text) {
            info!("Skipping translation for number-only text: '{}'", text);
            return text.to_string();
        }

        if self.uses_llm() && source_language == URDU {
            self.llm_translator.translate(text, source_language, DEFAULT_LANGUAGE).await
        } else {
            self.fallback_translator.translate(text, source_language, DEFAULT_LANGUAGE).await
        }
    }

    /// Translate an English reply into the user's language
    pub async fn translate_from_english(&self, text: &str, target_language: &str) -> String {
        if target_language == DEFAULT_LANGUAGE {
            return text.to_string();
        }

        if self.uses_llm() && target_language == URDU {
            self.llm_translator.translate(text, DEFAULT_LANGUAGE, target_language).await
        } else {
            self.fallback_translator.translate(text, DEFAULT_LANGUAGE, target_language).await
        }
    }

    /// Human-readable name of a language code
    pub fn get_language_name(&self, code: &str) -> String {
        language_utils::get_language_name(code)
    }

    /// All codes the service can translate between
    pub fn supported_languages(&self) -> &'static BTreeMap<&'static str, &'static str> {
        language_utils::supported_languages()
    }
}

/// Builder wiring a `LanguageService` from its collaborators
#[derive(Debug, Default)]
pub struct LanguageServiceBuilder {
    provider: Option<Arc<dyn Provider>>,
    statistical_detector: Option<Arc<dyn StatisticalDetector>>,
    machine_translator: Option<Arc<dyn MachineTranslator>>,
}

impl LanguageServiceBuilder {
    /// Use `provider` for the chat-model path
    pub fn provider(mut self, provider: Arc<dyn Provider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Use `detector` for statistical detection
    pub fn statistical_detector(mut self, detector: Arc<dyn StatisticalDetector>) -> Self {
        self.statistical_detector = Some(detector);
        self
    }

    /// Use `translator` for machine translation
    pub fn machine_translator(mut self, translator: Arc<dyn MachineTranslator>) -> Self {
        self.machine_translator = Some(translator);
        self
    }

    /// Build the service
    ///
    /// Missing detectors and translators default to whatlang and the public
    /// Google endpoint; a missing provider means fallback-only mode.
    pub fn build(self) -> LanguageService {
        let statistical_detector = self.statistical_detector
            .unwrap_or_else(|| Arc::new(WhatlangDetector::new()));
        let machine_translator = self.machine_translator.unwrap_or_else(|| {
            let defaults = crate::app_config::FallbackConfig::default();
            Arc::new(GoogleTranslate::new(defaults.endpoint, defaults.timeout_secs))
        });

        let fallback_detector = FallbackDetector::new(statistical_detector);
        let fallback_translator = FallbackTranslator::new(machine_translator);

        LanguageService {
            llm_detector: LlmDetector::new(self.provider.clone(), fallback_detector.clone()),
            llm_translator: LlmTranslator::new(self.provider.clone(), fallback_translator.clone()),
            provider: self.provider,
            fallback_detector,
            fallback_translator,
        }
    }
}
