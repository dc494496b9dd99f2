/*!
 * Text translation.
 *
 * This module contains the two translation paths used by the service:
 *
 * - `fallback`: machine translation through a `MachineTranslator`; never fails
 * - `llm`: chat-model translation with direction-specific prompts, falling
 *   back to the machine translator on errors
 * - `prompts`: prompt templates and template selection
 */

use async_trait::async_trait;

use crate::errors::TranslationError;

// Re-export main types for easier usage
pub use self::fallback::FallbackTranslator;
pub use self::llm::LlmTranslator;
pub use self::prompts::{PromptTemplate, TranslationDirection};

/// A machine-translation backend with explicit source and target codes
#[async_trait]
pub trait MachineTranslator: Send + Sync + std::fmt::Debug {
    /// Translate `text` from `source` to `target`
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, TranslationError>;
}

// Submodules
pub mod fallback;
pub mod llm;
pub mod prompts;
