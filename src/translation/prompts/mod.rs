/*!
 * Prompt engineering for chat-model translation.
 *
 * This module provides:
 * - Direction-specific prompt templates (Urdu → English, English → Urdu)
 * - A generic template for every other language pair
 * - Template selection by language pair
 */

pub mod templates;

// Re-export main types
pub use templates::{PromptTemplate, TranslationDirection};
