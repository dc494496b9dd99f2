/*!
 * Language detection.
 *
 * Two detectors share one contract: given a text, return a supported
 * language code and never fail.
 *
 * - `fallback`: statistical detection through a `StatisticalDetector`
 * - `llm`: prompt-based detection through a chat `Provider`, falling back
 *   to the statistical detector on errors or unusable answers
 * - `statistical`: the default `StatisticalDetector`, built on whatlang
 */

pub use self::fallback::FallbackDetector;
pub use self::llm::LlmDetector;
pub use self::statistical::WhatlangDetector;

use crate::errors::DetectionError;

/// A local detector that guesses the language of a text
pub trait StatisticalDetector: Send + Sync + std::fmt::Debug {
    /// Detect the language of `text` and return its code
    fn detect(&self, text: &str) -> Result<String, DetectionError>;
}

pub mod fallback;
pub mod llm;
pub mod statistical;
