use std::sync::Arc;

use log::{info, warn};

use crate::language_utils::{self, DEFAULT_LANGUAGE};
use super::StatisticalDetector;

/// Statistical detection restricted to the supported language table
///
/// Any detector failure, or a language outside the table, yields the
/// default code.
#[derive(Debug, Clone)]
pub struct FallbackDetector {
    detector: Arc<dyn StatisticalDetector>,
}

impl FallbackDetector {
    /// Create a fallback detector around a statistical detector
    pub fn new(detector: Arc<dyn StatisticalDetector>) -> Self {
        Self { detector }
    }

    /// Detect the language of `text`
    pub fn detect(&self, text: &str) -> String {
        match self.detector.detect(text) {
            Ok(code) if language_utils::is_supported(&code) => {
                info!("Fallback detected language '{}' for text: '{}'", code, text);
                code
            }
            Ok(code) => {
                warn!("Fallback detected unsupported language '{}', defaulting to English", code);
                DEFAULT_LANGUAGE.to_string()
            }
            Err(e) => {
                warn!("Fallback detection failed: {}, defaulting to English", e);
                DEFAULT_LANGUAGE.to_string()
            }
        }
    }
}
