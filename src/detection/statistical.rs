//! Whatlang-based language detector
//!
//! Uses the whatlang crate for fast, trigram-based language detection and
//! converts its ISO 639-3 answer into the codes of the supported table.

use log::debug;

use crate::errors::DetectionError;
use crate::language_utils;
use super::StatisticalDetector;

/// Whatlang-based language detector
#[derive(Debug, Default, Clone, Copy)]
pub struct WhatlangDetector;

impl WhatlangDetector {
    /// Create a new Whatlang detector
    pub fn new() -> Self {
        Self
    }
}

impl StatisticalDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Result<String, DetectionError> {
        let info = whatlang::detect(text).ok_or(DetectionError::Undetectable)?;
        let iso_code = info.lang().code();
        debug!("whatlang: '{}' with confidence {:.2}", iso_code, info.confidence());

        language_utils::from_iso639_3(iso_code)
            .ok_or_else(|| DetectionError::Unmapped(iso_code.to_string()))
    }
}
