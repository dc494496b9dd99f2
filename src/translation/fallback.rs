use std::sync::Arc;

use log::{error, info};

use crate::heuristics::preview;
use super::MachineTranslator;

/// Machine translation that degrades to the untranslated text
#[derive(Debug, Clone)]
pub struct FallbackTranslator {
    translator: Arc<dyn MachineTranslator>,
}

impl FallbackTranslator {
    /// Create a fallback translator around a machine-translation backend
    pub fn new(translator: Arc<dyn MachineTranslator>) -> Self {
        Self { translator }
    }

    /// Translate `text`, returning it unchanged if the backend fails
    pub async fn translate(&self, text: &str, source_language: &str, target_language: &str) -> String {
        match self.translator.translate(text, source_language, target_language).await {
            Ok(translated) => {
                info!(
                    "Fallback translated '{}' from {} to {}",
                    preview(text, 50), source_language, target_language
                );
                translated
            }
            Err(e) => {
                error!("Fallback translation failed: {}", e);
                text.to_string()
            }
        }
    }
}
