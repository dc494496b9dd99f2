/*!
 * Common test utilities for the zubaan test suite
 */

use std::sync::Arc;

use zubaan::providers::mock::MockProvider;
use zubaan::LanguageService;


use scripted::{ScriptedDetector, ScriptedTranslator};

/// Route library logs to the test output; safe to call from every test
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build a service with a chat provider and scripted fallbacks
pub fn service_with_llm(
    provider: &MockProvider,
    detector: &ScriptedDetector,
    translator: &ScriptedTranslator,
) -> LanguageService {
    init_logging();
    LanguageService::builder()
        .provider(Arc::new(provider.clone()))
        .statistical_detector(Arc::new(detector.clone()))
        .machine_translator(Arc::new(translator.clone()))
        .build()
}

/// Build a fallback-only service with scripted fallbacks
pub fn service_without_llm(detector: &ScriptedDetector, translator: &ScriptedTranslator) -> LanguageService {
    init_logging();
    LanguageService::builder()
        .statistical_detector(Arc::new(detector.clone()))
        .machine_translator(Arc::new(translator.clone()))
        .build()
}
