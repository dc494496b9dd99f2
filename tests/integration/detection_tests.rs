/*!
 * Integration tests for language detection through the service
 */

use std::collections::HashMap;

use zubaan::providers::mock::MockProvider;
use zubaan::DetectionContext;

use crate::common::scripted::{ScriptedDetector, ScriptedTranslator};
use crate::common::{service_with_llm, service_without_llm};

#[tokio::test]
async fn test_detect_withRomanUrdu_shouldReturnModelAnswer() {
    let provider = MockProvider::replying("ur");
    let detector = ScriptedDetector::answering("en");
    let service = service_with_llm(&provider, &detector, &ScriptedTranslator::working());

    let detected = service.detect_language("mera balance kya hai").await;

    assert_eq!(detected, "ur");
    assert!(detector.calls().is_empty());
}

#[tokio::test]
async fn test_detect_withModelReplyPadding_shouldNormalize() {
    let provider = MockProvider::replying("  DE\n");
    let service = service_with_llm(&provider, &ScriptedDetector::answering("en"), &ScriptedTranslator::working());

    assert_eq!(service.detect_language("wie geht es dir").await, "de");
}

#[tokio::test]
async fn test_detect_request_shouldBeDeterministicAndCapped() {
    let provider = MockProvider::replying("en");
    let service = service_with_llm(&provider, &ScriptedDetector::answering("en"), &ScriptedTranslator::working());

    service.detect_language("check my balance please").await;

    let request = provider.last_request().unwrap();
    assert_eq!(request.temperature, 0.0);
    assert_eq!(request.max_tokens, Some(5));
    assert!(request.prompt.contains("Text: \"check my balance please\""));
    assert!(request.prompt.contains("Return ONLY the 2-letter language code"));
}

#[tokio::test]
async fn test_detect_withUnsupportedModelReply_shouldUseStatisticalDetector() {
    let provider = MockProvider::replying("xx");
    let detector = ScriptedDetector::answering("fr");
    let service = service_with_llm(&provider, &detector, &ScriptedTranslator::working());

    let detected = service.detect_language("je voudrais mon solde").await;

    assert_eq!(detected, "fr");
    assert_eq!(detector.calls(), vec!["je voudrais mon solde".to_string()]);
}

#[tokio::test]
async fn test_detect_withVerboseModelReply_shouldUseStatisticalDetector() {
    let provider = MockProvider::replying("The language is Urdu");
    let detector = ScriptedDetector::answering("en");
    let service = service_with_llm(&provider, &detector, &ScriptedTranslator::working());

    assert_eq!(service.detect_language("account me kitna paisa hai").await, "en");
    assert_eq!(detector.calls().len(), 1);
}

#[tokio::test]
async fn test_detect_withFailingModel_shouldUseStatisticalDetector() {
    let provider = MockProvider::failing();
    let detector = ScriptedDetector::answering("de");
    let service = service_with_llm(&provider, &detector, &ScriptedTranslator::working());

    assert_eq!(service.detect_language("wie geht es dir").await, "de");
    assert_eq!(provider.request_count(), 1);
}

#[tokio::test]
async fn test_detect_withEmptyModelReply_shouldUseStatisticalDetector() {
    let provider = MockProvider::empty();
    let service = service_with_llm(&provider, &ScriptedDetector::answering("es"), &ScriptedTranslator::working());

    assert_eq!(service.detect_language("quiero ver mi saldo").await, "es");
}

#[tokio::test]
async fn test_detect_withEverythingFailing_shouldReturnEnglish() {
    let provider = MockProvider::failing();
    let service = service_with_llm(&provider, &ScriptedDetector::failing(), &ScriptedTranslator::working());

    assert_eq!(service.detect_language("qwrtzp vbnmkl").await, "en");
}

#[tokio::test]
async fn test_detect_withStatisticalCodeOutsideTable_shouldReturnEnglish() {
    let service = service_without_llm(&ScriptedDetector::answering("tlh"), &ScriptedTranslator::working());

    assert_eq!(service.detect_language("nuqneH").await, "en");
}

#[tokio::test]
async fn test_detect_withoutModel_shouldMatchStatisticalDetector() {
    let detector = ScriptedDetector::answering("it");
    let service = service_without_llm(&detector, &ScriptedTranslator::working());

    assert!(!service.uses_llm());
    assert_eq!(service.detect_language("vorrei il mio saldo").await, "it");
    assert_eq!(detector.calls().len(), 1);
}

#[tokio::test]
async fn test_detect_withShortText_shouldReturnEnglishWithoutCalls() {
    let provider = MockProvider::replying("ur");
    let detector = ScriptedDetector::answering("ur");
    let service = service_with_llm(&provider, &detector, &ScriptedTranslator::working());

    assert_eq!(service.detect_language("ok").await, "en");
    assert_eq!(service.detect_language("  a  ").await, "en");
    assert_eq!(provider.request_count(), 0);
    assert!(detector.calls().is_empty());
}

#[tokio::test]
async fn test_detectSmart_withShortTextAndUrduMemory_shouldReuseUrdu() {
    let provider = MockProvider::replying("en");
    let service = service_with_llm(&provider, &ScriptedDetector::answering("en"), &ScriptedTranslator::working());
    let memory = |_: &str| "ur".to_string();

    let detected = service.detect_language_smart("ji", Some(DetectionContext::new("923001234567", &memory))).await;

    assert_eq!(detected, "ur");
    assert_eq!(provider.request_count(), 0);
}

#[tokio::test]
async fn test_detectSmart_withShortTextAndEnglishMemory_shouldReturnEnglish() {
    let service = service_without_llm(&ScriptedDetector::answering("de"), &ScriptedTranslator::working());
    let memory = |_: &str| "en".to_string();

    let detected = service.detect_language_smart("hi", Some(DetectionContext::new("alice", &memory))).await;

    assert_eq!(detected, "en");
}

#[tokio::test]
async fn test_detectSmart_withNumberOnlyText_shouldReuseAnyMemory() {
    let provider = MockProvider::replying("de");
    let service = service_with_llm(&provider, &ScriptedDetector::answering("de"), &ScriptedTranslator::working());
    let senders: HashMap<&str, &str> = HashMap::from([("alice", "ur"), ("bob", "en")]);
    let memory = |sender: &str| senders.get(sender).copied().unwrap_or("en").to_string();

    let for_alice = service.detect_language_smart("12345", Some(DetectionContext::new("alice", &memory))).await;
    let for_bob = service.detect_language_smart("42501-5440926-9", Some(DetectionContext::new("bob", &memory))).await;

    assert_eq!(for_alice, "ur");
    assert_eq!(for_bob, "en");
    assert_eq!(provider.request_count(), 0);
}

#[tokio::test]
async fn test_detectSmart_withNumberOnlyTextAndNoContext_shouldReturnEnglish() {
    let provider = MockProvider::replying("ur");
    let service = service_with_llm(&provider, &ScriptedDetector::answering("ur"), &ScriptedTranslator::working());

    assert_eq!(service.detect_language_smart("1, 2, 3", None).await, "en");
    assert_eq!(provider.request_count(), 0);
}

#[tokio::test]
async fn test_detectSmart_withLongText_shouldIgnoreMemory() {
    let provider = MockProvider::replying("en");
    let service = service_with_llm(&provider, &ScriptedDetector::answering("en"), &ScriptedTranslator::working());
    let memory = |_: &str| "ur".to_string();

    let detected = service
        .detect_language_smart("show me transaction history", Some(DetectionContext::new("alice", &memory)))
        .await;

    assert_eq!(detected, "en");
    assert_eq!(provider.request_count(), 1);
}

#[tokio::test]
async fn test_detect_withIntermittentModel_shouldAlwaysAnswer() {
    let provider = MockProvider::intermittent(2, "ur");
    let detector = ScriptedDetector::answering("en");
    let service = service_with_llm(&provider, &detector, &ScriptedTranslator::working());

    let first = service.detect_language("balance check karo").await;
    let second = service.detect_language("balance check karo").await;

    assert_eq!(first, "ur");
    assert_eq!(second, "en");
    assert_eq!(detector.calls().len(), 1);
}

#[tokio::test]
async fn test_detectSmart_withEmptySender_shouldIgnoreMemory() {
    let provider = MockProvider::replying("de");
    let service = service_with_llm(&provider, &ScriptedDetector::answering("de"), &ScriptedTranslator::working());
    let memory = |_: &str| "ur".to_string();

    let short = service.detect_language_smart("ji", Some(DetectionContext::new("", &memory))).await;
    let numeric = service.detect_language_smart("12345", Some(DetectionContext::new("", &memory))).await;

    assert_eq!(short, "en");
    assert_eq!(numeric, "en");
    assert_eq!(provider.request_count(), 0);
}
