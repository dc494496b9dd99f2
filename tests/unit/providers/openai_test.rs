/*!
 * Tests for OpenAI provider request builders and response parsing
 */

use zubaan::errors::ProviderError;
use zubaan::providers::openai::{OpenAI, OpenAIMessage, OpenAIRequest, OpenAIResponse};
use zubaan::providers::{CompletionRequest, Provider};

#[test]
fn test_openaiRequest_chained_shouldSerializeAllFields() {
    let request = OpenAIRequest::new("gpt-3.5-turbo")
        .add_message("user", "Hello")
        .temperature(0.0)
        .max_tokens(5);

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["model"], "gpt-3.5-turbo");
    assert_eq!(json["messages"][0]["content"], "Hello");
    assert_eq!(json["max_tokens"], 5);
}

#[test]
fn test_openaiRequest_default_shouldOmitOptionalFields() {
    let json = serde_json::to_value(OpenAIRequest::default()).unwrap();
    assert!(json.get("temperature").is_none());
    assert!(json.get("max_tokens").is_none());
}

#[test]
fn test_openaiRequest_fromCompletion_shouldCopySamplingSettings() {
    let completion = CompletionRequest::new("Translate", 0.1);
    let json = serde_json::to_value(OpenAIRequest::from_completion("gpt-4o-mini", &completion)).unwrap();

    assert_eq!(json["model"], "gpt-4o-mini");
    assert_eq!(json["messages"].as_array().unwrap().len(), 1);
    assert!(json.get("max_tokens").is_none());
    assert!((json["temperature"].as_f64().unwrap() - 0.1).abs() < 1e-6);
}

#[test]
fn test_openaiMessage_withUnicode_shouldHandleCorrectly() {
    let message = OpenAIMessage {
        role: "user".to_string(),
        content: "میرا balance check کریں".to_string(),
    };
    assert_eq!(message.content, "میرا balance check کریں");
}

#[test]
fn test_extractText_withChoice_shouldReturnContent() {
    let response: OpenAIResponse = serde_json::from_str(r#"{
        "id": "chatcmpl-1",
        "choices": [{"index": 0, "message": {"role": "assistant", "content": " ur "}, "finish_reason": "stop"}],
        "usage": {"prompt_tokens": 210, "completion_tokens": 1, "total_tokens": 211}
    }"#).unwrap();

    assert_eq!(OpenAI::extract_text_from_response(&response).unwrap(), " ur ");
    assert_eq!(response.usage.unwrap().prompt_tokens, 210);
}

#[test]
fn test_extractText_withoutChoices_shouldFail() {
    let response: OpenAIResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
    assert!(matches!(
        OpenAI::extract_text_from_response(&response),
        Err(ProviderError::ParseError(_))
    ));
}

#[test]
fn test_extractText_withNullContent_shouldFail() {
    let response: OpenAIResponse = serde_json::from_str(r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#).unwrap();
    assert!(OpenAI::extract_text_from_response(&response).is_err());
}

#[test]
fn test_openai_model_shouldReturnConfiguredModel() {
    let client = OpenAI::new("sk-test", "https://api.openai.com/v1", "gpt-3.5-turbo", 30);
    assert_eq!(client.model(), "gpt-3.5-turbo");
}
