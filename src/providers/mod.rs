/*!
 * Provider implementations for the external services.
 *
 * This module contains client implementations for:
 * - OpenAI: chat-completion API used for detection and translation
 * - Google: web translation endpoint used as the fallback translator
 * - Mock: scripted chat provider for tests and offline runs
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Provider-neutral chat completion request
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// The user prompt
    pub prompt: String,

    /// Sampling temperature
    pub temperature: f32,

    /// Output cap; `None` lets the model finish on its own
    pub max_tokens: Option<u32>,
}

impl CompletionRequest {
    /// Create a new request with the given prompt and temperature
    pub fn new(prompt: impl Into<String>, temperature: f32) -> Self {
        Self {
            prompt: prompt.into(),
            temperature,
            max_tokens: None,
        }
    }

    /// Cap the number of generated tokens
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Provider-neutral chat completion response
#[derive(Debug, Clone, Default)]
pub struct CompletionResponse {
    /// The generated text
    pub text: String,
    /// Prompt tokens reported by the provider
    pub prompt_tokens: Option<u64>,
    /// Completion tokens reported by the provider
    pub completion_tokens: Option<u64>,
}

/// Common trait for all chat-completion providers
///
/// This trait defines the interface the detectors and translators use,
/// allowing real and scripted providers to be used interchangeably.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// Complete a request using this provider
    ///
    /// # Arguments
    /// * `request` - The request to complete
    ///
    /// # Returns
    /// * `Result<CompletionResponse, ProviderError>` - The response from the provider or an error
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, ProviderError>;

    /// Test the connection to the provider
    ///
    /// # Returns
    /// * `Result<(), ProviderError>` - Ok if the connection is successful, or an error
    async fn test_connection(&self) -> Result<(), ProviderError>;

    /// Model name the provider sends requests to
    fn model(&self) -> &str;
}

pub mod google;
pub mod mock;
pub mod openai;
