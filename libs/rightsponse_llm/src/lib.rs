use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod gemini;

#[derive(Debug, Clone)]
pub enum LLMProvider {
    Gemini { api_key: String },
}

/// One text-generation call: a user prompt, the system instruction that
/// constrains the output, and the sampling parameters to use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
    pub system_instruction: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

#[async_trait]
pub trait LLMService {
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;
}

/// Provider-agnostic entry point. Every call is forwarded exactly once;
/// failures are returned to the caller as they are.
pub struct LLMClient {
    service: Box<dyn LLMService + Send + Sync>,
}

impl LLMClient {
    pub fn new(provider: LLMProvider) -> Self {
        let service: Box<dyn LLMService + Send + Sync> = match provider {
            LLMProvider::Gemini { api_key } => Box::new(gemini::GeminiService::new(api_key)),
        };

        Self { service }
    }

    pub fn with_service(service: Box<dyn LLMService + Send + Sync>) -> Self {
        Self { service }
    }

    pub async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        tracing::debug!(
            model = %request.model,
            prompt_chars = request.prompt.len(),
            "Sending generation request"
        );

        let text = self.service.generate(request).await?;

        tracing::debug!(output_chars = text.len(), "Generation completed");
        Ok(text)
    }
}
