use std::sync::Arc;

use rightsponse_llm::{GenerationRequest, LLMClient};

use super::{
    catalog::{language_name, DEFAULT_TONE},
    rewrite_prompt::RewritePrompt,
    rewrite_types::RewriteRequest,
};
use crate::error::RewriteError;

pub const GENERATION_MODEL: &str = "gemini-1.5-flash";
pub const GENERATION_TEMPERATURE: f32 = 0.7;
pub const GENERATION_MAX_OUTPUT_TOKENS: u32 = 250;

#[derive(Clone)]
pub struct RewriteService {
    llm_client: Arc<LLMClient>,
}

impl RewriteService {
    pub fn new(llm_client: Arc<LLMClient>) -> Self {
        Self { llm_client }
    }

    /// Validates the request and turns it into the single generation call
    /// that will be sent upstream.
    pub fn build_generation_request(
        request: &RewriteRequest,
    ) -> Result<GenerationRequest, RewriteError> {
        if request.text.trim().is_empty() {
            return Err(RewriteError::EmptyText);
        }

        let language = language_name(request.language.as_deref());
        let tone = request.tone.as_deref().unwrap_or(DEFAULT_TONE);

        let built = RewritePrompt::build(
            request.kind(),
            language,
            tone,
            &request.text,
            request.comment.as_deref(),
        );

        Ok(GenerationRequest {
            model: GENERATION_MODEL.to_string(),
            prompt: built.prompt,
            system_instruction: built.system_instruction,
            temperature: GENERATION_TEMPERATURE,
            max_output_tokens: GENERATION_MAX_OUTPUT_TOKENS,
        })
    }

    pub async fn rewrite(&self, request: &RewriteRequest) -> Result<String, RewriteError> {
        let generation = Self::build_generation_request(request)?;

        tracing::info!(
            rewrite_type = request.kind().as_str(),
            language = language_name(request.language.as_deref()),
            "Rewriting text"
        );

        let text = self.llm_client.generate(&generation).await?;
        Ok(text)
    }
}
