use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rightsponse_llm::{GenerationRequest, LLMClient, LLMService};

use crate::app_module::AppState;

/// Fake generation backend that records every request it receives.
#[derive(Clone)]
pub struct RecordingLLM {
    pub requests: Arc<Mutex<Vec<GenerationRequest>>>,
    reply: Option<String>,
}

impl RecordingLLM {
    pub fn replying(reply: &str) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            reply: Some(reply.to_string()),
        }
    }

    pub fn failing() -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            reply: None,
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    pub fn client(&self) -> LLMClient {
        LLMClient::with_service(Box::new(self.clone()))
    }

    pub fn app_state(&self) -> AppState {
        AppState::with_llm_client(self.client())
    }
}

#[async_trait]
impl LLMService for RecordingLLM {
    async fn generate(&self, request: &GenerationRequest) -> anyhow::Result<String> {
        self.requests.lock().unwrap().push(request.clone());
        self.reply
            .clone()
            .ok_or_else(|| anyhow::anyhow!("Gemini API returned error status: 503"))
    }
}
