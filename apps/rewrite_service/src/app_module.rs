use std::sync::Arc;

use rightsponse_llm::{LLMClient, LLMProvider};

use crate::{config::AppConfig, rewrite::rewrite_service::RewriteService};

#[derive(Clone)]
pub struct AppService {
    pub rewrite_service: RewriteService,
}

impl AppService {
    pub fn new(llm_client: Arc<LLMClient>) -> Self {
        let rewrite_service = RewriteService::new(llm_client);

        Self { rewrite_service }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub service: AppService,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_llm_client(LLMClient::new(LLMProvider::Gemini {
            api_key: config.gemini_api_key.clone(),
        }))
    }

    pub fn with_llm_client(llm_client: LLMClient) -> Self {
        Self {
            service: AppService::new(Arc::new(llm_client)),
        }
    }
}
