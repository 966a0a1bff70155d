use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to process your request";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Failed to process your request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("The server returned no result")]
    EmptyResult,
}

/// Body of a rewrite request. `comment` is only present for comment replies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RewritePayload {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub tone: String,
    pub language: String,
    #[serde(rename = "type")]
    pub rewrite_type: String,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    result: Option<String>,
    error: Option<String>,
}

#[async_trait]
pub trait RewriteApi {
    async fn rewrite(&self, payload: &RewritePayload) -> Result<String, ClientError>;
}

pub struct HttpRewriteApi {
    client: Client,
    base_url: String,
}

impl HttpRewriteApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/rewrite", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl RewriteApi for HttpRewriteApi {
    async fn rewrite(&self, payload: &RewritePayload) -> Result<String, ClientError> {
        let response = self
            .client
            .post(self.endpoint())
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        let envelope = serde_json::from_slice::<Envelope>(&bytes).ok();

        if !status.is_success() {
            let message = envelope
                .and_then(|envelope| envelope.error)
                .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());
            tracing::warn!("Rewrite request failed with status {}: {}", status, message);
            return Err(ClientError::Server {
                status: status.as_u16(),
                message,
            });
        }

        envelope
            .and_then(|envelope| envelope.result)
            .filter(|result| !result.is_empty())
            .ok_or(ClientError::EmptyResult)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    async fn spawn_server(status: StatusCode, reply: &'static str) -> (String, Arc<Mutex<Vec<Value>>>) {
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = received.clone();

        let app = Router::new().route(
            "/api/rewrite",
            post(move |Json(body): Json<Value>| {
                let sink = sink.clone();
                async move {
                    sink.lock().unwrap().push(body);
                    (status, reply)
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}", addr), received)
    }

    fn payload(comment: Option<&str>) -> RewritePayload {
        RewritePayload {
            text: "Hello".to_string(),
            comment: comment.map(str::to_string),
            tone: "friendly".to_string(),
            language: "id".to_string(),
            rewrite_type: "message".to_string(),
        }
    }

    #[tokio::test]
    async fn posts_payload_and_reads_result() {
        let (base_url, received) =
            spawn_server(StatusCode::OK, r#"{"result":"Halo!"}"#).await;

        let api = HttpRewriteApi::new(format!("{}/", base_url));
        let result = api.rewrite(&payload(None)).await.unwrap();

        assert_eq!(result, "Halo!");
        let body = received.lock().unwrap()[0].clone();
        assert_eq!(
            body,
            json!({ "text": "Hello", "tone": "friendly", "language": "id", "type": "message" })
        );
    }

    #[tokio::test]
    async fn comment_is_sent_when_present() {
        let (base_url, received) =
            spawn_server(StatusCode::OK, r#"{"result":"Thanks!"}"#).await;

        HttpRewriteApi::new(base_url)
            .rewrite(&payload(Some("Nice post")))
            .await
            .unwrap();

        assert_eq!(received.lock().unwrap()[0]["comment"], "Nice post");
    }

    #[tokio::test]
    async fn server_error_message_is_surfaced() {
        let (base_url, _) =
            spawn_server(StatusCode::BAD_REQUEST, r#"{"error":"Text is required"}"#).await;

        let err = HttpRewriteApi::new(base_url)
            .rewrite(&payload(None))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Server { status: 400, .. }));
        assert_eq!(err.to_string(), "Text is required");
    }

    #[tokio::test]
    async fn unreadable_error_body_uses_default_message() {
        let (base_url, _) = spawn_server(StatusCode::BAD_GATEWAY, "upstream down").await;

        let err = HttpRewriteApi::new(base_url)
            .rewrite(&payload(None))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), DEFAULT_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn success_without_result_is_an_error() {
        let (base_url, _) = spawn_server(StatusCode::OK, "{}").await;

        let err = HttpRewriteApi::new(base_url)
            .rewrite(&payload(None))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::EmptyResult));
    }
}
