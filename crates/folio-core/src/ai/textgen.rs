use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize)]
struct TextGenRequest<'a> {
    prompt: &'a str,
}

#[derive(Deserialize)]
struct TextGenResponse {
    status: String,
    text: Option<String>,
}

#[derive(Debug, Error)]
pub enum TextGenError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("endpoint returned HTTP {0}")]
    Status(StatusCode),
    #[error("endpoint reported status {0:?}")]
    Rejected(String),
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Client for the hosted text-generation endpoint used when no canned
/// reply fits.
#[derive(Clone)]
pub struct TextGenClient {
    client: Client,
    endpoint: String,
}

impl TextGenClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.to_string(),
        }
    }

    pub fn with_timeout(endpoint: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one prompt. There is no retry; the caller decides what a
    /// failure looks like to the user.
    pub async fn generate(&self, prompt: &str) -> Result<String, TextGenError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&TextGenRequest { prompt })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TextGenError::Status(response.status()));
        }

        let body = response.bytes().await?;
        let parsed: TextGenResponse = serde_json::from_slice(&body)
            .map_err(|e| TextGenError::Malformed(e.to_string()))?;

        if parsed.status != "success" {
            return Err(TextGenError::Rejected(parsed.status));
        }

        parsed
            .text
            .ok_or_else(|| TextGenError::Malformed("missing `text` field".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> TextGenClient {
        TextGenClient::new(&format!("{}/llm-api", server.uri()))
    }

    #[tokio::test]
    async fn test_generate_posts_prompt_as_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/llm-api"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({ "prompt": "what is rust" })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "status": "success", "text": "A language." })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let text = client_for(&server).generate("what is rust").await.unwrap();
        assert_eq!(text, "A language.");
    }

    #[tokio::test]
    async fn test_non_success_status_field_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "error" })))
            .mount(&server)
            .await;

        let err = client_for(&server).generate("x").await.unwrap_err();
        assert!(matches!(err, TextGenError::Rejected(ref s) if s == "error"));
    }

    #[tokio::test]
    async fn test_http_error_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
            .mount(&server)
            .await;

        let err = client_for(&server).generate("x").await.unwrap_err();
        assert!(matches!(err, TextGenError::Status(StatusCode::SERVICE_UNAVAILABLE)));
        assert_eq!(err.to_string(), "endpoint returned HTTP 503 Service Unavailable");
    }

    #[tokio::test]
    async fn test_missing_text_and_garbage_bodies_are_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/no-text"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "success" })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/garbage"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let no_text = TextGenClient::new(&format!("{}/no-text", server.uri()));
        let garbage = TextGenClient::new(&format!("{}/garbage", server.uri()));

        assert!(matches!(no_text.generate("x").await, Err(TextGenError::Malformed(_))));
        assert!(matches!(garbage.generate("x").await, Err(TextGenError::Malformed(_))));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_a_transport_error() {
        let client = TextGenClient::new("http://127.0.0.1:9/llm-api");
        let err = client.generate("x").await.unwrap_err();
        assert!(matches!(err, TextGenError::Transport(_)));
    }
}
