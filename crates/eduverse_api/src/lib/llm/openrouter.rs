use bytes::Bytes;
use futures::{StreamExt, TryStreamExt};
use reqwest::{header, Client};
use serde_json::Value;

use super::{BoxError, ChatRelay, ChatUpstream};

#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum OpenRouterError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

impl OpenRouterClient {
    // OpenRouter attributes traffic via these two headers
    const REFERER: &str = "https://eduverse.app";
    const APP_TITLE: &str = "EduVerse";

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://openrouter.ai/api/v1".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    async fn send_chat_request(&self, body: &Value) -> Result<reqwest::Response, OpenRouterError> {
        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .header("HTTP-Referer", Self::REFERER)
            .header("X-Title", Self::APP_TITLE)
            .json(body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(OpenRouterError::Api { status, message });
        }

        Ok(resp)
    }
}

impl ChatUpstream for OpenRouterClient {
    type Error = OpenRouterError;

    async fn relay_chat(&self, body: Value) -> Result<ChatRelay, Self::Error> {
        let wants_stream = body
            .get("stream")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        let resp = self.send_chat_request(&body).await?;

        if wants_stream {
            let stream = resp
                .bytes_stream()
                .map_err(|e| Box::new(e) as BoxError)
                .boxed();

            return Ok(ChatRelay::Stream {
                content_type: "text/event-stream".into(),
                body: stream,
            });
        }

        let content_type = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/json")
            .to_string();
        let body: Bytes = resp.bytes().await?;

        Ok(ChatRelay::Buffered { content_type, body })
    }
}
