use std::sync::{Arc, Mutex};

use bytes::Bytes;
use eduverse_api::{BoxError, ChatRelay, ChatUpstream};
use futures::StreamExt;
use serde_json::Value;

#[derive(Clone)]
pub struct MockChatUpstream {
    pub buffered_body: String,
    pub stream_chunks: Vec<String>,
    pub calls: Arc<Mutex<Vec<Value>>>,
    pub fail_with: Option<String>,
}

impl MockChatUpstream {
    pub fn new(buffered_body: &str) -> Self {
        Self {
            buffered_body: buffered_body.to_string(),
            stream_chunks: vec![
                "data: {\"choices\":[{\"delta\":{\"content\":\"Hi\"}}]}\n\n".to_string(),
                "data: [DONE]\n\n".to_string(),
            ],
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn with_stream_chunks(mut self, chunks: &[&str]) -> Self {
        self.stream_chunks = chunks.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::new("")
        }
    }
}

impl ChatUpstream for MockChatUpstream {
    type Error = anyhow::Error;

    async fn relay_chat(&self, body: Value) -> Result<ChatRelay, Self::Error> {
        self.calls.lock().unwrap().push(body.clone());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }

        let wants_stream = body
            .get("stream")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        if wants_stream {
            let chunks = self.stream_chunks.clone();
            let stream = futures::stream::iter(
                chunks
                    .into_iter()
                    .map(|c| Ok::<Bytes, BoxError>(Bytes::from(c))),
            )
            .boxed();

            return Ok(ChatRelay::Stream {
                content_type: "text/event-stream".into(),
                body: stream,
            });
        }

        Ok(ChatRelay::Buffered {
            content_type: "application/json".into(),
            body: Bytes::from(self.buffered_body.clone()),
        })
    }
}
