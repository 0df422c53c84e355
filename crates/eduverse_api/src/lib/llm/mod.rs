pub mod openrouter;

use std::{fmt::Debug, future::Future};

use bytes::Bytes;
use futures::stream::BoxStream;
use serde_json::Value;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// How a chat completion response travels back to the client: either relayed
/// chunk-by-chunk as the upstream bytes arrive, or buffered whole.
pub enum ChatRelay {
    Buffered {
        content_type: String,
        body: Bytes,
    },
    Stream {
        content_type: String,
        body: BoxStream<'static, Result<Bytes, BoxError>>,
    },
}

pub trait ChatUpstream {
    type Error: Debug;

    /// Forwards a finalized chat-completions request body upstream.
    ///
    /// The caller has already injected the default model; the body goes out
    /// verbatim. The `stream` flag in the body decides the relay mode.
    fn relay_chat(
        &self,
        body: Value,
    ) -> impl Future<Output = Result<ChatRelay, Self::Error>> + Send;
}
