mod error;
mod llm;
pub mod search;
mod server;
pub mod tracing;
mod types;

pub use error::ApiError;
pub use llm::{openrouter::OpenRouterClient, BoxError, ChatRelay, ChatUpstream};
pub use search::{tavily::TavilyClient, SearchHit, SearchOutcome, SearchQuery, SearchUpstream};
pub use server::{create_router, AppState};
