//! Axum router and request handlers.
//!
//! Every endpoint is a stateless request/response transform over one of the
//! upstream seams (`ChatUpstream`, `SearchUpstream`, `TranscriptSource`). The
//! seams keep the router testable with in-process mocks.

use axum::{
    body::Body,
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use eduverse_transcripts::{TranscriptError, TranscriptSource};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    error::ApiError,
    llm::{ChatRelay, ChatUpstream},
    search::{ncert, SearchQuery, SearchUpstream},
    types::{NcertSearchRequest, TranscriptParams, WebSearchRequest},
};

const DEFAULT_SEARCH_DEPTH: &str = "basic";
const DEFAULT_MAX_RESULTS: u8 = 5;

/// Per-process state shared by all handlers.
///
/// Clients whose API key is unconfigured are absent; the affected endpoints
/// answer 500 per request instead of failing startup.
#[derive(Clone)]
pub struct AppState<C, S, T> {
    pub chat: Option<C>,
    pub chat_model: String,
    pub search: Option<S>,
    pub transcripts: T,
}

pub fn create_router<C, S, T>(state: AppState<C, S, T>) -> Router
where
    C: ChatUpstream + Clone + Send + Sync + 'static,
    S: SearchUpstream + Clone + Send + Sync + 'static,
    T: TranscriptSource + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/api/openrouter", post(relay_chat::<C, S, T>))
        .route("/api/web-search", post(web_search::<C, S, T>))
        .route("/api/ncert-search", post(ncert_search::<C, S, T>))
        .route("/api/youtube-transcript", get(youtube_transcript::<C, S, T>))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// `POST /api/openrouter` — forwards the body to the chat-completions
/// upstream, injecting the default model when none is given. With
/// `stream: true` the upstream byte stream is relayed as it arrives.
#[tracing::instrument(skip_all)]
async fn relay_chat<C, S, T>(
    State(state): State<AppState<C, S, T>>,
    Json(mut body): Json<Value>,
) -> Result<Response, ApiError>
where
    C: ChatUpstream + Clone + Send + Sync + 'static,
    S: SearchUpstream + Clone + Send + Sync + 'static,
    T: TranscriptSource + Clone + Send + Sync + 'static,
{
    let chat = state
        .chat
        .as_ref()
        .ok_or(ApiError::NotConfigured("OPENROUTER_API_KEY"))?;

    let Some(object) = body.as_object_mut() else {
        return Err(ApiError::MissingField("messages"));
    };
    if object.get("model").map_or(true, Value::is_null) {
        object.insert("model".into(), Value::String(state.chat_model.clone()));
    }

    let relay = chat.relay_chat(body).await.map_err(|e| {
        tracing::error!(error = ?e, "Chat completion relay failed");
        ApiError::ChatUpstream
    })?;

    let response = match relay {
        ChatRelay::Buffered { content_type, body } => {
            ([(header::CONTENT_TYPE, content_type)], Body::from(body)).into_response()
        }
        ChatRelay::Stream { content_type, body } => (
            [(header::CONTENT_TYPE, content_type)],
            Body::from_stream(body),
        )
            .into_response(),
    };

    Ok(response)
}

/// `POST /api/web-search` — general web search through the search upstream.
#[tracing::instrument(skip(state))]
async fn web_search<C, S, T>(
    State(state): State<AppState<C, S, T>>,
    Json(request): Json<WebSearchRequest>,
) -> Result<Json<Value>, ApiError>
where
    C: ChatUpstream + Clone + Send + Sync + 'static,
    S: SearchUpstream + Clone + Send + Sync + 'static,
    T: TranscriptSource + Clone + Send + Sync + 'static,
{
    let query = required_query(request.query.as_deref())?;
    let search = state
        .search
        .as_ref()
        .ok_or(ApiError::NotConfigured("TAVILY_API_KEY"))?;

    let outcome = search
        .search(SearchQuery {
            query: query.to_string(),
            search_depth: request
                .search_depth
                .unwrap_or_else(|| DEFAULT_SEARCH_DEPTH.into()),
            max_results: request.max_results.unwrap_or(DEFAULT_MAX_RESULTS),
            include_domains: request.include_domains.unwrap_or_default(),
        })
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "Web search request failed");
            ApiError::SearchUpstream
        })?;

    Ok(Json(json!({
        "answer": outcome.answer,
        "results": outcome.results,
        "query": query,
    })))
}

/// `POST /api/ncert-search` — curriculum search: fixed NCERT/CBSE query terms
/// and an official-portal domain allow-list.
#[tracing::instrument(skip(state))]
async fn ncert_search<C, S, T>(
    State(state): State<AppState<C, S, T>>,
    Json(request): Json<NcertSearchRequest>,
) -> Result<Json<Value>, ApiError>
where
    C: ChatUpstream + Clone + Send + Sync + 'static,
    S: SearchUpstream + Clone + Send + Sync + 'static,
    T: TranscriptSource + Clone + Send + Sync + 'static,
{
    let query = required_query(request.query.as_deref())?;
    let search = state
        .search
        .as_ref()
        .ok_or(ApiError::NotConfigured("TAVILY_API_KEY"))?;

    let outcome = search
        .search(SearchQuery {
            query: ncert::build_ncert_query(query, request.subject.as_deref()),
            search_depth: ncert::NCERT_SEARCH_DEPTH.into(),
            max_results: ncert::NCERT_MAX_RESULTS,
            include_domains: ncert::ncert_domains(),
        })
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "NCERT search request failed");
            ApiError::SearchUpstream
        })?;

    Ok(Json(json!({
        "answer": outcome.answer,
        "results": outcome.results,
        "query": query,
        "is_ncert": true,
        "source": ncert::NCERT_SOURCE_TAG,
    })))
}

/// `GET /api/youtube-transcript?videoId=…` — fetches and flattens the caption
/// track of a video.
#[tracing::instrument(skip(state))]
async fn youtube_transcript<C, S, T>(
    State(state): State<AppState<C, S, T>>,
    Query(params): Query<TranscriptParams>,
) -> Result<Json<Value>, ApiError>
where
    C: ChatUpstream + Clone + Send + Sync + 'static,
    S: SearchUpstream + Clone + Send + Sync + 'static,
    T: TranscriptSource + Clone + Send + Sync + 'static,
{
    let video_id = params
        .video_id
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(ApiError::MissingField("videoId"))?;

    let transcript = state
        .transcripts
        .fetch_transcript(video_id)
        .await
        .inspect_err(|e| tracing::error!(error = ?e, video_id, "Failed to fetch transcript"))?;

    if transcript.transcript.trim().is_empty() {
        return Err(TranscriptError::EmptyTranscript.into());
    }

    Ok(Json(json!({
        "success": true,
        "title": transcript.title,
        "videoId": transcript.video_id,
        "transcript": transcript.transcript,
        "language": transcript.language,
        "duration": transcript.duration_seconds,
    })))
}

fn required_query(query: Option<&str>) -> Result<&str, ApiError> {
    query
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or(ApiError::MissingField("query"))
}
