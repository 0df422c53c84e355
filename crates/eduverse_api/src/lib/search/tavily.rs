use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{SearchHit, SearchOutcome, SearchQuery, SearchUpstream};

#[derive(Debug, Clone)]
pub struct TavilyClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TavilyError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Serialize)]
struct TavilySearchBody<'a> {
    api_key: &'a str,
    query: &'a str,
    search_depth: &'a str,
    max_results: u8,
    include_answer: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    include_domains: Option<&'a [String]>,
}

#[derive(Debug, Deserialize)]
struct TavilySearchResponse {
    answer: Option<String>,
    #[serde(default)]
    results: Vec<TavilySearchResult>,
}

#[derive(Debug, Deserialize)]
struct TavilySearchResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    score: f64,
}

impl TavilyClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://api.tavily.com".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    async fn send_search_request(
        &self,
        query: &SearchQuery,
    ) -> Result<TavilySearchResponse, TavilyError> {
        let body = TavilySearchBody {
            api_key: &self.api_key,
            query: &query.query,
            search_depth: &query.search_depth,
            max_results: query.max_results,
            include_answer: true,
            include_domains: (!query.include_domains.is_empty())
                .then_some(query.include_domains.as_slice()),
        };

        let resp = self
            .client
            .post(format!("{}/search", self.base_url))
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(TavilyError::Api { status, message });
        }

        Ok(resp.json::<TavilySearchResponse>().await?)
    }
}

impl SearchUpstream for TavilyClient {
    type Error = TavilyError;

    #[tracing::instrument(skip(self))]
    async fn search(&self, query: SearchQuery) -> Result<SearchOutcome, Self::Error> {
        let response = self.send_search_request(&query).await?;

        let results = response
            .results
            .into_iter()
            .map(|r| SearchHit {
                title: r.title,
                url: r.url,
                content: r.content,
                score: r.score,
            })
            .collect();

        Ok(SearchOutcome {
            answer: response.answer,
            results,
        })
    }
}
