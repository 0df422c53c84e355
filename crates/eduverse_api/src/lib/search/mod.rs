pub mod ncert;
pub mod tavily;

use std::{fmt::Debug, future::Future};

use serde::Serialize;

/// Parameters of a single upstream search call.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub query: String,
    pub search_depth: String,
    pub max_results: u8,
    pub include_domains: Vec<String>,
}

/// The projected subset of an upstream search result the API exposes.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub content: String,
    pub score: f64,
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub answer: Option<String>,
    pub results: Vec<SearchHit>,
}

pub trait SearchUpstream {
    type Error: Debug;

    fn search(
        &self,
        query: SearchQuery,
    ) -> impl Future<Output = Result<SearchOutcome, Self::Error>> + Send;
}
