use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct WebSearchRequest {
    pub query: Option<String>,
    pub search_depth: Option<String>,
    pub max_results: Option<u8>,
    pub include_domains: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct NcertSearchRequest {
    pub query: Option<String>,
    pub subject: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TranscriptParams {
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
}
