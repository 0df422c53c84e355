use std::future::Future;

use serde::Serialize;

use crate::TranscriptError;

/// A fetched transcript plus the metadata scraped alongside it.
#[derive(Debug, Clone, Serialize)]
pub struct VideoTranscript {
    pub video_id: String,
    pub title: String,
    pub transcript: String,
    pub language: String,
    pub duration_seconds: u64,
}

pub trait TranscriptSource {
    fn fetch_transcript(
        &self,
        video_id: &str,
    ) -> impl Future<Output = Result<VideoTranscript, TranscriptError>> + Send;
}

impl<T: TranscriptSource + Send + Sync> TranscriptSource for &T {
    async fn fetch_transcript(&self, video_id: &str) -> Result<VideoTranscript, TranscriptError> {
        (**self).fetch_transcript(video_id).await
    }
}
