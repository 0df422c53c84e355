use crate::{
    error::TranscriptError,
    parser::{concat_segments, parse_caption_segments, preferred_track, WatchPage},
    source::{TranscriptSource, VideoTranscript},
};

/// Fetches transcripts by scraping the watch page directly.
#[derive(Debug, Clone)]
pub struct TranscriptScraper {
    client: reqwest::Client,
    base_url: String,
}

impl Default for TranscriptScraper {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

impl TranscriptScraper {
    const YOUTUBE_BASE_URL: &str = "https://www.youtube.com";

    pub fn new(client: reqwest::Client) -> Self {
        TranscriptScraper {
            client,
            base_url: Self::YOUTUBE_BASE_URL.into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_watch_page(&self, video_id: &str) -> Result<WatchPage, TranscriptError> {
        let html = self
            .client
            .get(format!("{}/watch", self.base_url))
            .query(&[("v", video_id)])
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await?
            .text()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to fetch watch page"))?;

        Ok(html.into())
    }

    #[tracing::instrument(skip(self, url))]
    async fn fetch_caption_xml(&self, url: &str) -> Result<String, TranscriptError> {
        let xml = self
            .client
            .get(url)
            .send()
            .await?
            .text()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to fetch caption track"))?;

        Ok(xml)
    }
}

impl TranscriptSource for TranscriptScraper {
    #[tracing::instrument(skip(self))]
    async fn fetch_transcript(&self, video_id: &str) -> Result<VideoTranscript, TranscriptError> {
        let page = self.fetch_watch_page(video_id).await?;

        let tracks = page.caption_tracks()?;
        let track = preferred_track(&tracks).ok_or(TranscriptError::NoCaptionTracks)?;

        let xml = self.fetch_caption_xml(&track.base_url).await?;
        let segments = parse_caption_segments(&xml);
        let transcript = concat_segments(&segments);

        if transcript.is_empty() {
            return Err(TranscriptError::EmptyTranscript);
        }

        Ok(VideoTranscript {
            video_id: video_id.to_string(),
            title: page.title().unwrap_or_else(|| "YouTube Video".to_string()),
            transcript,
            language: track.language_code.clone(),
            duration_seconds: page.duration_seconds().unwrap_or(0),
        })
    }
}
