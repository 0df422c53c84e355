use std::sync::{Arc, Mutex};

use eduverse_transcripts::{TranscriptError, TranscriptSource, VideoTranscript};

#[derive(Clone)]
pub struct MockTranscriptSource {
    pub response: VideoTranscript,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<fn() -> TranscriptError>,
}

impl MockTranscriptSource {
    pub fn new(transcript: &str) -> Self {
        Self {
            response: VideoTranscript {
                video_id: String::new(),
                title: "Mock Video".to_string(),
                transcript: transcript.to_string(),
                language: "en".to_string(),
                duration_seconds: 754,
            },
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(make_error: fn() -> TranscriptError) -> Self {
        Self {
            fail_with: Some(make_error),
            ..Self::new("")
        }
    }
}

impl TranscriptSource for MockTranscriptSource {
    async fn fetch_transcript(&self, video_id: &str) -> Result<VideoTranscript, TranscriptError> {
        self.calls.lock().unwrap().push(video_id.to_string());
        if let Some(make_error) = self.fail_with {
            return Err(make_error());
        }

        let mut response = self.response.clone();
        response.video_id = video_id.to_string();
        Ok(response)
    }
}
