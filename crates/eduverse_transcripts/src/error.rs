#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    #[error("Failed to fetch video data from YouTube")]
    Http(#[from] reqwest::Error),
    #[error("This video is unavailable or private")]
    VideoUnavailable,
    #[error("Captions are disabled for this video")]
    CaptionsDisabled,
    #[error("No caption tracks are available for this video")]
    NoCaptionTracks,
    #[error("No transcript content found for this video")]
    EmptyTranscript,
    #[error("Failed to parse video data: {0}")]
    Parse(&'static str),
}
