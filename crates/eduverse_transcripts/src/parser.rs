//! # Watch Page Parser
//!
//! This module provides functionality to extract caption metadata and caption
//! text from YouTube watch pages.
//!
//! YouTube embeds a player-response JSON object in the page markup; the
//! caption track list lives under its `captionTracks` key. Caption bodies are
//! fetched separately as timed-text XML. Both are extracted with regexes, in
//! line with how the page is actually structured rather than any documented
//! API.

use std::{ops::Deref, sync::LazyLock};

use regex::Regex;
use serde::Deserialize;

use crate::error::TranscriptError;

static CAPTION_TRACKS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""captionTracks":(\[.*?\])"#).unwrap());

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<title>(.*?)</title>").unwrap());

static LENGTH_SECONDS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""lengthSeconds":"(\d+)""#).unwrap());

static PLAYABILITY_ERROR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""playabilityStatus":\s*\{"status":"ERROR""#).unwrap());

static CAPTION_TEXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<text[^>]*>(.*?)</text>").unwrap());

/// A single entry of the watch page's `captionTracks` array.
///
/// `base_url` arrives JSON-escaped (`&` for `&`); deserialization
/// restores the literal characters.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTrack {
    pub base_url: String,
    pub language_code: String,
}

/// Raw HTML of a YouTube watch page.
pub struct WatchPage(String);

impl Deref for WatchPage {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<String> for WatchPage {
    fn from(value: String) -> Self {
        WatchPage(value)
    }
}

impl WatchPage {
    pub fn new(html: String) -> Self {
        WatchPage(html)
    }

    /// Extracts the caption track list from the embedded player-response JSON.
    ///
    /// # Returns
    /// * `Ok(Vec<CaptionTrack>)` with at least one track.
    /// * `Err(TranscriptError::VideoUnavailable)` if the player reports an
    ///   error playability status.
    /// * `Err(TranscriptError::CaptionsDisabled)` if no `captionTracks` key is
    ///   present in the page.
    /// * `Err(TranscriptError::NoCaptionTracks)` if the array is empty.
    pub fn caption_tracks(&self) -> Result<Vec<CaptionTrack>, TranscriptError> {
        if PLAYABILITY_ERROR_RE.is_match(self) {
            return Err(TranscriptError::VideoUnavailable);
        }

        let raw = CAPTION_TRACKS_RE
            .captures(self)
            .and_then(|cap| cap.get(1))
            .ok_or(TranscriptError::CaptionsDisabled)?;

        let tracks: Vec<CaptionTrack> = serde_json::from_str(raw.as_str())
            .map_err(|_| TranscriptError::Parse("Failed to deserialize the captionTracks array"))?;

        if tracks.is_empty() {
            return Err(TranscriptError::NoCaptionTracks);
        }

        Ok(tracks)
    }

    /// Best-effort page title, with the trailing ` - YouTube` suffix removed.
    pub fn title(&self) -> Option<String> {
        let title = TITLE_RE.captures(self).and_then(|cap| cap.get(1))?;
        let title = unescape_entities(title.as_str());
        let title = title.strip_suffix(" - YouTube").unwrap_or(&title).trim();

        (!title.is_empty()).then(|| title.to_string())
    }

    /// Best-effort video duration from the embedded `lengthSeconds` field.
    pub fn duration_seconds(&self) -> Option<u64> {
        LENGTH_SECONDS_RE
            .captures(self)
            .and_then(|cap| cap.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }
}

/// Picks the caption track to transcribe: the first English track if one
/// exists, otherwise the first track.
pub fn preferred_track(tracks: &[CaptionTrack]) -> Option<&CaptionTrack> {
    tracks
        .iter()
        .find(|t| t.language_code.starts_with("en"))
        .or_else(|| tracks.first())
}

/// Extracts the text segments of a timed-text caption document.
///
/// Each `<text>` node is entity-unescaped and trimmed; empty segments are
/// dropped.
pub fn parse_caption_segments(xml: &str) -> Vec<String> {
    CAPTION_TEXT_RE
        .captures_iter(xml)
        .filter_map(|cap| cap.get(1))
        .map(|m| unescape_entities(m.as_str()))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Joins caption segments into a single transcript string with single spaces.
pub fn concat_segments(segments: &[String]) -> String {
    segments.join(" ").trim().to_string()
}

/// Unescapes the five HTML entities YouTube caption text actually uses.
pub fn unescape_entities(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}
