//! # YouTube Transcript Retrieval
//!
//! This crate provides functionality for fetching and parsing closed-caption
//! transcripts from YouTube watch pages.
//!
//! Extraction is regex-based and targets the JSON YouTube embeds in its watch
//! page markup, so it is inherently tied to an unversioned internal format.
//! The parsing layer is kept separate from the fetching layer so the brittle
//! parts stay unit-testable against captured markup.

mod error;
pub mod parser;
mod scraper;
mod source;

pub use error::TranscriptError;
pub use scraper::TranscriptScraper;
pub use source::{TranscriptSource, VideoTranscript};
