//! Main-flow session state: URL input, transcript text, loading flag.
//!
//! This flow is fully simulated and never contacts a server; the transcript
//! it produces is canned demo text. Lifecycle is explicit: a new transcribe
//! or a history selection overwrites whatever was there, and `reset` clears
//! everything.

use crate::error::{ClientError, Result};
use crate::history::HistoryEntry;

/// Canned transcript substituted for any URL in the simulated flow.
pub const DEMO_TRANSCRIPT: &str = "\
Hello everyone, welcome back to another episode. Today we're going to be \
discussing the fundamentals of machine learning and how it's transforming \
various industries.

Machine learning is a subset of artificial intelligence that enables \
computers to learn and improve from experience without being explicitly \
programmed.

There are three main types of machine learning: supervised learning, \
unsupervised learning, and reinforcement learning. Each type serves \
different purposes and is suitable for different kinds of problems.";

#[derive(Debug, Clone, Default)]
pub struct Session {
    video_url: String,
    transcript: Option<String>,
    loading: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn video_url(&self) -> &str {
        &self.video_url
    }

    pub fn transcript(&self) -> Option<&str> {
        self.transcript.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.video_url = url.into();
    }

    /// Simulated transcription of the current URL. Rejects a blank URL
    /// before doing anything; otherwise replaces the transcript with the
    /// canned text and ends with the loading flag cleared.
    pub fn transcribe(&mut self) -> Result<&str> {
        if self.video_url.trim().is_empty() {
            return Err(ClientError::MissingInput);
        }
        self.loading = true;
        self.transcript = Some(DEMO_TRANSCRIPT.to_string());
        self.loading = false;
        Ok(self.transcript.as_deref().unwrap_or_default())
    }

    /// Selecting a history entry always overwrites the URL and substitutes
    /// that entry's canned text, regardless of loading state.
    pub fn apply_history_entry(&mut self, entry: &HistoryEntry) {
        self.video_url = entry.url.clone();
        self.transcript = Some(format!(
            "Sample transcription for: {}\n\nThis is a mock transcription that \
             would normally be generated from the video content.",
            entry.title
        ));
        self.loading = false;
    }

    /// Explicit lifecycle reset: back to an empty session.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
