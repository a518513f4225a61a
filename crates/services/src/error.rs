//! Shared error types for the services crate.

use thiserror::Error;

use tutor_core::model::StoryError;

/// Errors emitted by story-source adapters.
///
/// Transport failures are surfaced unchanged; the core never retries, the UI
/// owns the retry affordance.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorySourceError {
    #[error("story service returned status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("story service returned an invalid story: {0}")]
    InvalidStory(#[from] StoryError),
}

/// Errors emitted by session-telemetry sinks.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TelemetryError {
    #[error("telemetry endpoint returned status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
