use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::ids::StoryId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Shape violations in a read-aloud result handed in by the attempt producer.
///
/// These indicate a defect in the producing collaborator, not user input, so
/// they surface loudly instead of being normalized away.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AttemptError {
    #[error("attempt story id cannot be empty")]
    EmptyStoryId,

    #[error("accuracy must be in 0..=100, got {0}")]
    AccuracyOutOfRange(u8),

    #[error("fluency must be in 0..=100, got {0}")]
    FluencyOutOfRange(u8),
}

//
// ─── READING ATTEMPT ───────────────────────────────────────────────────────────
//

/// Scored result of one read-aloud pass over a story.
///
/// Produced externally by the speech-scoring collaborator; this type only
/// checks shape. The session holds at most one current attempt, and a new
/// attempt for the same story replaces the previous one wholesale — there is
/// no merging. Absence of an attempt is `Option::None` on the session, never
/// an attempt with null-ish fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingAttempt {
    story_id: StoryId,
    accuracy: u8,
    fluency: u8,
    cpm: u32,
    mispronounced_words: Vec<String>,
    transcription: String,
    timestamp: DateTime<Utc>,
}

impl ReadingAttempt {
    /// Creates a validated reading attempt.
    ///
    /// `transcription` may be empty (the learner produced no speech); it is
    /// still required so an empty reading stays distinguishable from "no
    /// attempt yet".
    ///
    /// # Errors
    ///
    /// Returns `AttemptError` when the story id is blank or a metric is
    /// outside its range.
    pub fn new(
        story_id: StoryId,
        accuracy: u8,
        fluency: u8,
        cpm: u32,
        mispronounced_words: Vec<String>,
        transcription: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, AttemptError> {
        if story_id.is_blank() {
            return Err(AttemptError::EmptyStoryId);
        }
        if accuracy > 100 {
            return Err(AttemptError::AccuracyOutOfRange(accuracy));
        }
        if fluency > 100 {
            return Err(AttemptError::FluencyOutOfRange(fluency));
        }

        Ok(Self {
            story_id,
            accuracy,
            fluency,
            cpm,
            mispronounced_words,
            transcription: transcription.into(),
            timestamp,
        })
    }

    #[must_use]
    pub fn story_id(&self) -> &StoryId {
        &self.story_id
    }

    /// Pronunciation accuracy, 0–100.
    #[must_use]
    pub fn accuracy(&self) -> u8 {
        self.accuracy
    }

    /// Reading fluency, 0–100.
    #[must_use]
    pub fn fluency(&self) -> u8 {
        self.fluency
    }

    /// Read-aloud speed in characters per minute.
    #[must_use]
    pub fn cpm(&self) -> u32 {
        self.cpm
    }

    /// Mispronounced words in the order they were flagged.
    #[must_use]
    pub fn mispronounced_words(&self) -> &[String] {
        &self.mispronounced_words
    }

    #[must_use]
    pub fn transcription(&self) -> &str {
        &self.transcription
    }

    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns true when this attempt was produced for the given story.
    #[must_use]
    pub fn is_for(&self, story_id: &StoryId) -> bool {
        &self.story_id == story_id
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
