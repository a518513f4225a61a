use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::StoryId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoryError {
    #[error("story id cannot be empty")]
    EmptyId,

    #[error("story title cannot be empty")]
    EmptyTitle,

    #[error("story level must be >= 1")]
    InvalidLevel,

    #[error("story must contain at least one paragraph")]
    EmptyContent,
}

//
// ─── CATEGORY ──────────────────────────────────────────────────────────────────
//

/// Closed set of reading-material categories shown in the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoryCategory {
    Fable,
    Science,
    History,
    Daily,
}

impl StoryCategory {
    /// Display label for the category.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            StoryCategory::Fable => "Fable",
            StoryCategory::Science => "Science",
            StoryCategory::History => "History",
            StoryCategory::Daily => "Daily",
        }
    }
}

//
// ─── STORY ─────────────────────────────────────────────────────────────────────
//

/// Immutable reference to one reading text.
///
/// Stories are created by the registry at catalog load time and only ever
/// borrowed afterwards; the session holds a clone of the selected one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    id: StoryId,
    title: String,
    level: u8,
    paragraphs: Vec<String>,
    category: StoryCategory,
    source: String,
}

impl Story {
    /// Creates a validated story.
    ///
    /// `source` is the content-source reference (the backing filename on the
    /// story service); it is carried opaquely and never dereferenced here.
    ///
    /// # Errors
    ///
    /// Returns `StoryError` when the id or title is blank, the level is zero,
    /// or no paragraphs are provided.
    pub fn new(
        id: StoryId,
        title: impl Into<String>,
        level: u8,
        paragraphs: Vec<String>,
        category: StoryCategory,
        source: impl Into<String>,
    ) -> Result<Self, StoryError> {
        if id.is_blank() {
            return Err(StoryError::EmptyId);
        }
        let title = title.into();
        if title.trim().is_empty() {
            return Err(StoryError::EmptyTitle);
        }
        if level == 0 {
            return Err(StoryError::InvalidLevel);
        }
        if paragraphs.is_empty() {
            return Err(StoryError::EmptyContent);
        }

        Ok(Self {
            id,
            title,
            level,
            paragraphs,
            category,
            source: source.into(),
        })
    }

    #[must_use]
    pub fn id(&self) -> &StoryId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Difficulty level, starting at 1.
    #[must_use]
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Paragraphs in reading order.
    #[must_use]
    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    #[must_use]
    pub fn category(&self) -> StoryCategory {
        self.category
    }

    /// Content-source reference on the story service.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Total character count across all paragraphs, whitespace excluded.
    ///
    /// Used by report views to relate cpm to text length.
    #[must_use]
    pub fn character_count(&self) -> usize {
        self.paragraphs
            .iter()
            .map(|p| p.chars().filter(|c| !c.is_whitespace()).count())
            .sum()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
