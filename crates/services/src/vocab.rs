use rand::rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

use tutor_core::model::ReadingAttempt;

/// Practice list for the vocabulary stage.
///
/// Built from the attempt's mispronounced words: duplicates are dropped while
/// first-seen order is kept, so a word the learner stumbled over repeatedly is
/// still drilled once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabPlan {
    words: Vec<String>,
}

impl VocabPlan {
    /// Builds the plan from a completed reading attempt.
    #[must_use]
    pub fn from_attempt(attempt: &ReadingAttempt) -> Self {
        let mut seen = HashSet::new();
        let words = attempt
            .mispronounced_words()
            .iter()
            .filter(|w| seen.insert(w.as_str()))
            .cloned()
            .collect();
        Self { words }
    }

    /// Randomizes drill order.
    #[must_use]
    pub fn shuffled(mut self) -> Self {
        self.words.shuffle(&mut rng());
        self
    }

    /// Words in drill order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.words.len()
    }

    /// True when the attempt had no mispronunciations; the vocabulary stage
    /// renders a "perfect reading" view instead of a drill.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
