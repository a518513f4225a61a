use thiserror::Error;

use crate::model::attempt::ReadingAttempt;
use crate::model::stage::Stage;
use crate::model::story::Story;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Hard failures of the session state machine.
///
/// Unlike a not-enterable navigation request (a silent no-op, since the UI is
/// expected to have disabled the target), these indicate stale or misrouted
/// data crossing a story switch and must not be swallowed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no story selected, cannot record an attempt")]
    NoStorySelected,

    #[error("attempt story id {got} does not match selected story {expected}")]
    StoryMismatch { expected: String, got: String },
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Aggregate state of one guided reading session.
///
/// Holds the current stage, the selected story, and the latest reading
/// attempt. Fields are private: every change goes through one of the four
/// transition operations below, so readers can never observe a story/attempt
/// pair from two different selections.
///
/// The session is single-threaded by design; transitions apply synchronously
/// in event-delivery order and the type carries no internal locking.
#[derive(Debug, Clone, Default)]
pub struct Session {
    stage: Stage,
    story: Option<Story>,
    attempt: Option<ReadingAttempt>,
}

impl Session {
    /// Fresh session at the Home stage with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub fn story(&self) -> Option<&Story> {
        self.story.as_ref()
    }

    #[must_use]
    pub fn attempt(&self) -> Option<&ReadingAttempt> {
        self.attempt.as_ref()
    }

    /// Selects a story and moves to the introduction stage.
    ///
    /// Any prior attempt is cleared in the same call: a new story invalidates
    /// results produced for the old one, and the two fields change together so
    /// no reader sees a mixed pair.
    pub fn select_story(&mut self, story: Story) {
        self.story = Some(story);
        self.attempt = None;
        self.stage = Stage::Intro;
    }

    /// Moves to `target` iff its prerequisite holds; otherwise does nothing.
    ///
    /// Returns whether the transition was applied. A `false` is not an error:
    /// the UI mirrors the same predicate to disable unreachable targets, so a
    /// rejected request is just a disabled action arriving late.
    pub fn request_transition(&mut self, target: Stage) -> bool {
        if !target.is_enterable(self) {
            return false;
        }
        self.stage = target;
        true
    }

    /// Records a completed read-aloud result and advances past the assessment
    /// stage.
    ///
    /// The attempt must belong to the currently selected story. A mismatch
    /// means a stale completion callback crossed a story switch — the session
    /// is left untouched and the defect is surfaced to the caller.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoStorySelected` or `SessionError::StoryMismatch`
    /// without modifying the session.
    pub fn record_attempt(&mut self, attempt: ReadingAttempt) -> Result<(), SessionError> {
        let story = self.story.as_ref().ok_or(SessionError::NoStorySelected)?;
        if !attempt.is_for(story.id()) {
            return Err(SessionError::StoryMismatch {
                expected: story.id().to_string(),
                got: attempt.story_id().to_string(),
            });
        }

        self.attempt = Some(attempt);
        // Tutor always has a successor in the canonical order.
        if let Some(next) = Stage::Tutor.next() {
            self.stage = next;
        }
        Ok(())
    }

    /// Abandons the session: clears story and attempt, returns to the library.
    pub fn reset(&mut self) {
        self.story = None;
        self.attempt = None;
        self.stage = Stage::Library;
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{StoryCategory, StoryId};
    use crate::time::{fixed_now, Clock};
    use chrono::Duration;

    fn story(id: &str) -> Story {
        Story::new(
            StoryId::new(id),
            "title",
            2,
            vec!["第一段".to_string()],
            StoryCategory::Fable,
            format!("{id}.json"),
        )
        .unwrap()
    }

    fn attempt_for(id: &str) -> ReadingAttempt {
        ReadingAttempt::new(
            StoryId::new(id),
            92,
            80,
            55,
            vec!["狼".to_string()],
            "狐狸走過果園",
            fixed_now(),
        )
        .unwrap()
    }

    #[test]
    fn fresh_session_starts_at_home() {
        let session = Session::new();
        assert_eq!(session.stage(), Stage::Home);
        assert!(session.story().is_none());
        assert!(session.attempt().is_none());
    }

    #[test]
    fn select_story_moves_to_intro_and_clears_attempt() {
        let mut session = Session::new();
        session.select_story(story("fox-01"));
        session.record_attempt(attempt_for("fox-01")).unwrap();
        assert!(session.attempt().is_some());

        session.select_story(story("bear-02"));
        assert_eq!(session.stage(), Stage::Intro);
        assert_eq!(session.story().unwrap().id().as_str(), "bear-02");
        assert!(session.attempt().is_none());
    }

    #[test]
    fn gated_transition_ignored_without_story() {
        let mut session = Session::new();
        assert!(!session.request_transition(Stage::Vocab));
        assert_eq!(session.stage(), Stage::Home);
    }

    #[test]
    fn transition_to_current_stage_is_idempotent() {
        let mut session = Session::new();
        assert!(session.request_transition(Stage::Home));
        assert!(session.request_transition(Stage::Home));
        assert_eq!(session.stage(), Stage::Home);
    }

    #[test]
    fn record_attempt_advances_past_tutor() {
        let mut session = Session::new();
        session.select_story(story("fox-01"));
        session.request_transition(Stage::Tutor);

        session.record_attempt(attempt_for("fox-01")).unwrap();
        assert_eq!(session.stage(), Stage::Comprehension);
        let attempt = session.attempt().unwrap();
        assert_eq!(attempt.accuracy(), 92);
        assert_eq!(attempt.fluency(), 80);
        assert_eq!(attempt.cpm(), 55);
        assert_eq!(attempt.mispronounced_words(), ["狼"]);
    }

    #[test]
    fn mismatched_attempt_leaves_session_untouched() {
        let mut session = Session::new();
        session.select_story(story("fox-01"));
        session.request_transition(Stage::Tutor);

        let err = session.record_attempt(attempt_for("bear-02")).unwrap_err();
        assert_eq!(
            err,
            SessionError::StoryMismatch {
                expected: "fox-01".to_string(),
                got: "bear-02".to_string(),
            }
        );
        assert_eq!(session.stage(), Stage::Tutor);
        assert!(session.attempt().is_none());
    }

    #[test]
    fn record_attempt_without_story_fails() {
        let mut session = Session::new();
        let err = session.record_attempt(attempt_for("fox-01")).unwrap_err();
        assert_eq!(err, SessionError::NoStorySelected);
        assert_eq!(session.stage(), Stage::Home);
    }

    #[test]
    fn new_attempt_replaces_previous_for_same_story() {
        let mut clock = Clock::fixed(fixed_now());
        let mut session = Session::new();
        session.select_story(story("fox-01"));

        let first = ReadingAttempt::new(
            StoryId::new("fox-01"),
            92,
            80,
            55,
            vec!["狼".to_string()],
            "第一次",
            clock.now(),
        )
        .unwrap();
        session.record_attempt(first).unwrap();

        clock.advance(Duration::minutes(5));
        let second = ReadingAttempt::new(
            StoryId::new("fox-01"),
            70,
            60,
            40,
            Vec::new(),
            "第二次",
            clock.now(),
        )
        .unwrap();
        session.record_attempt(second).unwrap();

        let current = session.attempt().unwrap();
        assert_eq!(current.accuracy(), 70);
        assert_eq!(current.timestamp(), clock.now());
        assert!(current.timestamp() > fixed_now());
    }

    #[test]
    fn reset_returns_to_library_and_clears_state() {
        let mut session = Session::new();
        session.select_story(story("fox-01"));
        session.record_attempt(attempt_for("fox-01")).unwrap();

        session.reset();
        assert_eq!(session.stage(), Stage::Library);
        assert!(session.story().is_none());
        assert!(session.attempt().is_none());
        assert!(!session.request_transition(Stage::Vocab));
    }

    #[test]
    fn reset_then_select_matches_fresh_selection() {
        let mut fresh = Session::new();
        fresh.select_story(story("fox-01"));

        let mut recycled = Session::new();
        recycled.select_story(story("bear-02"));
        recycled.reset();
        recycled.select_story(story("fox-01"));

        assert_eq!(fresh.stage(), recycled.stage());
        assert_eq!(fresh.story(), recycled.story());
    }
}
