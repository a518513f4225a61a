use std::sync::Arc;

use tutor_core::model::{ReadingAttempt, Session, SessionError, Stage, Story, StoryId};

use crate::registry::StoryRegistry;

/// Sole authority over guided-session state.
///
/// Owns the `Session` aggregate and mediates every stage transition; stage
/// renderers receive `&Session` plus completion values, never mutable access.
/// Synchronous and single-threaded: transitions apply in the order their
/// triggering events arrive, and nothing here blocks or polls — the suspension
/// points live inside the external collaborators.
#[derive(Clone)]
pub struct WorkflowController {
    session: Session,
    registry: Arc<StoryRegistry>,
}

impl WorkflowController {
    /// Creates a controller over a fresh session at the Home stage.
    #[must_use]
    pub fn new(registry: Arc<StoryRegistry>) -> Self {
        Self {
            session: Session::new(),
            registry,
        }
    }

    /// Read-only snapshot of the current session.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn registry(&self) -> &StoryRegistry {
        &self.registry
    }

    /// Selects a resolved story: sets it, clears any prior attempt, and moves
    /// to the introduction stage. Story and attempt change in the same call so
    /// readers never observe a pair from two different selections.
    pub fn select_story(&mut self, story: Story) {
        self.session.select_story(story);
    }

    /// Resolves an id against the registry and selects the story.
    ///
    /// Returns `false` when the id is unknown; the session is left unchanged,
    /// which is "selection failed" rather than an error.
    pub fn select_story_id(&mut self, id: &StoryId) -> bool {
        match self.registry.get(id) {
            Some(story) => {
                let story = story.clone();
                self.session.select_story(story);
                true
            }
            None => false,
        }
    }

    /// Requests navigation to `target`.
    ///
    /// Applied iff the stage's prerequisite holds against the current session;
    /// otherwise a silent no-op. Returns whether the stage changed — callers
    /// that mirror the gating (disabled buttons) can ignore the result.
    pub fn request_transition(&mut self, target: Stage) -> bool {
        self.session.request_transition(target)
    }

    /// Accepts a completed read-aloud result from the assessment stage and
    /// advances to the stage after it in the canonical order.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` when no story is selected or the attempt belongs
    /// to a different story (a stale callback that crossed a story switch);
    /// the session is left unchanged in both cases.
    pub fn record_attempt(&mut self, attempt: ReadingAttempt) -> Result<(), SessionError> {
        self.session.record_attempt(attempt)
    }

    /// Abandons the session and returns to the library.
    pub fn reset(&mut self) {
        self.session.reset();
    }
}
