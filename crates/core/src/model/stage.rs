use crate::model::session::Session;

//
// ─── STAGE ─────────────────────────────────────────────────────────────────────
//

/// One named step of the guided reading session.
///
/// The enumeration is totally ordered: derive order matches the canonical
/// guided sequence, so `Stage::Home < Stage::Report` holds and `next` /
/// `previous` walk the declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    Home,
    Library,
    Intro,
    Tutor,
    Comprehension,
    Vocab,
    FullReading,
    Report,
}

impl Default for Stage {
    fn default() -> Self {
        Stage::Home
    }
}

impl Stage {
    /// All stages in canonical order.
    pub const ALL: [Stage; 8] = [
        Stage::Home,
        Stage::Library,
        Stage::Intro,
        Stage::Tutor,
        Stage::Comprehension,
        Stage::Vocab,
        Stage::FullReading,
        Stage::Report,
    ];

    /// Display label for navigation.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Stage::Home => "Home",
            Stage::Library => "Library",
            Stage::Intro => "Introduction",
            Stage::Tutor => "Read Aloud",
            Stage::Comprehension => "Comprehension",
            Stage::Vocab => "Vocabulary",
            Stage::FullReading => "Full Reading",
            Stage::Report => "Report",
        }
    }

    /// Position in the numbered step navigation (1-based).
    ///
    /// Home and Library are chrome around the guided sequence and carry no
    /// step number.
    #[must_use]
    pub fn step_number(self) -> Option<u8> {
        match self {
            Stage::Home | Stage::Library => None,
            Stage::Intro => Some(1),
            Stage::Tutor => Some(2),
            Stage::Comprehension => Some(3),
            Stage::Vocab => Some(4),
            Stage::FullReading => Some(5),
            Stage::Report => Some(6),
        }
    }

    /// Whether entering this stage requires a selected story.
    ///
    /// Report stays reachable without one so the learner can revisit a past
    /// report after abandoning a story.
    #[must_use]
    pub fn requires_story(self) -> bool {
        matches!(
            self,
            Stage::Intro | Stage::Tutor | Stage::Comprehension | Stage::Vocab | Stage::FullReading
        )
    }

    /// Successor in the guided sequence, if any.
    ///
    /// Home and Report are terminal: reaching the library from Home is an
    /// explicit navigation jump, not sequence adjacency.
    #[must_use]
    pub fn next(self) -> Option<Stage> {
        if self == Stage::Home {
            return None;
        }
        let idx = Stage::ALL.iter().position(|s| *s == self)?;
        Stage::ALL.get(idx + 1).copied()
    }

    /// Predecessor in the canonical order, if any.
    #[must_use]
    pub fn previous(self) -> Option<Stage> {
        let idx = Stage::ALL.iter().position(|s| *s == self)?;
        idx.checked_sub(1).and_then(|i| Stage::ALL.get(i)).copied()
    }

    /// Prerequisite predicate: true iff this stage may be entered given the
    /// session's current data. Pure; evaluation cannot fail, only yield false.
    #[must_use]
    pub fn is_enterable(self, session: &Session) -> bool {
        !self.requires_story() || session.story().is_some()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
