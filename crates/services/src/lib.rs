#![forbid(unsafe_code)]

pub mod error;
pub mod registry;
pub mod story_source;
pub mod telemetry;
pub mod vocab;
pub mod workflow;

pub use tutor_core::Clock;

pub use error::{StorySourceError, TelemetryError};
pub use registry::StoryRegistry;
pub use story_source::{HttpStorySource, StorySource, StorySourceConfig};
pub use telemetry::{HttpSessionSink, SessionNotifier, SessionSink};
pub use vocab::VocabPlan;
pub use workflow::WorkflowController;
