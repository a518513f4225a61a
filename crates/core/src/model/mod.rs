mod attempt;
mod ids;
mod session;
mod stage;
mod story;

pub use attempt::{AttemptError, ReadingAttempt};
pub use ids::{StoryId, StudentId};
pub use session::{Session, SessionError};
pub use stage::Stage;
pub use story::{Story, StoryCategory, StoryError};
