use thiserror::Error;

use crate::model::{AttemptError, SessionError, StoryError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Story(#[from] StoryError),
    #[error(transparent)]
    Attempt(#[from] AttemptError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
