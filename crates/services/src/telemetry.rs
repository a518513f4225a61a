use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use tutor_core::model::{StoryId, StudentId};

use crate::error::TelemetryError;
use crate::story_source::StorySourceConfig;

/// Fire-and-forget sink for session-start notifications.
#[async_trait]
pub trait SessionSink: Send + Sync {
    /// Records that a student began a story.
    async fn record_session(
        &self,
        student: &StudentId,
        story: &StoryId,
    ) -> Result<(), TelemetryError>;
}

/// HTTP sink posting to the learning service's `/api/learning-sessions`.
#[derive(Clone)]
pub struct HttpSessionSink {
    client: Client,
    base_url: String,
}

impl HttpSessionSink {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(StorySourceConfig::from_env().base_url)
    }

    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct SessionCreateDto<'a> {
    student_id: &'a str,
    story_id: &'a str,
}

#[async_trait]
impl SessionSink for HttpSessionSink {
    async fn record_session(
        &self,
        student: &StudentId,
        story: &StoryId,
    ) -> Result<(), TelemetryError> {
        let url = format!(
            "{}/api/learning-sessions",
            self.base_url.trim_end_matches('/')
        );
        let payload = SessionCreateDto {
            student_id: student.as_str(),
            story_id: story.as_str(),
        };

        let response = self.client.post(url).json(&payload).send().await?;
        if !response.status().is_success() {
            return Err(TelemetryError::HttpStatus(response.status()));
        }
        Ok(())
    }
}

/// Swallowing wrapper used at story-selection time.
///
/// Telemetry failures must never block stage progression, so `notify` logs a
/// warning and otherwise discards the error. The sink is optional; without
/// one, `notify` is a no-op.
#[derive(Clone)]
pub struct SessionNotifier {
    sink: Option<Arc<dyn SessionSink>>,
    student: StudentId,
}

impl SessionNotifier {
    #[must_use]
    pub fn new(sink: Option<Arc<dyn SessionSink>>, student: StudentId) -> Self {
        Self { sink, student }
    }

    #[must_use]
    pub fn disabled(student: StudentId) -> Self {
        Self::new(None, student)
    }

    /// Notifies the sink that the student began `story`.
    pub async fn notify(&self, story: &StoryId) {
        let Some(sink) = &self.sink else {
            return;
        };
        if let Err(err) = sink.record_session(&self.student, story).await {
            tracing::warn!(student = %self.student, story = %story, "session telemetry failed: {err}");
        }
    }
}
