use std::env;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use tutor_core::model::{Story, StoryCategory, StoryError, StoryId};

use crate::error::StorySourceError;

/// Read-only source of reading materials.
///
/// Implemented over HTTP in production and by in-memory fakes in tests. The
/// workflow core consumes finished `Story` values and never retries a failed
/// fetch.
#[async_trait]
pub trait StorySource: Send + Sync {
    /// Fetches the full catalog in the source's canonical order.
    async fn list_stories(&self) -> Result<Vec<Story>, StorySourceError>;

    /// Resolves one story; `Ok(None)` when the id is unknown.
    async fn get_story(&self, id: &StoryId) -> Result<Option<Story>, StorySourceError>;
}

#[derive(Clone, Debug)]
pub struct StorySourceConfig {
    pub base_url: String,
}

impl StorySourceConfig {
    /// Reads the story-service location from `TUTOR_API_BASE_URL`, falling
    /// back to the local development server.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            env::var("TUTOR_API_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".into());
        Self { base_url }
    }
}

/// HTTP adapter over the story service's `/api/stories` routes.
#[derive(Clone)]
pub struct HttpStorySource {
    client: Client,
    config: StorySourceConfig,
}

impl HttpStorySource {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(StorySourceConfig::from_env())
    }

    #[must_use]
    pub fn new(config: StorySourceConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl StorySource for HttpStorySource {
    async fn list_stories(&self) -> Result<Vec<Story>, StorySourceError> {
        let response = self.client.get(self.url("/api/stories")).send().await?;
        if !response.status().is_success() {
            return Err(StorySourceError::HttpStatus(response.status()));
        }

        let body: Vec<StoryDto> = response.json().await?;
        body.into_iter()
            .map(|dto| dto.into_story().map_err(StorySourceError::from))
            .collect()
    }

    async fn get_story(&self, id: &StoryId) -> Result<Option<Story>, StorySourceError> {
        let response = self
            .client
            .get(self.url(&format!("/api/stories/{id}")))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(StorySourceError::HttpStatus(response.status()));
        }

        let dto: StoryDto = response.json().await?;
        Ok(Some(dto.into_story()?))
    }
}

/// Wire shape of a story on the service.
#[derive(Debug, Deserialize)]
struct StoryDto {
    id: String,
    title: String,
    level: u8,
    content: Vec<String>,
    category: StoryCategory,
    filename: String,
}

impl StoryDto {
    fn into_story(self) -> Result<Story, StoryError> {
        Story::new(
            StoryId::new(self.id),
            self.title,
            self.level,
            self.content,
            self.category,
            self.filename,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dto_maps_onto_validated_story() {
        let dto: StoryDto = serde_json::from_str(
            r#"{
                "id": "fox-01",
                "title": "狐狸與葡萄",
                "level": 2,
                "content": ["第一段", "第二段"],
                "category": "fable",
                "filename": "fox-01.json"
            }"#,
        )
        .unwrap();

        let story = dto.into_story().unwrap();
        assert_eq!(story.id().as_str(), "fox-01");
        assert_eq!(story.category(), StoryCategory::Fable);
        assert_eq!(story.source(), "fox-01.json");
    }

    #[test]
    fn dto_validation_failure_surfaces() {
        let dto: StoryDto = serde_json::from_str(
            r#"{
                "id": "fox-01",
                "title": "狐狸與葡萄",
                "level": 0,
                "content": ["第一段"],
                "category": "fable",
                "filename": "fox-01.json"
            }"#,
        )
        .unwrap();

        assert_eq!(dto.into_story().unwrap_err(), StoryError::InvalidLevel);
    }

    #[test]
    fn config_defaults_to_local_service() {
        // Not using from_env here to stay independent of the test environment.
        let config = StorySourceConfig {
            base_url: "http://localhost:8000/".into(),
        };
        let source = HttpStorySource::new(config);
        assert_eq!(source.url("/api/stories"), "http://localhost:8000/api/stories");
    }
}
