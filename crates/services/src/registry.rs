use tutor_core::model::{Story, StoryCategory, StoryId};

use crate::error::StorySourceError;
use crate::story_source::StorySource;

/// Catalog of selectable reading materials.
///
/// Stories keep their catalog insertion order and are immutable once loaded;
/// the controller and stage renderers only ever borrow them.
#[derive(Debug, Clone, Default)]
pub struct StoryRegistry {
    stories: Vec<Story>,
}

impl StoryRegistry {
    /// Builds a registry from an already-fetched catalog.
    ///
    /// Order is preserved. If the catalog carries duplicate ids, the first
    /// occurrence wins on lookup.
    #[must_use]
    pub fn new(stories: Vec<Story>) -> Self {
        Self { stories }
    }

    /// Fetches the full catalog from a story source.
    ///
    /// # Errors
    ///
    /// Returns `StorySourceError` unchanged when the source fails; no retries
    /// and no partial catalog are kept.
    pub async fn load(source: &dyn StorySource) -> Result<Self, StorySourceError> {
        let stories = source.list_stories().await?;
        Ok(Self::new(stories))
    }

    /// All stories in catalog order.
    #[must_use]
    pub fn list(&self) -> &[Story] {
        &self.stories
    }

    /// Resolves a story by id; `None` means the selection fails upstream.
    #[must_use]
    pub fn get(&self, id: &StoryId) -> Option<&Story> {
        self.stories.iter().find(|s| s.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }

    /// Small built-in catalog for demos and tests, mirroring the story
    /// service's seed data.
    #[must_use]
    pub fn sample_catalog() -> Self {
        let stories = vec![
            Story::new(
                StoryId::new("fox-01"),
                "狐狸與葡萄",
                2,
                vec![
                    "一隻狐狸走過果園，看見架子上掛著一串串成熟的葡萄。".to_string(),
                    "牠跳了又跳，還是搆不著，只好放棄。".to_string(),
                    "離開的時候，牠安慰自己說：「那些葡萄一定是酸的。」".to_string(),
                ],
                StoryCategory::Fable,
                "fox-01.json",
            ),
            Story::new(
                StoryId::new("bear-02"),
                "北極熊的家",
                3,
                vec![
                    "北極熊住在冰天雪地的北極。".to_string(),
                    "厚厚的毛皮讓牠們不怕寒冷，寬大的腳掌幫助牠們在冰上行走。".to_string(),
                ],
                StoryCategory::Science,
                "bear-02.json",
            ),
            Story::new(
                StoryId::new("market-03"),
                "逛夜市",
                1,
                vec![
                    "星期六晚上，我和家人一起去逛夜市。".to_string(),
                    "夜市裡有好多小吃，我們吃了蚵仔煎和珍珠奶茶。".to_string(),
                ],
                StoryCategory::Daily,
                "market-03.json",
            ),
        ];

        // Seed data is static and known-valid.
        let stories = stories
            .into_iter()
            .collect::<Result<Vec<_>, _>>()
            .expect("sample catalog should validate");
        Self::new(stories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_preserves_catalog_order() {
        let registry = StoryRegistry::sample_catalog();
        let ids: Vec<&str> = registry.list().iter().map(|s| s.id().as_str()).collect();
        assert_eq!(ids, ["fox-01", "bear-02", "market-03"]);
    }

    #[test]
    fn get_resolves_known_id() {
        let registry = StoryRegistry::sample_catalog();
        let story = registry.get(&StoryId::new("fox-01")).unwrap();
        assert_eq!(story.title(), "狐狸與葡萄");
        assert_eq!(story.level(), 2);
    }

    #[test]
    fn get_returns_none_for_unknown_id() {
        let registry = StoryRegistry::sample_catalog();
        assert!(registry.get(&StoryId::new("unknown-99")).is_none());
    }

    #[test]
    fn empty_registry_is_empty() {
        let registry = StoryRegistry::new(Vec::new());
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }
}
