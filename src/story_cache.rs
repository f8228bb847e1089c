use super::*;

/// Key/value store for computed pages. Implementations own their locking.
pub(crate) trait StoryCache: Send + Sync {
  fn get(&self, key: &str) -> Option<StoryPage>;

  fn set(&self, key: String, page: StoryPage, ttl: Duration);
}
