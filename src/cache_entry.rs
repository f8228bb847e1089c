use super::*;

#[derive(Clone, Debug)]
pub(crate) struct CacheEntry {
  expires_at: Instant,
  page: StoryPage,
}

impl CacheEntry {
  pub(crate) fn is_expired(&self) -> bool {
    Instant::now() >= self.expires_at
  }

  pub(crate) fn new(page: StoryPage, ttl: Duration) -> Self {
    Self {
      expires_at: Instant::now() + ttl,
      page,
    }
  }

  pub(crate) fn page(&self) -> &StoryPage {
    &self.page
  }
}
