use super::*;

#[derive(Debug, Default)]
pub(crate) struct MemoryCache {
  entries: DashMap<String, CacheEntry>,
}

impl MemoryCache {
  #[cfg(test)]
  pub(crate) fn len(&self) -> usize {
    self.entries.len()
  }
}

impl StoryCache for MemoryCache {
  fn get(&self, key: &str) -> Option<StoryPage> {
    let page = {
      let entry = self.entries.get(key)?;
      (!entry.is_expired()).then(|| entry.page().clone())
    };

    if page.is_none() {
      self.entries.remove_if(key, |_, entry| entry.is_expired());
    }

    page
  }

  fn set(&self, key: String, page: StoryPage, ttl: Duration) {
    self.entries.retain(|_, entry| !entry.is_expired());
    self.entries.insert(key, CacheEntry::new(page, ttl));
  }
}
