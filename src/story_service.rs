use super::*;

/// Read-through pipeline from the upstream ranked id list to cached pages.
pub(crate) struct StoryService {
  cache: Arc<dyn StoryCache>,
  config: Config,
  fetcher: Arc<dyn HttpFetcher>,
}

impl StoryService {
  const CACHE_TTL: Duration = Duration::from_secs(10 * 60);

  fn cache_key(page: usize, search_title: Option<&str>) -> String {
    format!(
      "stories_page_{page}_title_{}",
      search_title.unwrap_or_default()
    )
  }

  async fn fetch_stories(&self, ids: &[u64]) -> Result<Vec<Story>> {
    stream::iter(ids.iter().copied().map(|id| async move {
      let value = self.fetcher.fetch_json(&self.config.item_url(id)).await?;

      serde_json::from_value::<Story>(value)
        .with_context(|| format!("invalid payload for item {id}"))
    }))
    .buffered(self.config.fetch_concurrency)
    .try_collect()
    .await
  }

  async fn fetch_story_ids(&self) -> Result<Vec<u64>> {
    let value = self
      .fetcher
      .fetch_json(&self.config.top_stories_url())
      .await?;

    let mut ids = serde_json::from_value::<Vec<u64>>(value)
      .context("invalid top stories payload")?;

    ids.truncate(self.config.total_stories_count);

    Ok(ids)
  }

  /// Returns the cached page for `(page, search_title)` or builds it from
  /// upstream. Only the ids inside the page window are resolved, so a search
  /// filters that window alone and its `total_count` counts matches in it.
  pub(crate) async fn fetch_page(
    &self,
    page: usize,
    page_size: usize,
    search_title: Option<&str>,
  ) -> Result<StoryPage, UpstreamFetchError> {
    let key = Self::cache_key(page, search_title);

    if let Some(cached) = self.cache.get(&key) {
      log::debug!("cache hit for {key}");
      return Ok(cached);
    }

    log::debug!("cache miss for {key}");

    self
      .load_page(key, page, page_size, search_title)
      .await
      .map_err(|error| {
        log::error!("Error fetching top stories: {error:?}");
        UpstreamFetchError::new(error)
      })
  }

  async fn load_page(
    &self,
    key: String,
    page: usize,
    page_size: usize,
    search_title: Option<&str>,
  ) -> Result<StoryPage> {
    let ids = self.fetch_story_ids().await?;

    let window = page_window(ids.len(), page, page_size);

    let search_title = search_title.filter(|title| !title.is_empty());

    let mut stories = Vec::new();

    for story in self.fetch_stories(&ids[window]).await? {
      if let Some(search_title) = search_title {
        let title = story
          .title
          .as_deref()
          .with_context(|| format!("item {} has no title to search", story.id))?;

        if !contains_ignore_case(title, search_title) {
          continue;
        }
      }

      stories.push(story);
    }

    let total_count = if search_title.is_none() {
      ids.len()
    } else {
      stories.len()
    };

    let story_page = StoryPage {
      stories,
      total_count,
    };

    if !ids.is_empty() {
      self.cache.set(key, story_page.clone(), Self::CACHE_TTL);
    }

    Ok(story_page)
  }

  pub(crate) fn new(
    cache: Arc<dyn StoryCache>,
    config: Config,
    fetcher: Arc<dyn HttpFetcher>,
  ) -> Self {
    Self {
      cache,
      config,
      fetcher,
    }
  }
}
