use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
  pub(crate) api_url: String,
  pub(crate) fetch_concurrency: usize,
  pub(crate) item_endpoint: String,
  pub(crate) top_stories_endpoint: String,
  pub(crate) total_stories_count: usize,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      api_url: "https://hacker-news.firebaseio.com/v0/".into(),
      fetch_concurrency: 1,
      item_endpoint: "item/{0}.json".into(),
      top_stories_endpoint: "topstories.json".into(),
      total_stories_count: 200,
    }
  }
}

impl Config {
  const ID_SLOT: &str = "{0}";

  pub(crate) fn item_url(&self, id: u64) -> String {
    format!("{}{}", self.api_url, self.item_endpoint)
      .replace(Self::ID_SLOT, &id.to_string())
  }

  pub(crate) fn load(path: &Path) -> Result<Self> {
    let contents = fs::read_to_string(path)
      .with_context(|| format!("could not read config file {}", path.display()))?;

    Self::parse(&contents)
      .with_context(|| format!("invalid config file {}", path.display()))
  }

  fn parse(contents: &str) -> Result<Self> {
    Ok(toml::from_str(contents)?)
  }

  pub(crate) fn top_stories_url(&self) -> String {
    format!("{}{}", self.api_url, self.top_stories_endpoint)
  }

  pub(crate) fn validate(&self) -> Result {
    ensure!(
      self.fetch_concurrency > 0,
      "fetch_concurrency must be at least 1"
    );

    ensure!(
      self.item_endpoint.contains(Self::ID_SLOT),
      "item_endpoint `{}` has no `{}` slot for the story id",
      self.item_endpoint,
      Self::ID_SLOT
    );

    Ok(())
  }
}
