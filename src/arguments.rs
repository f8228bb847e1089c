use super::*;

#[derive(Debug, Parser)]
#[command(
  name = "top-stories",
  version,
  about = "Paginated, searchable proxy for Hacker News top stories"
)]
pub(crate) struct Arguments {
  /// Base URL of the upstream API
  #[arg(long, env = "TOP_STORIES_API_URL")]
  api_url: Option<String>,

  /// Address to listen on
  #[arg(long, env = "TOP_STORIES_BIND", default_value = "127.0.0.1:8080")]
  pub(crate) bind: SocketAddr,

  /// TOML file with upstream settings
  #[arg(long = "config", short, env = "TOP_STORIES_CONFIG")]
  config_file: Option<PathBuf>,

  /// Maximum number of item requests in flight per page
  #[arg(long, env = "TOP_STORIES_FETCH_CONCURRENCY")]
  fetch_concurrency: Option<usize>,

  /// Item endpoint, with `{0}` in place of the story id
  #[arg(long, env = "TOP_STORIES_ITEM_ENDPOINT")]
  item_endpoint: Option<String>,

  /// Endpoint returning the ranked story ids
  #[arg(long, env = "TOP_STORIES_TOP_STORIES_ENDPOINT")]
  top_stories_endpoint: Option<String>,

  /// Number of ranked ids kept before paging
  #[arg(long, env = "TOP_STORIES_TOTAL_COUNT")]
  total_stories_count: Option<usize>,

  /// Enable debug logging
  #[arg(long, short)]
  verbose: bool,
}

impl Arguments {
  pub(crate) fn config(&self) -> Result<Config> {
    let mut config = match &self.config_file {
      Some(path) => Config::load(path)?,
      None => Config::default(),
    };

    if let Some(api_url) = &self.api_url {
      config.api_url.clone_from(api_url);
    }

    if let Some(fetch_concurrency) = self.fetch_concurrency {
      config.fetch_concurrency = fetch_concurrency;
    }

    if let Some(item_endpoint) = &self.item_endpoint {
      config.item_endpoint.clone_from(item_endpoint);
    }

    if let Some(top_stories_endpoint) = &self.top_stories_endpoint {
      config.top_stories_endpoint.clone_from(top_stories_endpoint);
    }

    if let Some(total_stories_count) = self.total_stories_count {
      config.total_stories_count = total_stories_count;
    }

    config.validate().context("invalid configuration")?;

    Ok(config)
  }

  pub(crate) fn init_logging(&self) {
    let level = if self.verbose { "debug" } else { "info" };

    env_logger::Builder::from_env(
      env_logger::Env::default().default_filter_or(level),
    )
    .format_timestamp_secs()
    .init();
  }
}
