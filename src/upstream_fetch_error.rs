use super::*;

#[derive(Debug, Error)]
#[error("Error fetching top stories.")]
pub(crate) struct UpstreamFetchError {
  #[source]
  source: Box<dyn std::error::Error + Send + Sync>,
}

impl UpstreamFetchError {
  pub(crate) fn new(source: anyhow::Error) -> Self {
    Self {
      source: source.into(),
    }
  }
}
