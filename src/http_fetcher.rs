use super::*;

/// Fetches a JSON document by absolute URL.
///
/// Non-success responses must surface as errors.
#[async_trait]
pub(crate) trait HttpFetcher: Send + Sync {
  async fn fetch_json(&self, url: &str) -> Result<Value>;
}
