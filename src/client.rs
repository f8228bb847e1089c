use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  client: reqwest::Client,
}

impl Default for Client {
  fn default() -> Self {
    Self {
      client: reqwest::Client::new(),
    }
  }
}

#[async_trait]
impl HttpFetcher for Client {
  async fn fetch_json(&self, url: &str) -> Result<Value> {
    Ok(
      self
        .client
        .get(url)
        .send()
        .await
        .with_context(|| format!("request to {url} failed"))?
        .error_for_status()?
        .json::<Value>()
        .await
        .with_context(|| format!("response from {url} is not valid JSON"))?,
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  async fn upstream() -> String {
    let router = Router::new()
      .route(
        "/v0/topstories.json",
        get(|| async { Json(serde_json::json!([3, 1, 2])) }),
      )
      .route(
        "/v0/item/1.json",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
      )
      .route("/v0/item/2.json", get(|| async { "<html>not json</html>" }));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
      axum::serve(listener, router).await.unwrap();
    });

    format!("http://{address}/v0")
  }

  fn client() -> Client {
    Client {
      client: reqwest::Client::builder().no_proxy().build().unwrap(),
    }
  }

  #[tokio::test]
  async fn success_returns_json() {
    let base = upstream().await;

    assert_eq!(
      client()
        .fetch_json(&format!("{base}/topstories.json"))
        .await
        .unwrap(),
      serde_json::json!([3, 1, 2])
    );
  }

  #[tokio::test]
  async fn server_error_is_an_error() {
    let base = upstream().await;

    let error = client()
      .fetch_json(&format!("{base}/item/1.json"))
      .await
      .unwrap_err();

    assert!(error.to_string().contains("500"), "{error}");
  }

  #[tokio::test]
  async fn non_json_body_is_an_error() {
    let base = upstream().await;

    let error = client()
      .fetch_json(&format!("{base}/item/2.json"))
      .await
      .unwrap_err();

    assert!(error.to_string().contains("is not valid JSON"), "{error}");
  }

  #[tokio::test]
  async fn missing_route_is_an_error() {
    let base = upstream().await;

    assert!(
      client()
        .fetch_json(&format!("{base}/item/9.json"))
        .await
        .is_err()
    );
  }
}
