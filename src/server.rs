use super::*;

pub(crate) struct Server {
  service: Arc<StoryService>,
}

impl Server {
  async fn get_stories(
    State(service): State<Arc<StoryService>>,
    Query(query): Query<StoriesQuery>,
  ) -> Result<Json<StoryPage>, ApiError> {
    let (page, page_size) = query.pagination()?;

    Ok(Json(
      service
        .fetch_page(page, page_size, query.search_title.as_deref())
        .await?,
    ))
  }

  pub(crate) fn new(service: StoryService) -> Self {
    Self {
      service: Arc::new(service),
    }
  }

  fn router(&self) -> Router {
    Router::new()
      .route("/api/stories", get(Self::get_stories))
      .with_state(self.service.clone())
  }

  pub(crate) async fn run(self, bind: SocketAddr) -> Result {
    let listener = TcpListener::bind(bind)
      .await
      .with_context(|| format!("failed to bind {bind}"))?;

    log::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, self.router())
      .with_graceful_shutdown(shutdown_signal())
      .await
      .context("server stopped unexpectedly")?;

    log::info!("shut down");

    Ok(())
  }
}

async fn shutdown_signal() {
  if let Err(error) = tokio::signal::ctrl_c().await {
    log::error!("failed to listen for shutdown signal: {error}");
    std::future::pending::<()>().await;
  }
}
