use super::*;

#[derive(Debug, Error)]
pub(crate) enum ApiError {
  #[error(transparent)]
  Upstream(#[from] UpstreamFetchError),
  #[error("Invalid page or pageSize")]
  Validation,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    (StatusCode::BAD_REQUEST, format!("An error occurred: {self}"))
      .into_response()
  }
}
