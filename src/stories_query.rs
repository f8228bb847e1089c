use super::*;

#[derive(Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct StoriesQuery {
  pub(crate) page: i32,
  pub(crate) page_size: i32,
  pub(crate) search_title: Option<String>,
}

impl Default for StoriesQuery {
  fn default() -> Self {
    Self {
      page: 1,
      page_size: 10,
      search_title: None,
    }
  }
}

impl StoriesQuery {
  /// Returns `(page, page_size)` when both are positive.
  pub(crate) fn pagination(&self) -> Result<(usize, usize), ApiError> {
    match (usize::try_from(self.page), usize::try_from(self.page_size)) {
      (Ok(page), Ok(page_size)) if page > 0 && page_size > 0 => {
        Ok((page, page_size))
      }
      _ => Err(ApiError::Validation),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse(query: &str) -> StoriesQuery {
    Query::<StoriesQuery>::try_from_uri(
      &format!("http://localhost/api/stories?{query}").parse().unwrap(),
    )
    .unwrap()
    .0
  }

  #[test]
  fn missing_parameters_use_defaults() {
    let query = parse("");

    assert_eq!(query.pagination().unwrap(), (1, 10));
    assert_eq!(query.search_title, None);
  }

  #[test]
  fn parameters_are_camel_case() {
    let query = parse("page=3&pageSize=25&searchTitle=rust");

    assert_eq!(query.pagination().unwrap(), (3, 25));
    assert_eq!(query.search_title.as_deref(), Some("rust"));
  }

  #[test]
  fn non_positive_values_are_rejected() {
    for query in ["page=0", "pageSize=0", "page=-1", "page=2&pageSize=-5"] {
      assert!(
        matches!(parse(query).pagination(), Err(ApiError::Validation)),
        "{query} should be rejected"
      );
    }
  }

  #[test]
  fn non_numeric_page_fails_extraction() {
    assert!(
      Query::<StoriesQuery>::try_from_uri(
        &"http://localhost/api/stories?page=abc".parse().unwrap()
      )
      .is_err()
    );
  }
}
