use super::*;

/// Substring match that upper-cases each char on both sides. Chars whose
/// upper case spans several chars are compared as-is.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
  let haystack = haystack.chars().map(fold_case).collect::<Vec<_>>();
  let needle = needle.chars().map(fold_case).collect::<Vec<_>>();

  needle.is_empty()
    || haystack
      .windows(needle.len())
      .any(|window| window == needle.as_slice())
}

fn fold_case(ch: char) -> char {
  let mut upper = ch.to_uppercase();

  match (upper.next(), upper.next()) {
    (Some(folded), None) => folded,
    _ => ch,
  }
}

/// Index range of the ranked list covered by a one-based page, clamped to
/// `len`. Page zero yields an empty range.
pub(crate) fn page_window(
  len: usize,
  page: usize,
  page_size: usize,
) -> Range<usize> {
  let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
  let end = page.saturating_mul(page_size).min(len);

  start..end
}
