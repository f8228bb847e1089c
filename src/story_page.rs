use super::*;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StoryPage {
  pub(crate) stories: Vec<Story>,
  pub(crate) total_count: usize,
}
