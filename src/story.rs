use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub(crate) struct Story {
  #[serde(alias = "Id")]
  pub(crate) id: u64,
  #[serde(alias = "Title", default)]
  pub(crate) title: Option<String>,
  #[serde(alias = "Url", default)]
  pub(crate) url: Option<String>,
}
