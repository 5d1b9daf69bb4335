use serde::Deserialize;

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub enum BuildResult {
    None,
    Succeeded,
    PartiallySucceeded,
    Failed,
    Canceled,
    #[serde(other)]
    #[default]
    Unknown,
}

impl BuildResult {
    /// value used by the `resultFilter` query parameter.
    pub fn as_query_value(&self) -> &'static str {
        match self {
            BuildResult::None | BuildResult::Unknown => "none",
            BuildResult::Succeeded => "succeeded",
            BuildResult::PartiallySucceeded => "partiallySucceeded",
            BuildResult::Failed => "failed",
            BuildResult::Canceled => "canceled",
        }
    }
}
