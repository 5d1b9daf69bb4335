use serde::Deserialize;

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub enum BuildStatus {
    None,
    InProgress,
    Completed,
    Cancelling,
    Postponed,
    NotStarted,
    #[serde(other)]
    #[default]
    Unknown,
}

impl BuildStatus {
    /// value used by the `statusFilter` query parameter.
    pub fn as_query_value(&self) -> &'static str {
        match self {
            BuildStatus::None => "none",
            BuildStatus::InProgress => "inProgress",
            BuildStatus::Completed => "completed",
            BuildStatus::Cancelling => "cancelling",
            BuildStatus::Postponed => "postponed",
            BuildStatus::NotStarted => "notStarted",
            BuildStatus::Unknown => "all",
        }
    }
}
