use crate::devops::devops_model::build_result::BuildResult;
use crate::devops::devops_model::build_status::BuildStatus;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One execution of a pipeline definition, as returned by the build service.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    pub id: u32,

    pub build_number: String,

    pub build_number_revision: Option<u32>,

    #[serde(default)]
    pub status: BuildStatus,

    pub result: Option<BuildResult>,

    pub finish_time: Option<DateTime<Utc>>,

    pub source_branch: Option<String>,

    pub source_version: Option<String>,
}

impl Build {
    pub fn is_succeeded(&self) -> bool {
        self.status == BuildStatus::Completed && self.result == Some(BuildResult::Succeeded)
    }
}
