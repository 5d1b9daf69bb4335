use crate::constant::API_VERSION;
use crate::devops::devops_model::build_result::BuildResult;
use crate::devops::devops_model::build_status::BuildStatus;

const QUERY_ORDER_FINISH_TIME_DESCENDING: &str = "finishTimeDescending";

/// Endpoint for listing builds of a project.
#[derive(Debug, Clone, PartialEq)]
pub struct ListBuilds {
    /// Name or id of the project.
    pub project: String,

    /// Id of the pipeline definition.
    pub definition: u32,

    /// Branch filter in git refs format, like `refs/heads/main`.
    pub branch: Option<String>,

    pub status_filter: BuildStatus,

    pub result_filter: BuildResult,

    /// Max count of builds returned.
    pub top: u32,
}

impl ListBuilds {
    /// latest successful build of a definition, optionally on a branch.
    pub fn latest_succeeded(project: &str, definition: u32, branch: Option<&str>) -> Self {
        Self {
            project: project.into(),
            definition,
            branch: branch.map(|b| b.into()),
            status_filter: BuildStatus::Completed,
            result_filter: BuildResult::Succeeded,
            top: 1,
        }
    }
}

impl crate::devops::Endpoint for ListBuilds {
    /// HTTP method used (GET).
    fn method(&self) -> &str {
        "GET"
    }

    /// `{project}/_apis/build/builds`
    fn path_segments(&self) -> Vec<String> {
        vec![
            self.project.clone(),
            "_apis".into(),
            "build".into(),
            "builds".into(),
        ]
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("definitions", self.definition.to_string())];

        if let Some(branch) = &self.branch {
            params.push(("branchName", branch.clone()));
        }

        params.push(("statusFilter", self.status_filter.as_query_value().into()));
        params.push(("resultFilter", self.result_filter.as_query_value().into()));
        params.push(("queryOrder", QUERY_ORDER_FINISH_TIME_DESCENDING.into()));
        params.push(("$top", self.top.to_string()));
        params.push(("api-version", API_VERSION.into()));
        params
    }
}
