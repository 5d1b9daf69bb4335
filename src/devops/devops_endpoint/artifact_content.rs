use crate::constant::API_VERSION;

const FORMAT_ZIP: &str = "zip";
const ACCEPT_ZIP: &str = "application/zip";

/// Endpoint for downloading one artifact of a build as zip.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactContent {
    /// Name or id of the project.
    pub project: String,

    pub build_id: u32,

    /// Resolved artifact name.
    pub artifact_name: String,
}

impl crate::devops::Endpoint for ArtifactContent {
    /// HTTP method used (GET).
    fn method(&self) -> &str {
        "GET"
    }

    /// `{project}/_apis/build/builds/{buildId}/artifacts`
    fn path_segments(&self) -> Vec<String> {
        vec![
            self.project.clone(),
            "_apis".into(),
            "build".into(),
            "builds".into(),
            self.build_id.to_string(),
            "artifacts".into(),
        ]
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("artifactName", self.artifact_name.clone()),
            ("$format", FORMAT_ZIP.into()),
            ("api-version", API_VERSION.into()),
        ]
    }

    fn accept(&self) -> &str {
        ACCEPT_ZIP
    }
}
