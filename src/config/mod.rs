use crate::config::config_file::ConfigFile;
use crate::config::download_args::DownloadArgs;
use crate::constant::log::*;
use crate::constant::util::{get_hidden_sensitive_string, join_url, SensitiveMode};
use crate::constant::{DEFAULT_RESULT_FILE_NAME, DEFAULT_SERVICE_URL};
use crate::dad_error::DadError;
use std::fmt::{Debug, Formatter};

pub mod config_file;
pub mod download_args;

/// # Download config
///
/// Everything a download needs. Immutable once merged.
#[derive(Clone, PartialEq)]
pub struct DownloadConfig {
    pub organization: String,
    pub pat: String,
    pub project: String,
    pub definition: u32,
    pub branch: Option<String>,
    pub artifact: String,
    pub result: String,
    pub service_url: String,
}

fn parse_with_default<T>(param_val: Option<T>, file_val: Option<T>) -> Option<T> {
    param_val.or(file_val)
}

fn require<T>(val: Option<T>, param: &str) -> Result<T, DadError> {
    val.ok_or_else(|| DadError::MissingParam(param.to_string()))
}

impl DownloadConfig {
    /// # merge
    ///
    /// Merge command line params over the defaults file.
    ///
    /// Blank strings count as absent, except for `result` whose blank value
    /// already means `Build.zip`.
    pub fn merge(args: DownloadArgs, file: ConfigFile) -> Result<Self, DadError> {
        let not_blank = |v: String| (!v.trim().is_empty()).then_some(v);

        Ok(Self {
            organization: require(
                parse_with_default(args.organization, file.organization).and_then(not_blank),
                PARAM_ORGANIZATION,
            )?,
            pat: require(
                parse_with_default(args.pat, file.pat).and_then(not_blank),
                PARAM_PAT,
            )?,
            project: require(
                parse_with_default(args.project, file.project).and_then(not_blank),
                PARAM_PROJECT,
            )?,
            definition: require(
                parse_with_default(args.definition, file.definition),
                PARAM_DEFINITION,
            )?,
            branch: parse_with_default(args.branch, file.branch).and_then(not_blank),
            artifact: require(
                parse_with_default(args.artifact, file.artifact).and_then(not_blank),
                PARAM_ARTIFACT,
            )?,
            result: parse_with_default(args.result, file.result)
                .unwrap_or_else(|| DEFAULT_RESULT_FILE_NAME.to_string()),
            service_url: parse_with_default(args.service_url, file.service_url)
                .and_then(not_blank)
                .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string()),
        })
    }

    /// like `https://dev.azure.com/contoso`
    pub fn organization_url(&self) -> String {
        join_url(&self.service_url, &self.organization)
    }
}

impl Debug for DownloadConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloadConfig")
            .field("organization", &self.organization)
            .field(
                "pat",
                &get_hidden_sensitive_string(&self.pat, SensitiveMode::Full),
            )
            .field("project", &self.project)
            .field("definition", &self.definition)
            .field("branch", &self.branch)
            .field("artifact", &self.artifact)
            .field("result", &self.result)
            .field("service_url", &self.service_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_args() -> DownloadArgs {
        DownloadArgs {
            organization: Some("contoso".to_string()),
            pat: Some("token".to_string()),
            project: Some("demo".to_string()),
            definition: Some(42),
            artifact: Some("drop-{buildId}".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_merge_defaults() {
        let config = DownloadConfig::merge(full_args(), ConfigFile::default()).unwrap();

        assert_eq!(config.result, "Build.zip");
        assert_eq!(config.branch, None);
        assert_eq!(config.service_url, "https://dev.azure.com");
        assert_eq!(config.organization_url(), "https://dev.azure.com/contoso");
    }

    #[test]
    fn test_merge_params_over_file() {
        let file = ConfigFile {
            organization: Some("fabrikam".to_string()),
            branch: Some("refs/heads/main".to_string()),
            result: Some("{buildNumber}.zip".to_string()),
            service_url: Some("https://tfs.local/tfs/".to_string()),
            ..Default::default()
        };

        let config = DownloadConfig::merge(full_args(), file).unwrap();

        assert_eq!(config.organization, "contoso");
        assert_eq!(config.branch.as_deref(), Some("refs/heads/main"));
        assert_eq!(config.result, "{buildNumber}.zip");
        assert_eq!(config.organization_url(), "https://tfs.local/tfs/contoso");
    }

    #[test]
    fn test_merge_from_file_only() {
        let file = ConfigFile {
            organization: Some("contoso".to_string()),
            pat: Some("token".to_string()),
            project: Some("demo".to_string()),
            definition: Some(7),
            artifact: Some("drop".to_string()),
            ..Default::default()
        };

        let config = DownloadConfig::merge(DownloadArgs::default(), file).unwrap();

        assert_eq!(config.definition, 7);
        assert_eq!(config.artifact, "drop");
    }

    #[test]
    fn test_merge_missing_param() {
        let mut args = full_args();
        args.definition = None;

        let err = DownloadConfig::merge(args, ConfigFile::default()).unwrap_err();
        assert_eq!(err.to_string(), "Need param: definition.");

        let mut args = full_args();
        args.pat = Some("   ".to_string());

        let err = DownloadConfig::merge(args, ConfigFile::default()).unwrap_err();
        assert_eq!(err.to_string(), "Need param: pat.");
    }

    #[test]
    fn test_merge_keeps_blank_result() {
        let mut args = full_args();
        args.result = Some(" ".to_string());
        args.branch = Some("".to_string());

        let config = DownloadConfig::merge(args, ConfigFile::default()).unwrap();

        assert_eq!(config.result, " ");
        assert_eq!(config.branch, None);
    }

    #[test]
    fn test_debug_hides_pat() {
        let config = DownloadConfig::merge(full_args(), ConfigFile::default()).unwrap();

        let debug = format!("{:?}", config);
        assert!(!debug.contains("token"));
        assert!(debug.contains("*****"));
    }
}
