pub mod log;
pub mod util;

pub const DEFAULT_RESULT_FILE_NAME: &str = "Build.zip";
pub const DEFAULT_SERVICE_URL: &str = "https://dev.azure.com";
pub const DEFAULT_CONFIG_FILE_NAME: &str = ".devops-artifact.toml";
pub const PAT_ENV_NAME: &str = "AZURE_DEVOPS_EXT_PAT";
pub const API_VERSION: &str = "7.1";
pub const USER_AGENT: &str = "devops-artifact-downloader-rust";
