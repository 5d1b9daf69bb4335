use crate::constant::PAT_ENV_NAME;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub struct DownloadArgs {
    /// Azure DevOps organization.
    #[arg(short, long)]
    pub organization: Option<String>,

    /// Personal Access Token.
    #[arg(short = 't', long = "pat", env = PAT_ENV_NAME, hide_env_values = true)]
    pub pat: Option<String>,

    /// project name or id.
    #[arg(short, long)]
    pub project: Option<String>,

    /// pipeline definition id, get it from the browser url.
    #[arg(short, long)]
    pub definition: Option<u32>,

    /// branch in git refs format.
    /// like: refs/heads/develop
    #[arg(short, long)]
    pub branch: Option<String>,

    /// artifact name.
    /// {buildId}, {buildNumber} and {revision} are replaced with details of the build.
    #[arg(short, long)]
    pub artifact: Option<String>,

    /// output file name, should end in '.zip'.
    /// {buildId}, {buildNumber} and {revision} are replaced with details of the build.
    /// default: Build.zip
    #[arg(short, long)]
    pub result: Option<String>,

    /// root url of the build service.
    /// default: https://dev.azure.com
    #[arg(long, value_name = "URL")]
    pub service_url: Option<String>,

    /// defaults file.
    /// default: ~/.devops-artifact.toml
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// print errors only.
    #[arg(short, long)]
    pub quiet: bool,
}
