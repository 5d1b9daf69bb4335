use crate::constant::log::*;
use crate::constant::util::{get_hidden_sensitive_string, SensitiveMode};
use crate::pretty_log::{colored_println, ThemeColor};
use formatx::formatx;
use std::fmt::Display;
use std::io::Write;
use strum_macros::Display;

/// # DadExitCode
///
/// Process exit status, decided once by the dispatcher in `main`.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DadExitCode {
    Success = 0,
    NoBuildsAvailable = 1,
    SavingResultFailed = 2,
    InvalidArguments = 3,
    RemoteRequestFailed = 4,
}

impl From<DadExitCode> for std::process::ExitCode {
    fn from(value: DadExitCode) -> Self {
        std::process::ExitCode::from(value as u8)
    }
}

pub enum DadError {
    Custom(String),
    MissingParam(String),
    InvalidConfigFile {
        path: String,
        msg: String,
    },
    InvalidServiceUrl(String),
    NoBuildsAvailable {
        project: String,
        definition: u32,
        branch: Option<String>,
    },
    SavingResultFailed {
        path: String,
        e: std::io::Error,
    },
    AuthenticationFailed {
        organization: String,
        pat: String,
    },
    RemoteRequestFailed {
        status: u16,
        url: String,
    },
    RemoteTransport(reqwest::Error),
    RemotePayload(serde_json::Error),
}

impl From<reqwest::Error> for DadError {
    fn from(value: reqwest::Error) -> Self {
        DadError::RemoteTransport(value)
    }
}

impl From<serde_json::Error> for DadError {
    fn from(value: serde_json::Error) -> Self {
        DadError::RemotePayload(value)
    }
}

impl std::fmt::Debug for DadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DadError::Custom(msg) => f.debug_tuple("Custom").field(msg).finish(),
            DadError::MissingParam(param) => f.debug_tuple("MissingParam").field(param).finish(),
            DadError::InvalidConfigFile { path, msg } => f
                .debug_struct("InvalidConfigFile")
                .field("path", path)
                .field("msg", msg)
                .finish(),
            DadError::InvalidServiceUrl(url) => {
                f.debug_tuple("InvalidServiceUrl").field(url).finish()
            }
            DadError::NoBuildsAvailable {
                project,
                definition,
                branch,
            } => f
                .debug_struct("NoBuildsAvailable")
                .field("project", project)
                .field("definition", definition)
                .field("branch", branch)
                .finish(),
            DadError::SavingResultFailed { path, e } => f
                .debug_struct("SavingResultFailed")
                .field("path", path)
                .field("e", e)
                .finish(),
            DadError::AuthenticationFailed { organization, pat } => f
                .debug_struct("AuthenticationFailed")
                .field("organization", organization)
                .field(
                    "pat",
                    &get_hidden_sensitive_string(pat, SensitiveMode::Full),
                )
                .finish(),
            DadError::RemoteRequestFailed { status, url } => f
                .debug_struct("RemoteRequestFailed")
                .field("status", status)
                .field("url", url)
                .finish(),
            DadError::RemoteTransport(e) => f.debug_tuple("RemoteTransport").field(e).finish(),
            DadError::RemotePayload(e) => f.debug_tuple("RemotePayload").field(e).finish(),
        }
    }
}

impl Display for DadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            DadError::Custom(msg) => msg.clone(),
            DadError::MissingParam(param) => formatx!(ERR_NEED_PARAM, param).unwrap_or_default(),
            DadError::InvalidConfigFile { path, msg } => {
                formatx!(ERR_INVALID_CONFIG_FILE, path, msg).unwrap_or_default()
            }
            DadError::InvalidServiceUrl(url) => {
                formatx!(ERR_INVALID_SERVICE_URL, url).unwrap_or_default()
            }
            DadError::NoBuildsAvailable {
                project,
                definition,
                branch,
            } => {
                let branch_suffix = branch
                    .as_ref()
                    .and_then(|b| formatx!(ERR_NO_BUILDS_AVAILABLE_BRANCH_SUFFIX, b).ok())
                    .unwrap_or_default();
                formatx!(ERR_NO_BUILDS_AVAILABLE, definition, project, branch_suffix)
                    .unwrap_or_default()
            }
            DadError::SavingResultFailed { path, e } => {
                formatx!(ERR_SAVING_RESULT_FAILED, path, e.to_string()).unwrap_or_default()
            }
            DadError::AuthenticationFailed { organization, pat } => formatx!(
                ERR_AUTHENTICATION_FAILED,
                organization,
                get_hidden_sensitive_string(pat, SensitiveMode::Normal(4))
            )
            .unwrap_or_default(),
            DadError::RemoteRequestFailed { status, url } => {
                formatx!(ERR_REMOTE_REQUEST_FAILED, status, url).unwrap_or_default()
            }
            DadError::RemoteTransport(e) => {
                formatx!(ERR_REMOTE_TRANSPORT, e.to_string()).unwrap_or_default()
            }
            DadError::RemotePayload(e) => {
                formatx!(ERR_REMOTE_PAYLOAD, e.to_string()).unwrap_or_default()
            }
        };
        write!(f, "{}", str)
    }
}

impl std::error::Error for DadError {}

impl DadError {
    pub fn exit_code(&self) -> DadExitCode {
        match self {
            DadError::NoBuildsAvailable { .. } => DadExitCode::NoBuildsAvailable,
            DadError::SavingResultFailed { .. } => DadExitCode::SavingResultFailed,
            DadError::Custom(_)
            | DadError::MissingParam(_)
            | DadError::InvalidConfigFile { .. }
            | DadError::InvalidServiceUrl(_) => DadExitCode::InvalidArguments,
            DadError::AuthenticationFailed { .. }
            | DadError::RemoteRequestFailed { .. }
            | DadError::RemoteTransport(_)
            | DadError::RemotePayload(_) => DadExitCode::RemoteRequestFailed,
        }
    }

    pub fn colored_println<W: Write>(&self, out: &mut W) {
        colored_println(out, ThemeColor::Error, self.to_string().as_str());
    }
}
