pub const ERR_NEED_PARAM: &str = "Need param: {}.";
pub const ERR_INVALID_CONFIG_FILE: &str = "Invalid config file {}. {}";
pub const ERR_NO_BUILDS_AVAILABLE: &str =
    "There is no successful build of definition {} in project {}{}.";
pub const ERR_NO_BUILDS_AVAILABLE_BRANCH_SUFFIX: &str = " on branch {}";
pub const ERR_SAVING_RESULT_FAILED: &str = "Failed to save the artifact to {}. {}";
pub const ERR_REMOTE_REQUEST_FAILED: &str = "Remote request failed with status {}. Url: {}";
pub const ERR_REMOTE_TRANSPORT: &str = "Cannot reach the build service. {}";
pub const ERR_REMOTE_PAYLOAD: &str = "Unexpected response from the build service. {}";
pub const ERR_AUTHENTICATION_FAILED: &str =
    "Cannot sign in to organization {}.\nPat: {}\nMaybe you should check your personal access token.";
pub const ERR_INVALID_SERVICE_URL: &str = "Invalid service url: {}.";

pub const PARAM_ORGANIZATION: &str = "organization";
pub const PARAM_PAT: &str = "pat";
pub const PARAM_PROJECT: &str = "project";
pub const PARAM_DEFINITION: &str = "definition";
pub const PARAM_ARTIFACT: &str = "artifact";

pub const WARN_UNRESOLVED_PLACEHOLDER: &str = "Placeholder {} in \"{}\" was left as is.";
pub const WARN_NOT_A_ZIP: &str = "{} is not a readable zip archive.";

pub const QUERYING_LATEST_BUILD: &str = "Querying latest successful build of definition {}...";
pub const RESOLVED_BUILD: &str = "Use build {} ({}) of {} at {}, finished at {}.";
pub const RESOLVED_BUILD_UNKNOWN: &str = "unknown";
pub const DOWNLOADING_ARTIFACT: &str = "Downloading artifact {} to {}...";
pub const SAVED_ARTIFACT: &str = "Saved {} bytes to {}.";
pub const SAVED_ARTIFACT_ENTRIES: &str = "Archive contains {} entries.";
pub const EXIT_WITH_CODE: &str = "Exit with {} ({}).";
