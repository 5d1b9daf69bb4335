use crate::dad_error::DadError;
use crate::devops::devops_endpoint::list_builds::ListBuilds;
use crate::devops::devops_model::build::Build;
use crate::devops::BuildService;

/// # select latest
///
/// Pick the succeeded build with the latest finish time.
///
/// Builds without finish time rank lowest. On equal finish time the earlier one in
/// `builds` wins.
pub fn select_latest(builds: Vec<Build>) -> Option<Build> {
    builds
        .into_iter()
        .filter(Build::is_succeeded)
        .fold(None, |latest: Option<Build>, candidate| match latest {
            Some(l) if l.finish_time >= candidate.finish_time => Some(l),
            _ => Some(candidate),
        })
}

/// # resolve latest build
///
/// Query the latest successful build of a definition, optionally restricted to a branch.
///
/// Returns `DadError::NoBuildsAvailable` if nothing matches.
pub async fn resolve_latest_build<S: BuildService + ?Sized>(
    service: &S,
    project: &str,
    definition: u32,
    branch: Option<&str>,
) -> Result<Build, DadError> {
    let builds = service
        .list_builds(&ListBuilds::latest_succeeded(project, definition, branch))
        .await?;

    select_latest(builds).ok_or_else(|| DadError::NoBuildsAvailable {
        project: project.into(),
        definition,
        branch: branch.map(|b| b.into()),
    })
}
