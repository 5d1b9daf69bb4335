use crate::config::DownloadConfig;
use crate::constant::log::*;
use crate::dad_error::DadError;
use crate::devops::devops_model::build::Build;
use crate::devops::query::resolve_latest_build;
use crate::devops::BuildService;
use crate::persist::{inspect_zip, persist_stream};
use crate::pretty_log::{colored_println, ThemeColor};
use crate::template::{resolve, resolve_output, unresolved_placeholders, PlaceholderValues};
use formatx::formatx;
use std::io::Write;
use std::path::PathBuf;

/// Result of one successful download.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadSummary {
    pub build: Build,
    pub artifact_name: String,
    pub output_path: PathBuf,
    pub bytes_written: u64,
    /// `None` if the saved file is not a readable zip.
    pub zip_entries: Option<usize>,
}

fn warn_unresolved<W: Write>(out: &mut W, resolved: &str) {
    for placeholder in unresolved_placeholders(resolved) {
        colored_println(
            out,
            ThemeColor::Warn,
            &formatx!(WARN_UNRESOLVED_PLACEHOLDER, placeholder, resolved).unwrap_or_default(),
        );
    }
}

/// # run download
///
/// Resolve the latest successful build, resolve artifact & output names from it,
/// then stream the artifact zip into the output file.
///
/// Nothing is written to disk unless a build has been resolved.
pub async fn run_download<S: BuildService + ?Sized, W: Write>(
    service: &S,
    config: &DownloadConfig,
    out: &mut W,
) -> Result<DownloadSummary, DadError> {
    colored_println(
        out,
        ThemeColor::Second,
        &formatx!(QUERYING_LATEST_BUILD, config.definition).unwrap_or_default(),
    );

    let build = resolve_latest_build(
        service,
        &config.project,
        config.definition,
        config.branch.as_deref(),
    )
    .await?;

    colored_println(
        out,
        ThemeColor::Main,
        &formatx!(
            RESOLVED_BUILD,
            build.id,
            build.build_number.as_str(),
            build.source_branch.as_deref().unwrap_or(RESOLVED_BUILD_UNKNOWN),
            build.source_version.as_deref().unwrap_or(RESOLVED_BUILD_UNKNOWN),
            build
                .finish_time
                .map(|t| t.to_rfc3339())
                .unwrap_or_else(|| RESOLVED_BUILD_UNKNOWN.to_string())
        )
        .unwrap_or_default(),
    );

    let values = PlaceholderValues::from(&build);
    let artifact_name = resolve(&config.artifact, &values);
    let output_name = resolve_output(&config.result, &values);
    warn_unresolved(out, &artifact_name);
    warn_unresolved(out, &output_name);

    let output_path = PathBuf::from(output_name);

    colored_println(
        out,
        ThemeColor::Main,
        &formatx!(
            DOWNLOADING_ARTIFACT,
            artifact_name.as_str(),
            output_path.display()
        )
        .unwrap_or_default(),
    );

    let stream = service
        .get_artifact_content_zip(&config.project, build.id, &artifact_name)
        .await?;
    let bytes_written = persist_stream(stream, &output_path).await?;

    colored_println(
        out,
        ThemeColor::Success,
        &formatx!(SAVED_ARTIFACT, bytes_written, output_path.display()).unwrap_or_default(),
    );

    let zip_entries = inspect_zip(&output_path);
    match zip_entries {
        Some(count) => colored_println(
            out,
            ThemeColor::Second,
            &formatx!(SAVED_ARTIFACT_ENTRIES, count).unwrap_or_default(),
        ),
        None => colored_println(
            out,
            ThemeColor::Warn,
            &formatx!(WARN_NOT_A_ZIP, output_path.display()).unwrap_or_default(),
        ),
    }

    Ok(DownloadSummary {
        build,
        artifact_name,
        output_path,
        bytes_written,
        zip_entries,
    })
}
