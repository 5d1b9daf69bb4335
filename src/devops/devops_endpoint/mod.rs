pub mod artifact_content;
pub mod list_builds;
