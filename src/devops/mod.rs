use crate::dad_error::DadError;
use crate::devops::devops_endpoint::list_builds::ListBuilds;
use crate::devops::devops_model::build::Build;

pub mod devops_endpoint;
pub mod devops_model;
pub mod pat_devops_async_client;
pub mod query;

/// Request description of one build service API.
pub trait Endpoint {
    fn method(&self) -> &str;

    /// Path segments below the organization url. Each segment is percent-encoded on use.
    fn path_segments(&self) -> Vec<String>;

    fn params(&self) -> Vec<(&'static str, String)>;

    fn accept(&self) -> &str {
        "application/json"
    }
}

/// Byte source of a downloaded artifact. Consumed exactly once.
#[async_trait::async_trait]
pub trait ArtifactStream: Send {
    /// Next chunk of content, `None` once the stream is exhausted.
    async fn next_chunk(&mut self) -> Result<Option<Vec<u8>>, DadError>;
}

#[async_trait::async_trait]
impl ArtifactStream for reqwest::Response {
    async fn next_chunk(&mut self) -> Result<Option<Vec<u8>>, DadError> {
        Ok(self.chunk().await?.map(|bytes| bytes.to_vec()))
    }
}

/// The two build service operations a download needs.
#[async_trait::async_trait]
pub trait BuildService: Send + Sync {
    async fn list_builds(&self, query: &ListBuilds) -> Result<Vec<Build>, DadError>;

    async fn get_artifact_content_zip(
        &self,
        project: &str,
        build_id: u32,
        artifact_name: &str,
    ) -> Result<Box<dyn ArtifactStream>, DadError>;
}
