use crate::dad_error::DadError;
use crate::devops::ArtifactStream;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

fn saving_failed(path: &Path, e: std::io::Error) -> DadError {
    DadError::SavingResultFailed {
        path: path.to_string_lossy().to_string(),
        e,
    }
}

/// # persist stream
///
/// Copy the whole artifact stream into `path`, created or truncated.
///
/// Local I/O failures become `DadError::SavingResultFailed`, stream failures are
/// returned as is. Both the file and the stream are dropped on every path,
/// a partially written file stays on disk.
///
/// returns: count of bytes written.
pub async fn persist_stream(
    mut stream: Box<dyn ArtifactStream>,
    path: &Path,
) -> Result<u64, DadError> {
    let mut file = File::create(path)
        .await
        .map_err(|e| saving_failed(path, e))?;

    let mut written: u64 = 0;
    while let Some(chunk) = stream.next_chunk().await? {
        file.write_all(&chunk)
            .await
            .map_err(|e| saving_failed(path, e))?;
        written += chunk.len() as u64;
    }

    file.flush().await.map_err(|e| saving_failed(path, e))?;

    Ok(written)
}

/// # inspect zip
///
/// Count entries of a saved archive. `None` if it is not a readable zip.
pub fn inspect_zip(path: &Path) -> Option<usize> {
    let file = std::fs::File::open(path).ok()?;
    zip::ZipArchive::new(file).ok().map(|archive| archive.len())
}
