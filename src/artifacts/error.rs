use std::path::PathBuf;

use thiserror::Error;

/// Load-time failures. Both are terminal for the session and neither is
/// retried: the artifacts are static local files, so a retry cannot help.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// The serialized model file does not exist.
    #[error("model file '{0}' not found; export the fitted model first")]
    MissingArtifact(PathBuf),

    /// Any other problem: I/O, deserialization, a malformed dataset, or a
    /// model/dataset schema mismatch.
    #[error("{0}")]
    LoadFailure(String),
}
