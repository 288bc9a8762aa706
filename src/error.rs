use std::path::PathBuf;

/// Failures while loading a content file from disk.
///
/// Layout math never produces these: malformed dates and empty tables
/// degrade silently inside the timeline engine instead.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The file could not be read.
    #[error("failed to read content file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid content document.
    #[error("failed to parse content file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
