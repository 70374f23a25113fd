use thiserror::Error;

/// Failures at the ingestion boundary. The engine itself is total over
/// well-formed input and never produces these; callers see them only when
/// loading a dataset, and decide whether to retry or proceed with an empty
/// row set.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to open CSV input: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse CSV input: {0}")]
    Csv(#[from] csv::Error),
}
