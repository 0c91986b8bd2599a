use thiserror::Error;

/// Failures that prevent the service from starting.
///
/// Request handling itself has no error taxonomy: an unknown zone id is
/// answered with a placeholder record and HTTP 200, never an error status.
/// The dataset is the only thing that can fail, and only once, at load time.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("failed to read dataset file: {0}")]
    DatasetIo(#[from] std::io::Error),

    #[error("failed to parse dataset file: {0}")]
    DatasetParse(#[from] serde_json::Error),

    #[error("dataset root must be a JSON array of zone objects")]
    DatasetShape,
}

pub type Result<T> = std::result::Result<T, AppError>;
