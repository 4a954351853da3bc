#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("operation failed: {0}")]
    OperationFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("no file selected")]
    MissingName,
    #[error("file type not allowed: {0} (expected a .zip package)")]
    UnsupportedExtension(String),
    #[error("selected file {0} is empty")]
    EmptyFile(String),
}
