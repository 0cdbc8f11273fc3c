use thiserror::Error;

#[derive(Error, Debug)]
pub enum AscmineError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Tagging failed: {0}")]
    Tagging(String),

    #[error("Duplicate input file name: {0}")]
    DuplicateFileName(String),

    #[error("Failed to load file: {0}")]
    FailedToLoadFile(String),

    #[error("AscmineError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for AscmineError {
    fn from(error: std::io::Error) -> Self {
        AscmineError::Io(Box::new(error))
    }
}
