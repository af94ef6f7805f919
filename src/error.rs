use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepoLensError {
    #[error("invalid repository url: {0}")]
    InvalidRepoUrl(String),

    #[error("snapshot clone failed: {0}")]
    SnapshotFailed(String),

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RepoLensError>;
