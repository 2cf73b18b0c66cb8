use thiserror::Error;

#[derive(Debug, Error)]
pub enum RadiantError {
    #[error("radiant file not found: {0}")]
    FileNotFound(String),
    #[error("radiant file read error: {0}")]
    FileRead(#[from] std::io::Error),
}
