use std::process::ExitStatus;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, InferError>;

#[derive(Error, Debug)]
pub enum InferError {
    #[error("git log exited with {status}: {stderr}")]
    GitLog { status: ExitStatus, stderr: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unusable locale list: {0}")]
    Locale(String),
}
