use std::path::PathBuf;

use canvas::CanvasError;
use wire::{EditError, GenerationError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("relay refused request ({status} {code}): {message}")]
    Relay { status: u16, code: String, message: String },
    #[error("upstream API returned {status}: {message}")]
    Upstream { status: u16, message: String },
    #[error(transparent)]
    Canvas(#[from] CanvasError),
    #[error("invalid edit: {0}")]
    Edit(#[from] EditError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error("{}: {source}", .path.display())]
    Io { path: PathBuf, source: std::io::Error },
    #[error("{}: not a PNG, JPEG or WebP image", .0.display())]
    UnsupportedImage(PathBuf),
    #[error("invalid argument: {0}")]
    InvalidArg(String),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
