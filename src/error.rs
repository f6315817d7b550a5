use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Metadata service returned status: {0}")]
    HttpError(u16),

    #[error("Failed to parse metadata response: {0}")]
    ParseError(String),
}

impl PreviewError {
    pub fn log(&self) {
        match self {
            PreviewError::NetworkError(e) => {
                error!(error = %e, "Metadata fetch failed");
            }
            PreviewError::HttpError(status) => {
                warn!(status = %status, "Metadata service returned failure status");
            }
            PreviewError::ParseError(e) => {
                warn!(error = %e, "Metadata response could not be parsed");
            }
        }
    }
}
