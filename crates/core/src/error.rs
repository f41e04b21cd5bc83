use std::time::Duration;

use thiserror::Error;
use tracing::error;

/// Failure modes for accelerator and operation calls.
#[derive(Debug, Error)]
pub enum AxlError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("timed out after {0:?}")]
    Timeout(Duration),

    #[error("no exit conditions given")]
    EmptyConditions,
}

/// Collapses a failed call to `None`, logging the error.
///
/// Callers that do not care which way a call failed can treat the
/// result as plain "no result"; the error kind is preserved for
/// callers that match on it instead.
pub fn trap<T>(result: Result<T, AxlError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            error!("call failed: {e}");
            None
        }
    }
}
