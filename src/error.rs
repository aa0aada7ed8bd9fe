//! Crate error type

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Camera view matrix could not be inverted
    #[error("singular matrix (determinant {determinant})")]
    SingularMatrix { determinant: f32 },

    /// Ball radius must be finite and positive
    #[error("invalid ball radius: {0}")]
    InvalidRadius(f32),

    /// Camera frames must satisfy soft <= hard with a positive frame size
    #[error("invalid camera frame: hard {hard}, soft {soft}, size {size}")]
    InvalidFrame { hard: f32, soft: f32, size: f32 },

    #[error("settings: {0}")]
    Settings(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
