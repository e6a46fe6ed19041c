//! Error types for the ball simulation
//!
//! Physics stepping itself never fails; errors only come from rejecting
//! degenerate inputs before they can turn into NaNs.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error("invalid body: {0}")]
    InvalidBody(String),

    #[error("invalid time step {0}: must be positive and finite")]
    InvalidTimeStep(f64),

    #[error("invalid scene config: {0}")]
    InvalidConfig(String),
}

impl SimError {
    pub fn body(message: impl Into<String>) -> Self {
        Self::InvalidBody(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}
