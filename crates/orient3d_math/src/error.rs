//! Rotation error types
//!
//! Only two things can go wrong in this crate: an axis with the wrong number
//! of components, and Euler extraction at gimbal lock. Everything else
//! (unit-length axes, a consistent composition order) is left to the caller.

use std::fmt;

/// Error type for rotation operations
#[derive(Debug, Clone, PartialEq)]
pub enum RotationError {
    /// Malformed input, e.g. an axis that does not have exactly 3 components
    InvalidArgument(String),
    /// Euler angles are undefined: pitch is at ±90° and yaw/roll are coupled
    Singular {
        /// The value that would have been passed to `asin`
        pitch_sine: f32,
    },
}

impl fmt::Display for RotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RotationError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            RotationError::Singular { pitch_sine } => write!(
                f,
                "Singular rotation: gimbal lock (sin(pitch) = {})",
                pitch_sine
            ),
        }
    }
}

impl std::error::Error for RotationError {}

impl From<String> for RotationError {
    fn from(msg: String) -> Self {
        RotationError::InvalidArgument(msg)
    }
}

impl From<&str> for RotationError {
    fn from(msg: &str) -> Self {
        RotationError::InvalidArgument(msg.to_string())
    }
}
