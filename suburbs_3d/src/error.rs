//! Error types for the Suburbs3D renderer
//!
//! This module defines the error types used throughout the renderer,
//! including device failures, initialization, and degenerate geometry.

use std::fmt;

/// Result type for Suburbs3D operations
pub type Result<T> = std::result::Result<T, Error>;

/// Suburbs3D errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Backend-specific error (OpenGL, Vulkan, etc.)
    BackendError(String),

    /// Invalid resource (program, depth target, uniform, etc.)
    InvalidResource(String),

    /// Initialization failed (programs, shadow target, subsystems)
    InitializationFailed(String),

    /// Camera position and target coincide, or the look direction is
    /// parallel to the up reference, so no orthonormal basis exists
    DegenerateCameraBasis,

    /// Light base direction is zero or parallel to the light's up axis
    DegenerateLightDirection,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::DegenerateCameraBasis => write!(f, "Degenerate camera basis"),
            Error::DegenerateLightDirection => write!(f, "Degenerate light direction"),
        }
    }
}

impl std::error::Error for Error {}

/// Log an ERROR message and return early with `Error::BackendError`
///
/// # Example
///
/// ```
/// use suburbs_3d::engine_bail;
/// use suburbs_3d::suburbs3d::{Error, Result};
///
/// fn check_size(width: u32, height: u32) -> Result<()> {
///     if width != height {
///         engine_bail!("suburbs3d::ShadowMap", "Shadow map {}x{} is not square", width, height);
///     }
///     Ok(())
/// }
///
/// assert!(check_size(2048, 2048).is_ok());
/// assert!(matches!(check_size(2048, 1024), Err(Error::BackendError(_))));
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        return Err($crate::suburbs3d::Error::BackendError(message));
    }};
}

/// Log an ERROR message and evaluate to the given error value
///
/// # Example
///
/// ```
/// use suburbs_3d::engine_err;
/// use suburbs_3d::suburbs3d::Error;
///
/// let err = engine_err!("suburbs3d::Camera", Error::DegenerateCameraBasis);
/// assert_eq!(err, Error::DegenerateCameraBasis);
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $error:expr) => {{
        let error = $error;
        $crate::engine_error!($source, "{}", error);
        error
    }};
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
