//! # Mesh Errors
//!
//! Error types for classification, solving and rasterization.
//!
//! ## Error Policy
//!
//! - Invalid input is rejected before any geometry is computed
//! - No partial meshes are returned on failure
//! - Degenerate cosine-rule inputs are NOT errors; the classifier maps them
//!   to its boundary policy

use config::constants::ConfigError;
use thiserror::Error;
use tracing::trace;

/// Errors that can occur while building a mesh.
///
/// ## Example
///
/// ```rust
/// use polygon_mesh::{Centering, MeshError};
///
/// match "bogus".parse::<Centering>() {
///     Ok(_) => unreachable!(),
///     Err(MeshError::Configuration { message }) => assert!(message.contains("bogus")),
///     Err(e) => panic!("unexpected error: {e}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// A parameter combination that cannot be interpreted, such as an
    /// unknown centering mode or an ambiguous circumradius request.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What was wrong with the configuration
        message: String,
    },

    /// A value outside its valid domain (sides < 3, non-positive lengths).
    #[error("Precondition failed: {message}")]
    Precondition {
        /// Which precondition failed and the offending value
        message: String,
    },

    /// Invalid tolerance settings.
    #[error("Invalid tolerance: {0}")]
    Config(#[from] ConfigError),
}

impl MeshError {
    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        let message = message.into();
        trace!(%message, "rejected configuration");
        Self::Configuration { message }
    }

    /// Creates a precondition error.
    pub fn precondition(message: impl Into<String>) -> Self {
        let message = message.into();
        trace!(%message, "rejected input");
        Self::Precondition { message }
    }
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

/// Rejects zero, negative and non-finite lengths.
pub(crate) fn ensure_positive(name: &str, value: f64) -> MeshResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MeshError::precondition(format!(
            "{name} must be positive and finite: {value}"
        )))
    }
}

/// Rejects polygons with fewer than three sides.
pub(crate) fn ensure_sides(sides: u32) -> MeshResult<()> {
    if sides < config::constants::MIN_POLYGON_SIDES {
        return Err(MeshError::precondition(format!(
            "a polygon needs at least {} sides: {sides}",
            config::constants::MIN_POLYGON_SIDES
        )));
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
