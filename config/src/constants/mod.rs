//! Centralized configuration values shared across the polygon mesh crates.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// General numerical tolerance for comparing lengths and remainders.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

/// Absolute tolerance (radians) between an angle sum and 2π for a point to
/// classify as enclosed by a polygon.
///
/// # Examples
/// ```
/// use config::constants::ANGLE_SUM_TOLERANCE;
/// let full_turn = 2.0 * std::f64::consts::PI;
/// assert!((full_turn - (full_turn - 1.0e-5)).abs() <= ANGLE_SUM_TOLERANCE);
/// ```
pub const ANGLE_SUM_TOLERANCE: f64 = 1.0e-4;

/// Distance under which a query point is treated as lying on a polygon vertex.
///
/// # Examples
/// ```
/// use config::constants::COINCIDENCE_TOLERANCE;
/// let distance: f64 = 1.0e-12;
/// assert!(distance <= COINCIDENCE_TOLERANCE);
/// ```
pub const COINCIDENCE_TOLERANCE: f64 = 1.0e-9;

// =============================================================================
// GEOMETRY CONSTANTS
// =============================================================================

/// Smallest number of sides that forms a polygon.
///
/// # Examples
/// ```
/// use config::constants::MIN_POLYGON_SIDES;
/// assert_eq!(MIN_POLYGON_SIDES, 3);
/// ```
pub const MIN_POLYGON_SIDES: u32 = 3;

/// Default element size (nanometres) along either grid axis.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SPACING;
/// let user_spacing: Option<f64> = None;
/// assert_eq!(user_spacing.unwrap_or(DEFAULT_SPACING), 1.0);
/// ```
pub const DEFAULT_SPACING: f64 = 1.0;

/// Number of points used when sampling a circular outline for display.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_OUTLINE_SEGMENTS;
/// assert!(DEFAULT_OUTLINE_SEGMENTS >= 12);
/// ```
pub const DEFAULT_OUTLINE_SEGMENTS: u32 = 64;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of candidate cells a single rasterization may scan.
///
/// Safety limit against diameter/spacing ratios that would exhaust memory.
///
/// # Examples
/// ```
/// use config::constants::MAX_CANDIDATE_CELLS;
/// let candidates = 601 * 601;
/// assert!(candidates < MAX_CANDIDATE_CELLS);
/// ```
pub const MAX_CANDIDATE_CELLS: usize = 50_000_000;

// =============================================================================
// TOLERANCE SNAPSHOT
// =============================================================================

/// Immutable set of tolerances handed to the point-in-polygon classifier.
///
/// # Examples
/// ```
/// use config::constants::Tolerances;
/// let tolerances = Tolerances::default();
/// assert!(tolerances.angle_sum > tolerances.coincidence);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    /// Allowed absolute deviation of the angle sum from 2π.
    pub angle_sum: f64,
    /// Distance under which a point coincides with a vertex.
    pub coincidence: f64,
}

impl Tolerances {
    /// Builds a tolerance set, rejecting zero, negative or non-finite values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::Tolerances;
    /// let tight = Tolerances::new(1.0e-6, 1.0e-12).expect("valid tolerances");
    /// assert_eq!(tight.angle_sum, 1.0e-6);
    /// assert!(Tolerances::new(0.0, 1.0e-9).is_err());
    /// ```
    pub fn new(angle_sum: f64, coincidence: f64) -> Result<Self, ConfigError> {
        for value in [angle_sum, coincidence] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidTolerance(value));
            }
        }
        Ok(Self {
            angle_sum,
            coincidence,
        })
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            angle_sum: ANGLE_SUM_TOLERANCE,
            coincidence: COINCIDENCE_TOLERANCE,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when a tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive and finite: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are equal within [`EPSILON_TOLERANCE`].
///
/// # Examples
/// ```
/// use config::constants::approx_equal;
/// assert!(approx_equal(1.0, 1.0 + 1.0e-12));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON_TOLERANCE
}

/// Returns true when `value` is a whole multiple of `step`, allowing the
/// floating-point remainder to miss zero from either side by
/// [`EPSILON_TOLERANCE`].
///
/// # Examples
/// ```
/// use config::constants::is_multiple_of;
/// assert!(is_multiple_of(30.0, 6.0));
/// assert!(is_multiple_of(0.6, 0.2));
/// assert!(!is_multiple_of(30.0, 8.0));
/// ```
pub fn is_multiple_of(value: f64, step: f64) -> bool {
    let remainder = value.rem_euclid(step);
    remainder <= EPSILON_TOLERANCE || (step - remainder) <= EPSILON_TOLERANCE
}
