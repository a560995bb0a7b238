//! # Config Crate
//!
//! Centralized configuration constants for the polygon mesh tools.
//! All magic numbers and tunable parameters are defined here so the
//! classifier, the solver and the rasterizer agree on one set of values.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ANGLE_SUM_TOLERANCE, COINCIDENCE_TOLERANCE, Tolerances};
//!
//! // Angle sums within ANGLE_SUM_TOLERANCE of 2π classify as inside
//! let sum = 2.0 * std::f64::consts::PI - 5.0e-5;
//! assert!((sum - 2.0 * std::f64::consts::PI).abs() <= ANGLE_SUM_TOLERANCE);
//!
//! // The default tolerance snapshot carries the same values
//! let tolerances = Tolerances::default();
//! assert_eq!(tolerances.coincidence, COINCIDENCE_TOLERANCE);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Absolute Tolerances**: Coordinates are small-magnitude nanometre values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
