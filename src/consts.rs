//! Numeric constants and shared comparison tolerances.

pub use std::f32::consts::*;

pub const TWO_PI: f32 = TAU;

/// Tolerance used by vector comparisons and degenerate-length checks. Compared
/// against squared lengths and distances, and against the magnitude of
/// individual scale components when inverting a transform.
#[cfg(not(feature = "loose_tolerance"))]
pub const VEC_EPSILON: f32 = 1e-6;

/// Tolerance used by quaternion comparisons and degenerate-length checks.
#[cfg(not(feature = "loose_tolerance"))]
pub const QUAT_EPSILON: f32 = 1e-6;

/// Tolerance used by vector comparisons and degenerate-length checks. Compared
/// against squared lengths and distances, and against the magnitude of
/// individual scale components when inverting a transform.
#[cfg(feature = "loose_tolerance")]
pub const VEC_EPSILON: f32 = 1e-4;

/// Tolerance used by quaternion comparisons and degenerate-length checks.
#[cfg(feature = "loose_tolerance")]
pub const QUAT_EPSILON: f32 = 1e-4;
