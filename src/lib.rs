//! Rotation and scale-rotation-translation transform algebra for skeletal
//! poses.
//!
//! The algebra is fail-soft. Degenerate input such as a zero-length vector or
//! quaternion, or a vanishing scale component, falls back to a finite default
//! instead of producing NaN or infinity. Only the file IO in the `io` module
//! can fail.

#[macro_use]
mod macros;

pub mod consts;
#[cfg(feature = "ron")]
pub mod io;
pub mod matrix;
pub mod quaternion;
pub mod transform;
pub mod vector;

pub use matrix::Matrix4;
pub use quaternion::Quaternion;
pub use transform::Transform;
pub use vector::{Vector2, Vector3};
