//! Rotation Mathematics Library
//!
//! This crate converts between axis-angle pairs, quaternions, rotation
//! matrices and yaw/pitch/roll angles for a 3D viewpoint.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector, used as rotation axis
//! - [`Quaternion`] - rotation quaternion with axis-angle constructor and
//!   Hamilton product composition
//! - [`Mat3`] - 3x3 rotation matrix (`m[row][col]`)
//! - [`EulerAngles`] - yaw (Y), pitch (X), roll (Z) in radians
//! - [`EulerConvention`] - composition order and roll sign
//! - [`RotationError`] - invalid axis / gimbal lock
//!
//! ## Example
//!
//! ```
//! use orient3d_math::{EulerAngles, EulerConvention, Quaternion};
//!
//! let angles = EulerAngles::from_degrees(30.0, 45.0, 0.0);
//! let convention = EulerConvention::default();
//! let q = Quaternion::from_euler(angles, convention);
//! let back = q.to_euler_angles(convention).unwrap();
//! assert!(back.approx_eq(&angles, 1e-4));
//! ```

mod error;
mod vec3;
mod quaternion;
pub mod mat3;
pub mod euler;

pub use error::RotationError;
pub use vec3::Vec3;
pub use quaternion::Quaternion;
pub use mat3::{Mat3, MatrixLayout};
pub use euler::{CompositionOrder, EulerAngles, EulerConvention};
