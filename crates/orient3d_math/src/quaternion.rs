//! Quaternion for representing rotations in 3D space
//!
//! A unit quaternion q = w + xi + yj + zk rotates a vector v through the
//! sandwich product v' = q * v * q⁻¹. Because v appears twice, the angle
//! stored in the quaternion is half the rotation angle, and q and -q describe
//! the same rotation (unit quaternions double-cover SO(3)).
//!
//! All rotations are active and act on column vectors.

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

use crate::mat3::Mat3;
use crate::{RotationError, Vec3};

/// Rotation quaternion `w + xi + yj + zk`
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Quaternion {
    /// Scalar component, cos(angle/2) for an axis-angle rotation
    pub w: f32,
    /// i component
    pub x: f32,
    /// j component
    pub y: f32,
    /// k component
    pub z: f32,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    /// Identity quaternion (no rotation)
    pub const IDENTITY: Self = Self { w: 1.0, x: 0.0, y: 0.0, z: 0.0 };

    /// Create a quaternion from raw components
    #[inline]
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    /// Create the quaternion rotating by `angle` radians about `axis`
    ///
    /// q = cos(θ/2) + sin(θ/2) * (axis.x i + axis.y j + axis.z k)
    ///
    /// The axis is used as given. Passing a non-unit axis yields a non-unit
    /// quaternion, whose matrix is then not a pure rotation.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let half = angle * 0.5;
        let (sin_h, cos_h) = half.sin_cos();

        Self {
            w: cos_h,
            x: sin_h * axis.x,
            y: sin_h * axis.y,
            z: sin_h * axis.z,
        }
    }

    /// Same as [`Quaternion::from_axis_angle`] for an untyped axis.
    ///
    /// Fails with [`RotationError::InvalidArgument`] unless `axis` has exactly
    /// 3 components.
    pub fn try_from_axis_angle(axis: &[f32], angle: f32) -> Result<Self, RotationError> {
        let axis = Vec3::try_from(axis)?;
        Ok(Self::from_axis_angle(axis, angle))
    }

    /// Squared norm
    #[inline]
    pub fn norm_squared(&self) -> f32 {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Norm
    #[inline]
    pub fn norm(&self) -> f32 {
        self.norm_squared().sqrt()
    }

    /// Normalize to unit norm
    pub fn normalize(&self) -> Self {
        let n = self.norm();
        if n > 0.0 {
            let inv = 1.0 / n;
            Self::new(self.w * inv, self.x * inv, self.y * inv, self.z * inv)
        } else {
            Self::IDENTITY
        }
    }

    /// Conjugate. For unit quaternions this is the inverse rotation.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Vector part (x, y, z)
    #[inline]
    pub fn vector(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Compose two rotations: result = self * other (Hamilton product)
    ///
    /// The composed rotation applies `other` first, then `self`.
    pub fn compose(&self, other: &Self) -> Self {
        let a = self;
        let b = other;

        Self {
            w: a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
            x: a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            y: a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            z: a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
        }
    }

    /// Multiply quaternions left to right: `q1 * q2 * ... * qn`
    ///
    /// The rightmost rotation is applied first. An empty sequence gives the
    /// identity.
    pub fn compose_all<I>(quaternions: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        quaternions
            .into_iter()
            .fold(Self::IDENTITY, |acc, q| acc.compose(&q))
    }

    /// Rotate a vector: v' = q * v * q⁻¹
    ///
    /// Assumes a unit quaternion.
    pub fn rotate(&self, v: Vec3) -> Vec3 {
        let u = self.vector();
        let t = u.cross(v) * 2.0;
        v + t * self.w + u.cross(t)
    }

    /// Convert to a 3x3 rotation matrix (`m[row][col]`)
    ///
    /// Orthogonal with determinant +1 only when `self` has unit norm; nothing
    /// is checked here.
    pub fn to_rotation_matrix(&self) -> Mat3 {
        let Self { w, x, y, z } = *self;

        [
            [
                1.0 - 2.0 * (y * y + z * z),
                2.0 * (x * y - w * z),
                2.0 * (x * z + w * y),
            ],
            [
                2.0 * (x * y + w * z),
                1.0 - 2.0 * (x * x + z * z),
                2.0 * (y * z - w * x),
            ],
            [
                2.0 * (x * z - w * y),
                2.0 * (y * z + w * x),
                1.0 - 2.0 * (x * x + y * y),
            ],
        ]
    }

    /// Component-wise comparison within `epsilon`
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.w - other.w).abs() <= epsilon
            && (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.z - other.z).abs() <= epsilon
    }
}

impl std::ops::Mul for Quaternion {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        self.compose(&other)
    }
}

/// Negation. `-q` represents the same rotation as `q`.
impl std::ops::Neg for Quaternion {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}
