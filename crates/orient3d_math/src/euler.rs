//! Yaw / pitch / roll conventions
//!
//! Axes are fixed: yaw about Y (up), pitch about X, roll about Z (view
//! direction). What is *not* fixed is the order in which the three single-axis
//! quaternions are multiplied, nor whether roll is negated before use. Both
//! depend on the matrix convention of whoever consumes the result, so they
//! are carried explicitly in an [`EulerConvention`].

use serde::{Serialize, Deserialize};

use crate::{Quaternion, RotationError, Vec3};

/// Axis used for yaw
pub const YAW_AXIS: Vec3 = Vec3::Y;
/// Axis used for pitch
pub const PITCH_AXIS: Vec3 = Vec3::X;
/// Axis used for roll
pub const ROLL_AXIS: Vec3 = Vec3::Z;

/// Extraction refuses `|sin(pitch)| > 1 - GIMBAL_LOCK_EPSILON`
pub const GIMBAL_LOCK_EPSILON: f32 = 1e-5;

/// Orientation as three angles in radians
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EulerAngles {
    /// Rotation about Y
    pub yaw: f32,
    /// Rotation about X
    pub pitch: f32,
    /// Rotation about Z
    pub roll: f32,
}

impl EulerAngles {
    pub const fn new(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self { yaw, pitch, roll }
    }

    /// Build from angles given in degrees
    pub fn from_degrees(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self::new(yaw.to_radians(), pitch.to_radians(), roll.to_radians())
    }

    /// (yaw, pitch, roll) in degrees
    pub fn to_degrees(&self) -> [f32; 3] {
        [
            self.yaw.to_degrees(),
            self.pitch.to_degrees(),
            self.roll.to_degrees(),
        ]
    }

    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.yaw - other.yaw).abs() <= epsilon
            && (self.pitch - other.pitch).abs() <= epsilon
            && (self.roll - other.roll).abs() <= epsilon
    }
}

/// Multiplication order of the single-axis quaternions
///
/// With active rotations on column vectors, the rightmost factor is applied
/// first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositionOrder {
    /// `q_roll * q_pitch * q_yaw`, matrix `Rz(roll) Rx(pitch) Ry(yaw)`.
    ///
    /// Extrinsic Y, X, Z (yaw first about the fixed axes), which is the same
    /// as intrinsic Z-X'-Y''.
    #[default]
    RollPitchYaw,
    /// `q_yaw * q_pitch * q_roll`, matrix `Ry(yaw) Rx(pitch) Rz(roll)`.
    ///
    /// Extrinsic Z, X, Y (roll first about the fixed axes), which is the same
    /// as intrinsic Y-X'-Z''.
    YawPitchRoll,
}

impl CompositionOrder {
    /// Product written out, e.g. for report headers
    pub fn formula(&self) -> &'static str {
        match self {
            CompositionOrder::RollPitchYaw => "q_roll * q_pitch * q_yaw",
            CompositionOrder::YawPitchRoll => "q_yaw * q_pitch * q_roll",
        }
    }

    /// Physical meaning of the order
    pub fn description(&self) -> &'static str {
        match self {
            CompositionOrder::RollPitchYaw => {
                "extrinsic Y-X-Z (yaw applied first), intrinsic Z-X'-Y''"
            }
            CompositionOrder::YawPitchRoll => {
                "extrinsic Z-X-Y (roll applied first), intrinsic Y-X'-Z''"
            }
        }
    }
}

/// Order and sign choices needed to match a particular renderer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EulerConvention {
    /// Multiplication order
    #[serde(default)]
    pub order: CompositionOrder,
    /// Negate roll before building its quaternion
    #[serde(default)]
    pub negate_roll: bool,
}

impl EulerConvention {
    pub const fn new(order: CompositionOrder, negate_roll: bool) -> Self {
        Self { order, negate_roll }
    }

    /// Roll angle as it enters the roll quaternion
    #[inline]
    pub fn roll_angle(&self, roll: f32) -> f32 {
        if self.negate_roll {
            -roll
        } else {
            roll
        }
    }

    /// Multiply the three single-axis quaternions in this convention's order
    pub fn compose(&self, q_yaw: Quaternion, q_pitch: Quaternion, q_roll: Quaternion) -> Quaternion {
        match self.order {
            CompositionOrder::RollPitchYaw => Quaternion::compose_all([q_roll, q_pitch, q_yaw]),
            CompositionOrder::YawPitchRoll => Quaternion::compose_all([q_yaw, q_pitch, q_roll]),
        }
    }
}

impl Quaternion {
    /// Combined orientation for `angles` under `convention`
    pub fn from_euler(angles: EulerAngles, convention: EulerConvention) -> Self {
        let q_yaw = Quaternion::from_axis_angle(YAW_AXIS, angles.yaw);
        let q_pitch = Quaternion::from_axis_angle(PITCH_AXIS, angles.pitch);
        let q_roll = Quaternion::from_axis_angle(ROLL_AXIS, convention.roll_angle(angles.roll));

        convention.compose(q_yaw, q_pitch, q_roll)
    }

    /// Recover yaw, pitch and roll from a unit quaternion
    ///
    /// Only valid for quaternions built with the same `convention`. Pitch is
    /// returned in [-π/2, π/2], yaw and roll in (-π, π].
    ///
    /// At pitch = ±90° yaw and roll rotate about the same axis and only their
    /// sum (or difference) is determined. That gimbal lock is reported as
    /// [`RotationError::Singular`] rather than picking one of the infinitely
    /// many decompositions.
    pub fn to_euler_angles(&self, convention: EulerConvention) -> Result<EulerAngles, RotationError> {
        let Self { w, x, y, z } = *self;

        let (pitch_sine, yaw_num, roll_num) = match convention.order {
            // Rz Rx Ry: m21 = sin p, m20 / m22 give yaw, m01 / m11 give roll
            CompositionOrder::RollPitchYaw => (
                2.0 * (w * x + y * z),
                2.0 * (w * y - x * z),
                2.0 * (w * z - x * y),
            ),
            // Ry Rx Rz: m12 = -sin p, m02 / m22 give yaw, m10 / m11 give roll
            CompositionOrder::YawPitchRoll => (
                2.0 * (w * x - y * z),
                2.0 * (x * z + w * y),
                2.0 * (x * y + w * z),
            ),
        };

        if pitch_sine.abs() > 1.0 - GIMBAL_LOCK_EPSILON {
            log::debug!("Gimbal lock: sin(pitch) = {}", pitch_sine);
            return Err(RotationError::Singular { pitch_sine });
        }

        let yaw = yaw_num.atan2(1.0 - 2.0 * (x * x + y * y));
        let pitch = pitch_sine.asin();
        let roll = roll_num.atan2(1.0 - 2.0 * (x * x + z * z));

        Ok(EulerAngles::new(yaw, pitch, convention.roll_angle(roll)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mat3;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    const EPSILON: f32 = 0.0001;

    const CONVENTIONS: [EulerConvention; 4] = [
        EulerConvention::new(CompositionOrder::RollPitchYaw, false),
        EulerConvention::new(CompositionOrder::RollPitchYaw, true),
        EulerConvention::new(CompositionOrder::YawPitchRoll, false),
        EulerConvention::new(CompositionOrder::YawPitchRoll, true),
    ];

    fn rot_x(a: f32) -> mat3::Mat3 {
        [[1.0, 0.0, 0.0], [0.0, a.cos(), -a.sin()], [0.0, a.sin(), a.cos()]]
    }

    fn rot_y(a: f32) -> mat3::Mat3 {
        [[a.cos(), 0.0, a.sin()], [0.0, 1.0, 0.0], [-a.sin(), 0.0, a.cos()]]
    }

    fn rot_z(a: f32) -> mat3::Mat3 {
        [[a.cos(), -a.sin(), 0.0], [a.sin(), a.cos(), 0.0], [0.0, 0.0, 1.0]]
    }

    #[test]
    fn test_roll_pitch_yaw_matches_matrix_product() {
        let angles = EulerAngles::new(0.4, -0.9, 1.7);
        let q = Quaternion::from_euler(angles, EulerConvention::default());

        let expected = mat3::mul(rot_z(1.7), mat3::mul(rot_x(-0.9), rot_y(0.4)));
        assert!(mat3::approx_eq(q.to_rotation_matrix(), expected, EPSILON));
    }

    #[test]
    fn test_yaw_pitch_roll_matches_matrix_product() {
        let angles = EulerAngles::new(0.4, -0.9, 1.7);
        let convention = EulerConvention::new(CompositionOrder::YawPitchRoll, false);
        let q = Quaternion::from_euler(angles, convention);

        let expected = mat3::mul(rot_y(0.4), mat3::mul(rot_x(-0.9), rot_z(1.7)));
        assert!(mat3::approx_eq(q.to_rotation_matrix(), expected, EPSILON));
    }

    #[test]
    fn test_negate_roll_flips_roll_only() {
        let angles = EulerAngles::new(0.0, 0.0, 0.6);
        let flipped = EulerConvention::new(CompositionOrder::RollPitchYaw, true);

        let q = Quaternion::from_euler(angles, flipped);
        let expected = Quaternion::from_axis_angle(ROLL_AXIS, -0.6);
        assert!(q.approx_eq(&expected, EPSILON));
    }

    #[test]
    fn test_orders_differ() {
        let angles = EulerAngles::new(0.5, 0.3, -1.0);
        let a = Quaternion::from_euler(angles, CONVENTIONS[0]);
        let b = Quaternion::from_euler(angles, CONVENTIONS[2]);
        assert!(!mat3::approx_eq(a.to_rotation_matrix(), b.to_rotation_matrix(), EPSILON));
    }

    #[test]
    fn test_round_trip() {
        let yaws = [-2.5, -0.3, 0.0, 1.1, 3.0];
        let pitches = [-1.3, -0.2, 0.0, 0.7, 1.4];
        let rolls = [-3.0, -0.5, 0.0, 0.9, 2.2];

        for convention in CONVENTIONS {
            for yaw in yaws {
                for pitch in pitches {
                    for roll in rolls {
                        let angles = EulerAngles::new(yaw, pitch, roll);
                        let q = Quaternion::from_euler(angles, convention);
                        let recovered = q.to_euler_angles(convention).unwrap();
                        assert!(
                            recovered.approx_eq(&angles, 0.001),
                            "{:?}: expected {:?}, got {:?}",
                            convention,
                            angles,
                            recovered
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_pitch_45_recovered() {
        let angles = EulerAngles::new(0.0, FRAC_PI_4, 0.0);
        for convention in CONVENTIONS {
            let q = Quaternion::from_euler(angles, convention);
            let recovered = q.to_euler_angles(convention).unwrap();
            assert!((recovered.pitch - FRAC_PI_4).abs() < EPSILON);
            assert!((recovered.pitch.to_degrees() - 45.0).abs() < 0.01);
            assert!(recovered.yaw.abs() < EPSILON);
            assert!(recovered.roll.abs() < EPSILON);
        }
    }

    #[test]
    fn test_pitch_90_is_singular() {
        for pitch in [FRAC_PI_2, -FRAC_PI_2] {
            let angles = EulerAngles::new(0.0, pitch, 0.0);
            for convention in CONVENTIONS {
                let q = Quaternion::from_euler(angles, convention);
                match q.to_euler_angles(convention) {
                    Err(RotationError::Singular { pitch_sine }) => {
                        assert!((pitch_sine.abs() - 1.0).abs() < EPSILON);
                    }
                    other => panic!("Expected Singular, got {:?}", other),
                }
            }
        }
    }

    #[test]
    fn test_gimbal_lock_with_yaw_and_roll() {
        // Yaw and roll coupled at pitch = 90°: still singular
        let angles = EulerAngles::new(0.7, FRAC_PI_2, -0.2);
        let q = Quaternion::from_euler(angles, EulerConvention::default());
        assert!(matches!(
            q.to_euler_angles(EulerConvention::default()),
            Err(RotationError::Singular { .. })
        ));
    }

    #[test]
    fn test_near_gimbal_lock_still_extracts() {
        let angles = EulerAngles::from_degrees(0.0, 89.0, 0.0);
        let q = Quaternion::from_euler(angles, EulerConvention::default());
        let recovered = q.to_euler_angles(EulerConvention::default()).unwrap();
        assert!((recovered.pitch - angles.pitch).abs() < 0.001);
    }

    #[test]
    fn test_identity_gives_zero_angles() {
        for convention in CONVENTIONS {
            let angles = Quaternion::IDENTITY.to_euler_angles(convention).unwrap();
            assert!(angles.approx_eq(&EulerAngles::default(), EPSILON));
        }
    }

    #[test]
    fn test_degrees_conversion() {
        let angles = EulerAngles::from_degrees(90.0, 45.0, -30.0);
        assert!((angles.yaw - FRAC_PI_2).abs() < EPSILON);
        let [yaw, pitch, roll] = angles.to_degrees();
        assert!((yaw - 90.0).abs() < 0.001);
        assert!((pitch - 45.0).abs() < 0.001);
        assert!((roll + 30.0).abs() < 0.001);
    }
}
