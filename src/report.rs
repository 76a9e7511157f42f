//! Derivation report
//!
//! Evaluates the configured sample orientations and lays out, per sample, the
//! single-axis quaternions, their matrices, the composed quaternion and the
//! yaw/pitch/roll recovered from it.

use std::fmt;

use orient3d_math::{
    euler, mat3, EulerAngles, EulerConvention, Mat3, MatrixLayout, Quaternion, RotationError, Vec3,
};

use crate::config::{AppConfig, AxesConfig};

/// Validated rotation axes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axes {
    pub yaw: Vec3,
    pub pitch: Vec3,
    pub roll: Vec3,
}

impl Default for Axes {
    fn default() -> Self {
        Self {
            yaw: euler::YAW_AXIS,
            pitch: euler::PITCH_AXIS,
            roll: euler::ROLL_AXIS,
        }
    }
}

impl Axes {
    /// Check the configured axes have 3 components each
    pub fn from_config(config: &AxesConfig) -> Result<Self, RotationError> {
        let axis = |name: &str, components: &[f32]| {
            Vec3::try_from(components).map_err(|e| match e {
                RotationError::InvalidArgument(msg) => {
                    RotationError::InvalidArgument(format!("{} {}", name, msg))
                }
                other => other,
            })
        };

        Ok(Self {
            yaw: axis("yaw", config.yaw.as_slice())?,
            pitch: axis("pitch", config.pitch.as_slice())?,
            roll: axis("roll", config.roll.as_slice())?,
        })
    }

    /// Whether these are the axes Euler extraction is defined for
    pub fn is_canonical(&self) -> bool {
        *self == Self::default()
    }
}

/// Everything computed for one sample orientation
#[derive(Debug, Clone)]
pub struct Derivation {
    /// Input angles (radians)
    pub angles: EulerAngles,
    pub q_yaw: Quaternion,
    pub q_pitch: Quaternion,
    pub q_roll: Quaternion,
    /// Product in the convention's order
    pub q_final: Quaternion,
    /// Angles extracted from `q_final`; `None` when the axes are not the
    /// canonical Y/X/Z and extraction does not apply
    pub recovered: Option<Result<EulerAngles, RotationError>>,
}

impl Derivation {
    pub fn compute(angles: EulerAngles, axes: &Axes, convention: EulerConvention) -> Self {
        let q_yaw = Quaternion::from_axis_angle(axes.yaw, angles.yaw);
        let q_pitch = Quaternion::from_axis_angle(axes.pitch, angles.pitch);
        let q_roll = Quaternion::from_axis_angle(axes.roll, convention.roll_angle(angles.roll));
        let q_final = convention.compose(q_yaw, q_pitch, q_roll);

        let recovered = axes
            .is_canonical()
            .then(|| q_final.to_euler_angles(convention));

        log::debug!("Sample {:?} -> {:?}", angles.to_degrees(), q_final);

        Self {
            angles,
            q_yaw,
            q_pitch,
            q_roll,
            q_final,
            recovered,
        }
    }

    /// Whether the composed rotation sits at gimbal lock
    pub fn is_singular(&self) -> bool {
        matches!(self.recovered, Some(Err(RotationError::Singular { .. })))
    }
}

/// All derivations for a configuration, ready to print
#[derive(Debug, Clone)]
pub struct Report {
    pub convention: EulerConvention,
    pub axes: Axes,
    pub layout: MatrixLayout,
    pub precision: usize,
    pub show_components: bool,
    pub derivations: Vec<Derivation>,
}

impl Report {
    /// Evaluate every configured sample
    ///
    /// Fails only on a malformed axis; gimbal lock is recorded per sample.
    pub fn build(config: &AppConfig) -> Result<Self, RotationError> {
        let axes = Axes::from_config(&config.axes)?;
        let convention = config.convention;

        if !axes.is_canonical() {
            log::warn!("Non-standard axes configured; Euler extraction skipped");
        }

        let derivations: Vec<Derivation> = config
            .samples
            .angles
            .iter()
            .map(|sample| Derivation::compute(sample.to_angles(), &axes, convention))
            .collect();

        for (sample, derivation) in config.samples.angles.iter().zip(&derivations) {
            if derivation.is_singular() {
                log::warn!(
                    "Gimbal lock at yaw={} pitch={} roll={}",
                    sample.yaw,
                    sample.pitch,
                    sample.roll
                );
            }
        }

        log::info!(
            "Evaluated {} samples with {}",
            derivations.len(),
            convention.order.formula()
        );

        Ok(Self {
            convention,
            axes,
            layout: config.output.layout,
            precision: config.output.precision,
            show_components: config.output.show_components,
            derivations,
        })
    }

    fn write_quaternion(&self, f: &mut fmt::Formatter<'_>, label: &str, q: &Quaternion) -> fmt::Result {
        let p = self.precision;
        writeln!(
            f,
            "{:<8}= {:+.p$} {:+.p$}i {:+.p$}j {:+.p$}k",
            label, q.w, q.x, q.y, q.z,
            p = p
        )
    }

    /// Print the matrix the way a consumer with `self.layout` stores it:
    /// nine floats, three per line.
    fn write_matrix(&self, f: &mut fmt::Formatter<'_>, m: Mat3) -> fmt::Result {
        let p = self.precision;
        let flat = mat3::flatten(m, self.layout);
        for row in flat.chunks(3) {
            writeln!(f, "  [{:+.p$}, {:+.p$}, {:+.p$}]", row[0], row[1], row[2], p = p)?;
        }
        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "q_final = {}", self.convention.order.formula())?;
        writeln!(f, "          {}", self.convention.order.description())?;
        if self.convention.negate_roll {
            writeln!(f, "          roll is negated before composition")?;
        }
        match self.layout {
            MatrixLayout::RowMajor => writeln!(f, "Matrices printed row-major (m[row][col]).")?,
            MatrixLayout::ColumnMajor => writeln!(
                f,
                "Matrices printed column-major: each line is a column, i.e. the transpose."
            )?,
        }

        for d in &self.derivations {
            let [yaw, pitch, roll] = d.angles.to_degrees();
            writeln!(f)?;
            writeln!(f, "== yaw={:.1} pitch={:.1} roll={:.1} (degrees) ==", yaw, pitch, roll)?;

            if self.show_components {
                for (label, q) in [("q_yaw", &d.q_yaw), ("q_pitch", &d.q_pitch), ("q_roll", &d.q_roll)] {
                    writeln!(f)?;
                    self.write_quaternion(f, label, q)?;
                    self.write_matrix(f, q.to_rotation_matrix())?;
                }
            }

            writeln!(f)?;
            self.write_quaternion(f, "q_final", &d.q_final)?;
            self.write_matrix(f, d.q_final.to_rotation_matrix())?;

            writeln!(f)?;
            match &d.recovered {
                Some(Ok(angles)) => {
                    let [yaw, pitch, roll] = angles.to_degrees();
                    let p = self.precision;
                    writeln!(
                        f,
                        "recovered: yaw={:.p$} pitch={:.p$} roll={:.p$}",
                        yaw, pitch, roll,
                        p = p
                    )?;
                }
                Some(Err(e)) => writeln!(f, "recovered: {}", e)?,
                None => writeln!(f, "recovered: n/a (non-standard axes)")?,
            }
        }

        Ok(())
    }
}
