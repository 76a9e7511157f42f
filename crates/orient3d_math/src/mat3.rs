//! 3x3 rotation matrix utilities
//!
//! Matrices here are plain `[[f32; 3]; 3]` indexed `m[row][col]`, i.e. the
//! mathematical form as written on paper. Storage order only matters once a
//! matrix leaves this crate, so the conversion to row- or column-major floats
//! is a separate, explicit step ([`flatten`]) and never happens implicitly.

use serde::{Serialize, Deserialize};

use crate::Vec3;

/// 3x3 matrix type (`m[row][col]`)
pub type Mat3 = [[f32; 3]; 3];

/// Identity matrix
pub const IDENTITY: Mat3 = [
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
];

/// Storage order expected by the consumer of a matrix
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatrixLayout {
    /// Rows are contiguous (C arrays, the form printed on paper)
    #[default]
    RowMajor,
    /// Columns are contiguous (OpenGL uniform upload without transpose)
    ColumnMajor,
}

/// Multiply two 3x3 matrices: result = a * b
///
/// Acting on column vectors, this applies b first, then a.
#[allow(clippy::needless_range_loop)]
pub fn mul(a: Mat3, b: Mat3) -> Mat3 {
    let mut result = [[0.0f32; 3]; 3];

    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                result[i][j] += a[i][k] * b[k][j];
            }
        }
    }

    result
}

/// Transform a column vector: result = M * v
pub fn transform(m: Mat3, v: Vec3) -> Vec3 {
    Vec3::new(
        m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
        m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
        m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
    )
}

/// Transpose a matrix
pub fn transpose(m: Mat3) -> Mat3 {
    [
        [m[0][0], m[1][0], m[2][0]],
        [m[0][1], m[1][1], m[2][1]],
        [m[0][2], m[1][2], m[2][2]],
    ]
}

/// Determinant (cofactor expansion along the first row)
pub fn determinant(m: Mat3) -> f32 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

/// Check `M * Mᵀ == I` within `epsilon` per entry
pub fn is_orthogonal(m: Mat3, epsilon: f32) -> bool {
    approx_eq(mul(m, transpose(m)), IDENTITY, epsilon)
}

/// Entry-wise comparison within `epsilon`
pub fn approx_eq(a: Mat3, b: Mat3, epsilon: f32) -> bool {
    a.iter()
        .flatten()
        .zip(b.iter().flatten())
        .all(|(x, y)| (x - y).abs() <= epsilon)
}

/// Flatten into the 9 floats a consumer with the given layout expects.
pub fn flatten(m: Mat3, layout: MatrixLayout) -> [f32; 9] {
    match layout {
        MatrixLayout::RowMajor => bytemuck::cast(m),
        MatrixLayout::ColumnMajor => bytemuck::cast(transpose(m)),
    }
}
