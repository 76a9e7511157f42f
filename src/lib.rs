//! orient3d - yaw/pitch/roll to quaternion derivations
//!
//! Library half of the `orient3d` binary: configuration loading and the
//! derivation report. The rotation math itself lives in `orient3d_math`.

pub mod config;
pub mod report;
