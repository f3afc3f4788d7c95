//! Yaw/pitch rotations used by the camera
//!
//! Angles are in degrees. The view rotation spins around world Z first and
//! then pitches around the X axis left after the spin.

use nalgebra::{Rotation3, Vector3};

use crate::simulation::states::NVec3;

fn yaw_matrix(yaw_deg: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Vector3::z_axis(), yaw_deg.to_radians())
}

fn pitch_matrix(pitch_deg: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Vector3::x_axis(), pitch_deg.to_radians())
}

/// World space to view space: yaw about Z, then pitch about X
pub fn rotate_z_up(v: NVec3, yaw_deg: f64, pitch_deg: f64) -> NVec3 {
    pitch_matrix(pitch_deg) * (yaw_matrix(yaw_deg) * v)
}

/// Pitch about X, then yaw about Z.
///
/// Called with negated angles this undoes [`rotate_z_up`], which is how
/// camera-relative pan directions are mapped back to world space.
pub fn rotate_pitch_then_yaw(v: NVec3, pitch_deg: f64, yaw_deg: f64) -> NVec3 {
    yaw_matrix(yaw_deg) * (pitch_matrix(pitch_deg) * v)
}

/// Inverse of [`rotate_z_up`]
pub fn unrotate_z_up(v: NVec3, yaw_deg: f64, pitch_deg: f64) -> NVec3 {
    rotate_pitch_then_yaw(v, -pitch_deg, -yaw_deg)
}
