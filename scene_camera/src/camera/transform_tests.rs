use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};
use glam::Vec3;
use super::*;

fn start() -> CameraTransform {
    CameraTransform::new(Vec3::ZERO, Euler::IDENTITY)
}

fn end() -> CameraTransform {
    CameraTransform::new(Vec3::new(10.0, 0.0, -4.0), Euler::new(0.0, FRAC_PI_2, 0.0))
}

#[test]
fn test_interpolate_endpoints_exact() {
    assert_eq!(start().interpolate(&end(), 0.0), start());
    assert_eq!(start().interpolate(&end(), 1.0), end());
}

#[test]
fn test_interpolate_midpoint() {
    let mid = start().interpolate(&end(), 0.5);

    assert!(mid.position.abs_diff_eq(Vec3::new(5.0, 0.0, -2.0), 1e-5));
    assert!(mid.rotation.abs_diff_eq(Euler::new(0.0, FRAC_PI_4, 0.0), 1e-4));
}

#[test]
fn test_interpolate_clamps_t() {
    assert_eq!(start().interpolate(&end(), -3.0), start());
    assert_eq!(start().interpolate(&end(), 7.5), end());
    assert_eq!(start().interpolate(&end(), f32::NAN), start());
}

#[test]
fn test_interpolate_takes_shortest_arc() {
    let a = CameraTransform::new(Vec3::ZERO, Euler::from_degrees(0.0, 170.0, 0.0));
    let b = CameraTransform::new(Vec3::ZERO, Euler::from_degrees(0.0, -170.0, 0.0));

    let mid = a.interpolate(&b, 0.5);

    // Halfway through the 20 degree arc is yaw 180, not yaw 0
    assert!(mid.rotation.abs_diff_eq(Euler::from_degrees(0.0, 180.0, 0.0), 1e-3));
}
