//! Transform decomposition tests
//!
//! Tests for:
//! - TRS round trip through `WorldTransform::decompose`
//! - Extrinsic XYZ Euler convention
//! - Negative determinant and singular matrices
//! - Uniform-scale tolerance

use glam::{DMat4, DQuat, DVec3};
use scene_export::scene::transform::{WorldTransform, EXPORT_EULER};

// ============================================================================
// Helper
// ============================================================================

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx(a: DVec3, b: DVec3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

fn mat4_approx(a: &DMat4, b: &DMat4) -> bool {
    a.to_cols_array()
        .iter()
        .zip(b.to_cols_array().iter())
        .all(|(x, y)| approx_eq(*x, *y))
}

// ============================================================================
// Decomposition
// ============================================================================

#[test]
fn identity_decomposes_to_zero() {
    let parts = WorldTransform::IDENTITY.decompose();
    assert_eq!(parts.translation, DVec3::ZERO);
    assert!(vec3_approx(parts.euler_xyz, DVec3::ZERO));
    assert!(vec3_approx(parts.scale, DVec3::ONE));
    assert!(!parts.degenerate);
}

#[test]
fn trs_round_trip() {
    let translation = DVec3::new(1.5, -2.0, 7.25);
    let euler = DVec3::new(0.3, -0.5, 1.2);
    let scale = DVec3::new(2.0, 0.5, 3.0);

    let parts = WorldTransform::from_trs_euler(translation, euler, scale).decompose();

    assert!(vec3_approx(parts.translation, translation));
    assert!(vec3_approx(parts.euler_xyz, euler));
    assert!(vec3_approx(parts.scale, scale));
}

#[test]
fn euler_convention_is_extrinsic_xyz() {
    let euler = DVec3::new(0.4, 0.7, -1.1);
    let t = WorldTransform::from_trs_euler(DVec3::ZERO, euler, DVec3::ONE);

    // X applied first, then Y, then Z about the world axes
    let expected = DMat4::from_rotation_z(euler.z)
        * DMat4::from_rotation_y(euler.y)
        * DMat4::from_rotation_x(euler.x);

    assert!(mat4_approx(t.matrix(), &expected));
}

#[test]
fn from_cols_array_is_column_major() {
    let mut cols = DMat4::IDENTITY.to_cols_array();
    cols[12] = 4.0;
    cols[13] = 5.0;
    cols[14] = 6.0;
    let t = WorldTransform::from_cols_array(&cols);
    assert_eq!(t.translation(), DVec3::new(4.0, 5.0, 6.0));
    assert_eq!(t.decompose().translation, DVec3::new(4.0, 5.0, 6.0));
}

#[test]
fn transform_point_and_vector() {
    let t = WorldTransform::from_scale_rotation_translation(
        DVec3::splat(2.0),
        DQuat::from_rotation_z(std::f64::consts::FRAC_PI_2),
        DVec3::new(1.0, 0.0, 0.0),
    );
    assert!(vec3_approx(t.transform_point(DVec3::X), DVec3::new(1.0, 2.0, 0.0)));
    assert!(vec3_approx(t.transform_vector(DVec3::X), DVec3::new(0.0, 2.0, 0.0)));
}

#[test]
fn mirrored_transform_reports_positive_scale() {
    let t = WorldTransform::from_scale_rotation_translation(
        DVec3::new(-2.0, 3.0, 4.0),
        DQuat::from_rotation_z(0.5),
        DVec3::ZERO,
    );
    let parts = t.decompose();
    assert!(vec3_approx(parts.scale, DVec3::new(2.0, 3.0, 4.0)));
    assert!(!parts.degenerate);
}

#[test]
fn mirrored_uniform_scale_is_uniform() {
    let t = WorldTransform::from_trs_euler(DVec3::ZERO, DVec3::ZERO, DVec3::new(-2.0, 2.0, 2.0));
    assert!(t.decompose().is_uniform_scale(1e-6));
}

#[test]
fn singular_matrix_does_not_panic() {
    let t = WorldTransform::from_scale_rotation_translation(
        DVec3::new(2.0, 3.0, 0.0),
        DQuat::from_euler(EXPORT_EULER, 0.1, 0.2, 0.3),
        DVec3::new(1.0, 2.0, 3.0),
    );
    let parts = t.decompose();

    assert!(parts.degenerate);
    assert_eq!(parts.rotation, DQuat::IDENTITY);
    assert!(vec3_approx(parts.translation, DVec3::new(1.0, 2.0, 3.0)));
    assert!(vec3_approx(parts.scale, DVec3::new(2.0, 3.0, 0.0)));
    assert!(parts.euler_xyz.is_finite());
}

// ============================================================================
// Uniform Scale
// ============================================================================

#[test]
fn uniform_scale_tolerance() {
    let near = WorldTransform::from_trs_euler(DVec3::ZERO, DVec3::ZERO, DVec3::new(1.0, 1.0, 1.0 + 5e-7));
    assert!(near.decompose().is_uniform_scale(1e-6));

    let far = WorldTransform::from_trs_euler(DVec3::ZERO, DVec3::ZERO, DVec3::new(1.0, 1.0, 1.01));
    assert!(!far.decompose().is_uniform_scale(1e-6));
}
