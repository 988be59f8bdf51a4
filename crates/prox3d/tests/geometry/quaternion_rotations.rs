use std::f32::consts::{FRAC_PI_2, PI};

use approx::assert_relative_eq;
use prox3d::math::{Quaternion, Vector3};

#[test]
fn axis_angle_rotations_are_unit() {
    let mut rng = oorandom::Rand32::new(7);

    for _ in 0..100 {
        let axis = Vector3::new(
            rng.rand_float() * 2.0 - 1.0,
            rng.rand_float() * 2.0 - 1.0,
            rng.rand_float() * 2.0 - 1.0,
        );
        let theta = (rng.rand_float() - 0.5) * 4.0 * PI;

        let q = Quaternion::from_axis_angle(&axis, theta);
        if q.degenerate {
            // A near-zero axis draw has no direction to rotate about.
            continue;
        }

        assert_relative_eq!(q.norm(), 1.0, epsilon = 1.0e-5);
    }
}

#[test]
fn quarter_turn_about_z() {
    let q = Quaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2);

    assert_relative_eq!(q * Vector3::x_axis(), Vector3::y_axis(), epsilon = 1.0e-6);
    assert_relative_eq!(
        q.to_rotation_matrix() * Vector3::x_axis(),
        Vector3::y_axis(),
        epsilon = 1.0e-6
    );
}

#[test]
fn rotation_matrix_agrees_with_direct_rotation() {
    let mut rng = oorandom::Rand32::new(99);

    for _ in 0..50 {
        let axis = Vector3::new(
            rng.rand_float() * 2.0 - 1.0,
            rng.rand_float() * 2.0 - 1.0,
            rng.rand_float() * 2.0 - 1.0,
        );
        let q = Quaternion::from_axis_angle(&axis, rng.rand_float() * 2.0 * PI);
        if q.degenerate {
            continue;
        }

        let v = Vector3::new(0.7, -0.2, 0.4);
        assert_relative_eq!(q.to_rotation_matrix() * v, q * v, epsilon = 1.0e-5);
    }
}

#[test]
fn forward_up_aligns_both_axes() {
    let q = Quaternion::from_forward_up(
        &Vector3::y_axis(),
        &Vector3::z_axis(),
        &Vector3::x_axis(),
        &Vector3::z_axis(),
    );

    assert_relative_eq!(q * Vector3::x_axis(), Vector3::y_axis(), epsilon = 1.0e-5);
    assert_relative_eq!(q * Vector3::z_axis(), Vector3::z_axis(), epsilon = 1.0e-5);
}

#[test]
fn forward_up_handles_an_antiparallel_forward() {
    let q = Quaternion::from_forward_up(
        &-Vector3::x_axis(),
        &Vector3::z_axis(),
        &Vector3::x_axis(),
        &Vector3::z_axis(),
    );

    assert_relative_eq!(q * Vector3::x_axis(), -Vector3::x_axis(), epsilon = 1.0e-5);
    assert_relative_eq!(q * Vector3::z_axis(), Vector3::z_axis(), epsilon = 1.0e-5);
}

#[test]
fn euler_yaw_matches_axis_angle() {
    for &angle in &[0.3f32, 1.0, -0.7, 2.5] {
        let from_euler = Quaternion::from_euler(angle, 0.0, 0.0);
        let from_axis = Quaternion::from_axis_angle(&Vector3::z_axis(), angle);

        let v = Vector3::new(0.7, -0.2, 0.4);
        assert_relative_eq!(from_euler * v, from_axis * v, epsilon = 1.0e-5);
    }
}

#[test]
fn between_vectors_maps_source_onto_destination() {
    let source = Vector3::x_axis();
    let destination = Vector3::y_axis();

    let q = Quaternion::between_vectors(&source, &destination);
    assert_relative_eq!(q * source, destination, epsilon = 1.0e-5);

    // Antiparallel input takes the fallback axis.
    let q = Quaternion::between_vectors(&source, &-source);
    assert_relative_eq!(q * source, -source, epsilon = 1.0e-5);
}

#[test]
fn reciprocal_inverts_the_product() {
    let q = Quaternion::new(0.8, Vector3::new(0.1, -0.4, 0.2));

    assert_relative_eq!(q * q.reciprocal(), Quaternion::identity(), epsilon = 1.0e-5);
}

#[test]
fn axis_angle_round_trip() {
    let axis = Vector3::new(0.0, 0.6, 0.8);
    let q = Quaternion::from_axis_angle(&axis, 1.2);

    let (out_axis, out_angle) = q.to_axis_angle();
    assert_relative_eq!(out_angle, 1.2, epsilon = 1.0e-4);
    assert_relative_eq!(out_axis, axis, epsilon = 1.0e-4);
}
