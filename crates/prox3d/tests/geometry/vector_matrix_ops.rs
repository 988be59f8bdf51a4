use approx::{assert_abs_diff_eq, assert_relative_eq};
use prox3d::math::{Matrix4, Vector3};

fn random_vector(rng: &mut oorandom::Rand32) -> Vector3 {
    Vector3::new(
        rng.rand_float() * 4.0 - 2.0,
        rng.rand_float() * 4.0 - 2.0,
        rng.rand_float() * 4.0 - 2.0,
    )
}

#[test]
fn dot_and_cross_identities() {
    let mut rng = oorandom::Rand32::new(0xdecafbad);

    for _ in 0..100 {
        let u = random_vector(&mut rng);
        let v = random_vector(&mut rng);

        assert_eq!(u.dot(&v), v.dot(&u));
        assert_eq!(u.cross(&v), -v.cross(&u));
        assert_abs_diff_eq!(u.dot(&u.cross(&v)), 0.0, epsilon = 1.0e-5);
    }
}

#[test]
fn normalization_is_idempotent() {
    let mut rng = oorandom::Rand32::new(17);

    for _ in 0..100 {
        let v = random_vector(&mut rng);
        if v.norm() < 1.0e-2 {
            continue;
        }

        let n = v.normalized();
        assert_relative_eq!(n.norm(), 1.0, epsilon = 1.0e-5);
        assert_relative_eq!(n.normalized(), n, epsilon = 1.0e-5);
    }
}

#[test]
fn rotation_matrices_invert_by_transposition() {
    let rot = Matrix4::rotate(&Vector3::new(1.0, 2.0, 0.5), 0.8);

    assert_relative_eq!(rot.inverted(), rot.transposed(), epsilon = 1.0e-5);
    assert_relative_eq!(rot * rot.inverted(), Matrix4::identity(), epsilon = 1.0e-5);
}

#[test]
fn affine_transforms_compose() {
    let m = Matrix4::translate(&Vector3::new(1.0, 2.0, 3.0))
        * Matrix4::scale(&Vector3::new(2.0, 2.0, 2.0));

    assert_eq!(m * Vector3::new(1.0, 1.0, 1.0), Vector3::new(3.0, 4.0, 5.0));
}

#[test]
fn inverse_round_trips_on_a_shear() {
    let m = Matrix4::from_columns(
        &Vector3::new(2.0, 0.0, 0.0),
        &Vector3::new(1.0, 3.0, 0.0),
        &Vector3::new(0.0, -1.0, 0.5),
    );

    assert_relative_eq!(m * m.inverted(), Matrix4::identity(), epsilon = 1.0e-5);
    assert_relative_eq!(m.inverted().inverted(), m, epsilon = 1.0e-4);
}
