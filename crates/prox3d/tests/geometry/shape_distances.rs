use approx::assert_relative_eq;
use prox3d::math::{Point3, Vector3};
use prox3d::query::Distance;
use prox3d::shape::{Capsule, InfiniteCylinder, Plane, Sphere};

#[test]
fn overlapping_spheres_touch() {
    let s1 = Sphere::new(Point3::origin(), 1.0);
    let s2 = Sphere::new(Point3::new(1.0, 0.0, 0.0), 1.0);

    assert_eq!(s1.distance(&s2), 0.0);
    assert!(s1.intersects(&s2));
}

#[test]
fn separated_spheres_report_the_gap() {
    let s1 = Sphere::new(Point3::origin(), 1.0);
    let s2 = Sphere::new(Point3::new(5.0, 0.0, 0.0), 2.0);

    assert_relative_eq!(s1.distance(&s2), 2.0, epsilon = 1.0e-6);
    assert_eq!(s1.distance(&s2), s2.distance(&s1));
}

#[test]
fn intersects_uses_the_collision_tolerance() {
    let sphere = Sphere::new(Point3::origin(), 1.0);

    assert!(sphere.intersects(&Sphere::new(Point3::new(2.0, 0.0, 0.0), 1.0)));
    assert!(!sphere.intersects(&Sphere::new(Point3::new(2.1, 0.0, 0.0), 1.0)));
}

#[test]
fn plane_point_distance() {
    let plane = Plane::new(Point3::origin(), Vector3::z_axis());

    assert_eq!(plane.distance(&Point3::new(1.0, 1.0, 5.0)), 5.0);
}

#[test]
fn plane_normals_are_normalized_at_construction() {
    let plane = Plane::new(Point3::origin(), Vector3::new(0.0, 0.0, 2.0));

    assert_eq!(plane.normal(), Vector3::z_axis());
    assert_eq!(plane.distance(&Point3::new(1.0, 1.0, 5.0)), 5.0);
}

#[test]
fn plane_plane_distance_is_zero_unless_parallel() {
    let p1 = Plane::new(Point3::origin(), Vector3::z_axis());
    let p2 = Plane::new(Point3::new(0.0, 0.0, 3.0), Vector3::z_axis());
    assert_eq!(p1.distance(&p2), 3.0);

    let tilted = Plane::new(Point3::new(0.0, 0.0, 3.0), Vector3::new(1.0, 0.0, 1.0));
    assert_eq!(p1.distance(&tilted), 0.0);
}

#[test]
fn capsules_mirror_the_sphere_contract() {
    let c1 = Capsule::new(Point3::origin(), Point3::new(1.0, 0.0, 0.0), 0.5);

    let apart = Capsule::new(Point3::new(0.0, 2.0, 0.0), Point3::new(1.0, 2.0, 0.0), 0.5);
    assert_relative_eq!(c1.distance(&apart), 1.0, epsilon = 1.0e-6);
    assert_eq!(c1.distance(&apart), apart.distance(&c1));

    let touching = Capsule::new(Point3::new(0.0, 0.5, 0.0), Point3::new(1.0, 0.5, 0.0), 0.5);
    assert_eq!(c1.distance(&touching), 0.0);
}

#[test]
fn a_cylinder_is_unbounded_along_its_axis() {
    let cylinder =
        InfiniteCylinder::new(Point3::origin(), Point3::new(0.0, 0.0, 1.0), 1.0);

    assert_relative_eq!(
        cylinder.distance(&Point3::new(3.0, 0.0, 50.0)),
        2.0,
        epsilon = 1.0e-5
    );

    let sphere = Sphere::new(Point3::new(4.0, 0.0, -20.0), 1.0);
    assert_relative_eq!(cylinder.distance(&sphere), 2.0, epsilon = 1.0e-5);
    assert_eq!(cylinder.distance(&sphere), sphere.distance(&cylinder));
}

#[test]
fn capsule_against_cylinder_uses_both_radii() {
    let cylinder =
        InfiniteCylinder::new(Point3::origin(), Point3::new(0.0, 0.0, 1.0), 1.0);
    let capsule = Capsule::new(
        Point3::new(4.0, 0.0, 10.0),
        Point3::new(5.0, 0.0, 10.0),
        0.5,
    );

    assert_relative_eq!(capsule.distance(&cylinder), 2.5, epsilon = 1.0e-5);
    assert_eq!(capsule.distance(&cylinder), cylinder.distance(&capsule));
}

#[test]
fn sphere_against_capsule_reduces_to_the_segment() {
    let capsule = Capsule::new(Point3::origin(), Point3::new(2.0, 0.0, 0.0), 0.5);
    let sphere = Sphere::new(Point3::new(1.0, 3.0, 0.0), 1.0);

    assert_relative_eq!(sphere.distance(&capsule), 1.5, epsilon = 1.0e-6);
    assert_eq!(sphere.distance(&capsule), capsule.distance(&sphere));
}
