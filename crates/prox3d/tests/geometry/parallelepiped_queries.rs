use approx::assert_relative_eq;
use prox3d::math::{Point3, Vector3};
use prox3d::query::{Distance, NearestPointQuery};
use prox3d::shape::{Capsule, InfiniteCylinder, Parallelepiped, Plane, Segment, Sphere};

fn unit_cube_at(x: f32, y: f32, z: f32) -> Parallelepiped {
    Parallelepiped::new(
        Point3::new(x, y, z),
        Vector3::x_axis(),
        Vector3::y_axis(),
        Vector3::z_axis(),
    )
}

#[test]
fn a_box_overlaps_its_own_copy() {
    let cube = unit_cube_at(0.0, 0.0, 0.0);

    assert_eq!(cube.distance(&cube), 0.0);
}

#[test]
fn translated_boxes_separate_along_x() {
    let cube = unit_cube_at(0.0, 0.0, 0.0);
    let other = unit_cube_at(2.0, 0.0, 0.0);

    assert_eq!(cube.distance(&other), 1.0);
    assert_eq!(other.distance(&cube), 1.0);
}

#[test]
fn a_rotated_box_sharing_a_corner_overlaps() {
    let cube = unit_cube_at(0.0, 0.0, 0.0);
    let tilted = Parallelepiped::new(
        Point3::new(0.5, 0.5, -0.5),
        Vector3::new(0.7071068, 0.7071068, 0.0),
        Vector3::new(-0.7071068, 0.7071068, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
    );

    assert_eq!(cube.distance(&tilted), 0.0);
}

#[test]
fn box_against_plane() {
    let cube = unit_cube_at(0.0, 0.0, 0.0);

    let straddling = Plane::new(Point3::new(0.0, 0.0, 0.5), Vector3::z_axis());
    assert_eq!(cube.distance(&straddling), 0.0);

    let above = Plane::new(Point3::new(0.0, 0.0, 3.0), Vector3::z_axis());
    assert_eq!(cube.distance(&above), 2.0);
    assert_eq!(above.distance(&cube), 2.0);
}

#[test]
fn box_against_point() {
    let cube = unit_cube_at(0.0, 0.0, 0.0);

    assert_eq!(cube.distance(&Point3::new(0.5, 0.5, 0.5)), 0.0);
    assert_relative_eq!(
        cube.distance(&Point3::new(2.0, 0.5, 0.5)),
        1.0,
        epsilon = 1.0e-5
    );
    assert_relative_eq!(
        cube.distance(&Point3::new(2.0, 2.0, 0.5)),
        2.0f32.sqrt(),
        epsilon = 1.0e-5
    );
}

#[test]
fn box_against_sphere() {
    let cube = unit_cube_at(0.0, 0.0, 0.0);
    let sphere = Sphere::new(Point3::new(3.0, 0.5, 0.5), 1.0);

    assert_relative_eq!(cube.distance(&sphere), 1.0, epsilon = 1.0e-5);
    assert_eq!(cube.distance(&sphere), sphere.distance(&cube));
}

#[test]
fn segment_pointing_at_a_box_stops_short() {
    let cube = unit_cube_at(0.0, 0.0, 0.0);
    let segment = Segment::new(Point3::new(3.0, 0.5, 0.5), Point3::new(2.0, 0.5, 0.5));

    let result = segment.nearest_point(&cube);
    assert_relative_eq!(result.distance, 1.0, epsilon = 1.0e-5);
    assert_eq!(result.param, 1.0);
}

#[test]
fn segment_through_a_box_reports_the_entry_parameter() {
    let cube = unit_cube_at(0.0, 0.0, 0.0);
    let segment = Segment::new(Point3::new(-1.0, 0.5, 0.5), Point3::new(3.0, 0.5, 0.5));

    let result = segment.nearest_point(&cube);
    assert_eq!(result.distance, 0.0);
    assert_relative_eq!(result.param, 0.25, epsilon = 1.0e-6);
}

#[test]
fn axis_aligned_segment_beside_a_box() {
    // The segment's direction is degenerate on two local axes; one of them
    // is offset outside the cube and must contribute its distance.
    let cube = unit_cube_at(0.0, 0.0, 0.0);
    let segment = Segment::new(Point3::new(0.25, 3.0, 0.5), Point3::new(0.75, 3.0, 0.5));

    let result = segment.nearest_point(&cube);
    assert_relative_eq!(result.distance, 2.0, epsilon = 1.0e-5);
    assert_eq!(result.param, 0.0);
}

#[test]
fn cylinder_beside_a_box() {
    let cube = unit_cube_at(0.0, 0.0, 0.0);
    let cylinder = InfiniteCylinder::new(
        Point3::new(3.0, 0.5, -5.0),
        Point3::new(3.0, 0.5, 5.0),
        1.0,
    );

    assert_relative_eq!(cube.distance(&cylinder), 1.0, epsilon = 1.0e-5);
    assert_eq!(cube.distance(&cylinder), cylinder.distance(&cube));
}

#[test]
fn capsule_reaching_toward_a_box() {
    let cube = unit_cube_at(0.0, 0.0, 0.0);
    let capsule = Capsule::new(
        Point3::new(4.0, 0.5, 0.5),
        Point3::new(3.0, 0.5, 0.5),
        0.5,
    );

    let result = capsule.nearest_point(&cube);
    assert_relative_eq!(result.distance, 1.5, epsilon = 1.0e-5);
    assert_eq!(result.param, 1.0);
    assert_eq!(capsule.distance(&cube), cube.distance(&capsule));
}

#[test]
fn skewed_boxes_separate_along_a_face_normal() {
    let slab = Parallelepiped::new(
        Point3::origin(),
        Vector3::new(1.0, 1.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
    );
    let cube = unit_cube_at(4.0, 0.0, 0.0);

    // The gap along x between the sheared box (reaching x = 1) and the cube.
    assert_relative_eq!(slab.distance(&cube), 3.0, epsilon = 1.0e-4);
}
