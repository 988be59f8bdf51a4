use crate::math::{Point3, Real, COLLISION_EPSILON};
use crate::shape::{Plane, Sphere};
use crate::utils::subtract_radii;

/// Distance between two planes: zero unless they are parallel.
#[inline]
pub fn distance_plane_plane(plane1: &Plane, plane2: &Plane) -> Real {
    let line_normal = plane1.normal().cross(&plane2.normal());
    if line_normal.norm() < COLLISION_EPSILON {
        return distance_plane_point(plane1, &plane2.point());
    }

    0.0
}

/// Distance between a plane and a point.
#[inline]
pub fn distance_plane_point(plane: &Plane, point: &Point3) -> Real {
    plane.distance_to_point(point)
}

/// Distance between a plane and a sphere.
#[inline]
pub fn distance_plane_sphere(plane: &Plane, sphere: &Sphere) -> Real {
    subtract_radii(plane.distance_to_point(&sphere.center), sphere.radius)
}
