use crate::math::{Point3, Real};
use crate::shape::Sphere;
use crate::utils::subtract_radii;

/// Distance between two spheres.
#[inline]
pub fn distance_sphere_sphere(sphere1: &Sphere, sphere2: &Sphere) -> Real {
    subtract_radii(
        (sphere1.center - sphere2.center).norm(),
        sphere1.radius + sphere2.radius,
    )
}

/// Distance between a sphere and a point.
#[inline]
pub fn distance_sphere_point(sphere: &Sphere, point: &Point3) -> Real {
    subtract_radii((sphere.center - *point).norm(), sphere.radius)
}
