use crate::math::{Point3, Real, Vector3};
use crate::shape::Parallelepiped;

/// Distance between an oriented box and a point.
///
/// The point moves to the box's local space, clamps to the unit cube, and
/// the remaining offset maps back through the edge basis.
#[inline]
pub fn distance_parallelepiped_point(parallelepiped: &Parallelepiped, point: &Point3) -> Real {
    let local = parallelepiped.convert_to() * (*point - parallelepiped.point());

    let nearest = Vector3::new(
        local.x.clamp(0.0, 1.0),
        local.y.clamp(0.0, 1.0),
        local.z.clamp(0.0, 1.0),
    );

    (parallelepiped.convert_from() * (local - nearest)).norm()
}
