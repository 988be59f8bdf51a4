use crate::math::{Point3, Real, Vector3};

/// An unbounded plane, given by a point on it and its unit normal.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Plane {
    point: Point3,
    normal: Vector3,
}

impl Plane {
    /// Creates a plane through `point` with the given normal.
    ///
    /// The normal is normalized at construction; a near-zero input leaves it
    /// degenerate-flagged and the plane's queries undefined.
    pub fn new(point: Point3, normal: Vector3) -> Plane {
        let normal = normal.normalized();
        if normal.degenerate {
            log::debug!("building a plane from a near-zero normal");
        }

        Plane { point, normal }
    }

    /// A point on the plane.
    #[inline]
    pub fn point(&self) -> Point3 {
        self.point
    }

    /// The unit normal of the plane.
    #[inline]
    pub fn normal(&self) -> Vector3 {
        self.normal
    }

    /// The absolute distance from `rhs` to the plane.
    #[inline]
    pub fn distance_to_point(&self, rhs: &Point3) -> Real {
        (self.point - *rhs).dot(&self.normal).abs()
    }
}
