use crate::math::{Point3, Real};

/// A sphere.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    /// The center of the sphere.
    pub center: Point3,
    /// The radius of the sphere.
    pub radius: Real,
}

impl Sphere {
    /// Creates a sphere from its center and radius.
    #[inline]
    pub fn new(center: Point3, radius: Real) -> Sphere {
        Sphere { center, radius }
    }
}
