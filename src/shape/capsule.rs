use crate::math::{Point3, Real};
use crate::shape::Segment;

/// A capsule: a segment fattened by a radius.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Capsule {
    /// The axis and endpoints of the capsule.
    pub segment: Segment,
    /// The radius of the capsule.
    pub radius: Real,
}

impl Capsule {
    /// Creates a capsule about the segment between `a` and `b`.
    #[inline]
    pub fn new(a: Point3, b: Point3, radius: Real) -> Capsule {
        Capsule {
            segment: Segment::new(a, b),
            radius,
        }
    }
}
