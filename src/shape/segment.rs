use crate::math::{Point3, Real, Vector3};
use crate::shape::ParametricLine;

/// The segment between two points.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    a: Point3,
    b: Point3,
    direction: Vector3,
    direction2: Real,
}

impl Segment {
    /// Creates the segment between `a` and `b`.
    #[inline]
    pub fn new(a: Point3, b: Point3) -> Segment {
        let direction = b - a;
        Segment {
            a,
            b,
            direction,
            direction2: direction.dot(&direction),
        }
    }

    /// The length of this segment.
    #[inline]
    pub fn length(&self) -> Real {
        self.direction2.sqrt()
    }
}

impl ParametricLine for Segment {
    const HAS_LOWER_BOUND: bool = true;
    const HAS_UPPER_BOUND: bool = true;

    #[inline]
    fn a(&self) -> Point3 {
        self.a
    }

    #[inline]
    fn b(&self) -> Point3 {
        self.b
    }

    #[inline]
    fn scaled_direction(&self) -> Vector3 {
        self.direction
    }

    #[inline]
    fn length_squared(&self) -> Real {
        self.direction2
    }
}
