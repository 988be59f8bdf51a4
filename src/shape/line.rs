use crate::math::{Point3, Real, Vector3};
use crate::shape::ParametricLine;

/// A line through two points, unbounded in both directions.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Line {
    a: Point3,
    b: Point3,
    direction: Vector3,
    direction2: Real,
}

impl Line {
    /// Creates the line through `a` and `b`.
    #[inline]
    pub fn new(a: Point3, b: Point3) -> Line {
        let direction = b - a;
        Line {
            a,
            b,
            direction,
            direction2: direction.dot(&direction),
        }
    }

    /// Creates the line through `a` along `direction`.
    #[inline]
    pub fn from_point_and_direction(a: Point3, direction: Vector3) -> Line {
        Line::new(a, a + direction)
    }
}

impl ParametricLine for Line {
    const HAS_LOWER_BOUND: bool = false;
    const HAS_UPPER_BOUND: bool = false;

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
