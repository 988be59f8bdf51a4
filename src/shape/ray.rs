use crate::math::{Point3, Real, Vector3};
use crate::shape::ParametricLine;

/// A half-line starting at `a` and passing through `b`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    a: Point3,
    b: Point3,
    direction: Vector3,
    direction2: Real,
}

impl Ray {
    /// Creates the ray from `a` through `b`.
    #[inline]
    pub fn new(a: Point3, b: Point3) -> Ray {
        let direction = b - a;
        Ray {
            a,
            b,
            direction,
            direction2: direction.dot(&direction),
        }
    }

    /// Creates the ray from `a` along `direction`.
    #[inline]
    pub fn from_point_and_direction(a: Point3, direction: Vector3) -> Ray {
        Ray::new(a, a + direction)
    }
}

impl ParametricLine for Ray {
    const HAS_LOWER_BOUND: bool = true;
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
