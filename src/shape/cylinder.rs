use crate::math::{Point3, Real, Vector3};
use crate::shape::Line;

/// A cylinder of infinite length: a line fattened by a radius.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InfiniteCylinder {
    /// The axis of the cylinder.
    pub line: Line,
    /// The radius of the cylinder.
    pub radius: Real,
}

impl InfiniteCylinder {
    /// Creates a cylinder about the axis through `a` and `b`.
    #[inline]
    pub fn new(a: Point3, b: Point3, radius: Real) -> InfiniteCylinder {
        InfiniteCylinder {
            line: Line::new(a, b),
            radius,
        }
    }

    /// Creates a cylinder about the axis through `a` along `direction`.
    #[inline]
    pub fn from_point_and_direction(
        a: Point3,
        direction: Vector3,
        radius: Real,
    ) -> InfiniteCylinder {
        InfiniteCylinder {
            line: Line::from_point_and_direction(a, direction),
            radius,
        }
    }
}
