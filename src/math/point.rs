use std::ops::{Add, AddAssign, Index, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::math::{Real, Vector3};

/// A location in 3-dimensional space.
///
/// Points and vectors are kept distinct: subtracting two points yields a
/// [`Vector3`], and only vectors may be added to a point.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point3 {
    /// First coordinate.
    pub x: Real,
    /// Second coordinate.
    pub y: Real,
    /// Third coordinate.
    pub z: Real,
}

impl Point3 {
    /// Creates a point from its three coordinates.
    #[inline]
    pub fn new(x: Real, y: Real, z: Real) -> Point3 {
        Point3 { x, y, z }
    }

    /// The origin.
    #[inline]
    pub fn origin() -> Point3 {
        Point3::new(0.0, 0.0, 0.0)
    }

    /// Linear interpolation from `self` (at `t = 0`) to `rhs` (at `t = 1`).
    #[inline]
    pub fn lerp(&self, rhs: &Point3, t: Real) -> Point3 {
        *self + (*rhs - *self) * t
    }
}

impl Sub for Point3 {
    type Output = Vector3;

    #[inline]
    fn sub(self, rhs: Point3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Add<Vector3> for Point3 {
    type Output = Point3;

    #[inline]
    fn add(self, rhs: Vector3) -> Point3 {
        Point3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub<Vector3> for Point3 {
    type Output = Point3;

    #[inline]
    fn sub(self, rhs: Vector3) -> Point3 {
        Point3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl AddAssign<Vector3> for Point3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vector3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl SubAssign<Vector3> for Point3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector3) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl Index<usize> for Point3 {
    type Output = Real;

    #[inline]
    fn index(&self, index: usize) -> &Real {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("point index {} out of range", index),
        }
    }
}

impl From<Vector3> for Point3 {
    #[inline]
    fn from(vector: Vector3) -> Point3 {
        Point3::new(vector.x, vector.y, vector.z)
    }
}

impl AbsDiffEq for Point3 {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, rhs: &Point3, epsilon: Real) -> bool {
        Real::abs_diff_eq(&self.x, &rhs.x, epsilon)
            && Real::abs_diff_eq(&self.y, &rhs.y, epsilon)
            && Real::abs_diff_eq(&self.z, &rhs.z, epsilon)
    }
}

impl RelativeEq for Point3 {
    fn default_max_relative() -> Real {
        Real::default_max_relative()
    }

    fn relative_eq(&self, rhs: &Point3, epsilon: Real, max_relative: Real) -> bool {
        Real::relative_eq(&self.x, &rhs.x, epsilon, max_relative)
            && Real::relative_eq(&self.y, &rhs.y, epsilon, max_relative)
            && Real::relative_eq(&self.z, &rhs.z, epsilon, max_relative)
    }
}

impl UlpsEq for Point3 {
    fn default_max_ulps() -> u32 {
        Real::default_max_ulps()
    }

    fn ulps_eq(&self, rhs: &Point3, epsilon: Real, max_ulps: u32) -> bool {
        Real::ulps_eq(&self.x, &rhs.x, epsilon, max_ulps)
            && Real::ulps_eq(&self.y, &rhs.y, epsilon, max_ulps)
            && Real::ulps_eq(&self.z, &rhs.z, epsilon, max_ulps)
    }
}
