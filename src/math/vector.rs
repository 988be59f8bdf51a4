use std::f32::consts::{FRAC_PI_2, PI};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num::Zero;

use crate::math::{Point3, Real, NORMALIZE_EPSILON};

/// A 3-dimensional vector.
///
/// The `degenerate` flag records that a normalization was refused because the
/// magnitude was too small to divide by reliably; the direction is then
/// undefined. The flag propagates through arithmetic but is advisory: no
/// query consults it automatically.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default)]
pub struct Vector3 {
    /// First component.
    pub x: Real,
    /// Second component.
    pub y: Real,
    /// Third component.
    pub z: Real,
    /// Set when a normalization divided by a near-zero magnitude.
    pub degenerate: bool,
}

impl Vector3 {
    /// Creates a vector from its three components.
    #[inline]
    pub fn new(x: Real, y: Real, z: Real) -> Vector3 {
        Vector3 {
            x,
            y,
            z,
            degenerate: false,
        }
    }

    #[inline]
    pub(crate) fn flagged(x: Real, y: Real, z: Real, degenerate: bool) -> Vector3 {
        Vector3 { x, y, z, degenerate }
    }

    /// The zero vector.
    #[inline]
    pub fn zeros() -> Vector3 {
        Vector3::new(0.0, 0.0, 0.0)
    }

    /// The `x` axis unit vector.
    #[inline]
    pub fn x_axis() -> Vector3 {
        Vector3::new(1.0, 0.0, 0.0)
    }

    /// The `y` axis unit vector.
    #[inline]
    pub fn y_axis() -> Vector3 {
        Vector3::new(0.0, 1.0, 0.0)
    }

    /// The `z` axis unit vector.
    #[inline]
    pub fn z_axis() -> Vector3 {
        Vector3::new(0.0, 0.0, 1.0)
    }

    /// The dot product of `self` and `rhs`.
    #[inline]
    pub fn dot(&self, rhs: &Vector3) -> Real {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// The cross product of `self` and `rhs`.
    #[inline]
    pub fn cross(&self, rhs: &Vector3) -> Vector3 {
        Vector3::flagged(
            self.y * rhs.z - rhs.y * self.z,
            rhs.x * self.z - self.x * rhs.z,
            self.x * rhs.y - rhs.x * self.y,
            self.degenerate || rhs.degenerate,
        )
    }

    /// The squared Euclidean norm. Avoids the square root of [`norm`].
    ///
    /// [`norm`]: Vector3::norm
    #[inline]
    pub fn norm_squared(&self) -> Real {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// The Euclidean norm.
    #[inline]
    pub fn norm(&self) -> Real {
        self.norm_squared().sqrt()
    }

    /// Rescales `self` to unit length in place.
    ///
    /// If the magnitude is below [`NORMALIZE_EPSILON`] the components are
    /// left untouched and the vector is flagged degenerate instead.
    pub fn normalize(&mut self) {
        let norm = self.norm();

        if norm < NORMALIZE_EPSILON {
            self.degenerate = true;
            return;
        }

        self.degenerate = false;
        let inv = 1.0 / norm;
        self.x *= inv;
        self.y *= inv;
        self.z *= inv;
    }

    /// Returns `self` rescaled to unit length, or a degenerate-flagged copy
    /// if the magnitude is below [`NORMALIZE_EPSILON`].
    #[must_use]
    pub fn normalized(&self) -> Vector3 {
        let norm = self.norm();

        if norm < NORMALIZE_EPSILON {
            return Vector3 {
                degenerate: true,
                ..*self
            };
        }

        let inv = 1.0 / norm;
        Vector3::new(self.x * inv, self.y * inv, self.z * inv)
    }

    /// Returns `self` rescaled to unit length, or `None` if the magnitude is
    /// too small to normalize. The form to prefer when the degenerate case
    /// must not be overlooked.
    #[must_use]
    pub fn try_normalized(&self) -> Option<Vector3> {
        let normalized = self.normalized();
        if normalized.degenerate {
            None
        } else {
            Some(normalized)
        }
    }

    /// Component-wise multiplication.
    #[inline]
    pub fn component_mul(&self, rhs: &Vector3) -> Vector3 {
        Vector3::flagged(
            self.x * rhs.x,
            self.y * rhs.y,
            self.z * rhs.z,
            self.degenerate || rhs.degenerate,
        )
    }

    /// Component-wise division. The result is undefined (infinite or NaN
    /// components) when `rhs` has a zero component; callers gate on the
    /// divisor's magnitude first.
    #[inline]
    pub fn component_div(&self, rhs: &Vector3) -> Vector3 {
        Vector3::flagged(
            self.x / rhs.x,
            self.y / rhs.y,
            self.z / rhs.z,
            self.degenerate || rhs.degenerate,
        )
    }

    /// The angle between `self` and `rhs`, in radians, computed from the
    /// triangle the two vectors span.
    pub fn angle_between(&self, rhs: &Vector3) -> Real {
        let a = self.norm();
        let b = rhs.norm();
        let c = (*rhs - *self).norm();

        ((a * a + b * b - c * c) / (2.0 * a * b)).acos()
    }

    /// The azimuthal angle of `self`, in `[0, 2π)`.
    pub fn theta(&self) -> Real {
        if self.x > 0.0 {
            (self.y / self.x).atan()
        } else if self.x < 0.0 {
            (self.y / self.x).atan() + PI
        } else if self.y > 0.0 {
            FRAC_PI_2
        } else if self.y < 0.0 {
            3.0 * FRAC_PI_2
        } else {
            0.0
        }
    }

    /// The polar angle of `self`, measured from the `+z` axis.
    pub fn phi(&self) -> Real {
        let xy_norm = (self.x * self.x + self.y * self.y).sqrt();

        if xy_norm > 0.0 {
            FRAC_PI_2 + (-self.z / xy_norm).atan()
        } else if self.z < 0.0 {
            PI
        } else {
            0.0
        }
    }

    /// Builds a vector from spherical coordinates.
    pub fn from_spherical(theta: Real, phi: Real, magnitude: Real) -> Vector3 {
        let mut vector = Vector3::zeros();
        vector.set_spherical(theta, phi, magnitude);
        vector
    }

    /// Overwrites `self` with the vector at the given spherical coordinates.
    pub fn set_spherical(&mut self, theta: Real, phi: Real, magnitude: Real) {
        self.x = phi.sin() * magnitude;
        self.y = theta.sin() * self.x;
        self.x *= theta.cos();
        self.z = phi.cos() * magnitude;
        self.degenerate = false;
    }

    /// The projection of `self` onto the `xy` plane.
    #[inline]
    pub fn xy(&self) -> Vector3 {
        Vector3::new(self.x, self.y, 0.0)
    }

    /// The projection of `self` onto the `xz` plane.
    #[inline]
    pub fn xz(&self) -> Vector3 {
        Vector3::new(self.x, 0.0, self.z)
    }

    /// The projection of `self` onto the `yz` plane.
    #[inline]
    pub fn yz(&self) -> Vector3 {
        Vector3::new(0.0, self.y, self.z)
    }
}

/// Equality over the components; the degeneracy flag does not take part in
/// value identity.
impl PartialEq for Vector3 {
    #[inline]
    fn eq(&self, rhs: &Vector3) -> bool {
        self.x == rhs.x && self.y == rhs.y && self.z == rhs.z
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    #[inline]
    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::flagged(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.degenerate || rhs.degenerate,
        )
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    #[inline]
    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::flagged(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.degenerate || rhs.degenerate,
        )
    }
}

impl AddAssign for Vector3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vector3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
        self.degenerate |= rhs.degenerate;
    }
}

impl SubAssign for Vector3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector3) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
        self.degenerate |= rhs.degenerate;
    }
}

impl Mul<Real> for Vector3 {
    type Output = Vector3;

    #[inline]
    fn mul(self, rhs: Real) -> Vector3 {
        Vector3::flagged(self.x * rhs, self.y * rhs, self.z * rhs, self.degenerate)
    }
}

impl Mul<Vector3> for Real {
    type Output = Vector3;

    #[inline]
    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs * self
    }
}

impl Div<Real> for Vector3 {
    type Output = Vector3;

    #[inline]
    fn div(self, rhs: Real) -> Vector3 {
        Vector3::flagged(self.x / rhs, self.y / rhs, self.z / rhs, self.degenerate)
    }
}

impl MulAssign<Real> for Vector3 {
    #[inline]
    fn mul_assign(&mut self, rhs: Real) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

impl DivAssign<Real> for Vector3 {
    #[inline]
    fn div_assign(&mut self, rhs: Real) {
        self.x /= rhs;
        self.y /= rhs;
        self.z /= rhs;
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    #[inline]
    fn neg(self) -> Vector3 {
        self * -1.0
    }
}

impl Index<usize> for Vector3 {
    type Output = Real;

    #[inline]
    fn index(&self, index: usize) -> &Real {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("vector index {} out of range", index),
        }
    }
}

impl IndexMut<usize> for Vector3 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Real {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("vector index {} out of range", index),
        }
    }
}

impl From<Point3> for Vector3 {
    #[inline]
    fn from(point: Point3) -> Vector3 {
        Vector3::new(point.x, point.y, point.z)
    }
}

impl Zero for Vector3 {
    #[inline]
    fn zero() -> Vector3 {
        Vector3::zeros()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }
}

impl AbsDiffEq for Vector3 {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, rhs: &Vector3, epsilon: Real) -> bool {
        Real::abs_diff_eq(&self.x, &rhs.x, epsilon)
            && Real::abs_diff_eq(&self.y, &rhs.y, epsilon)
            && Real::abs_diff_eq(&self.z, &rhs.z, epsilon)
    }
}

impl RelativeEq for Vector3 {
    fn default_max_relative() -> Real {
        Real::default_max_relative()
    }

    fn relative_eq(&self, rhs: &Vector3, epsilon: Real, max_relative: Real) -> bool {
        Real::relative_eq(&self.x, &rhs.x, epsilon, max_relative)
            && Real::relative_eq(&self.y, &rhs.y, epsilon, max_relative)
            && Real::relative_eq(&self.z, &rhs.z, epsilon, max_relative)
    }
}

impl UlpsEq for Vector3 {
    fn default_max_ulps() -> u32 {
        Real::default_max_ulps()
    }

    fn ulps_eq(&self, rhs: &Vector3, epsilon: Real, max_ulps: u32) -> bool {
        Real::ulps_eq(&self.x, &rhs.x, epsilon, max_ulps)
            && Real::ulps_eq(&self.y, &rhs.y, epsilon, max_ulps)
            && Real::ulps_eq(&self.z, &rhs.z, epsilon, max_ulps)
    }
}
