use std::f32::consts::PI;
use std::ops::{Add, Div, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq};
use num::One;

use crate::math::{Matrix4, Real, Vector3, NORMALIZE_EPSILON};

/// A rotation, stored as a scalar part `w` and an imaginary part `v`.
///
/// Only unit quaternions represent rotations; `degenerate` mirrors the
/// [`Vector3`] convention and marks a quaternion whose normalization failed.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug)]
pub struct Quaternion {
    /// The scalar part.
    pub w: Real,
    /// The imaginary part.
    pub v: Vector3,
    /// Set when a normalization divided by a near-zero magnitude.
    pub degenerate: bool,
}

impl Quaternion {
    /// Creates a quaternion from its scalar and imaginary parts, inheriting
    /// the imaginary part's degeneracy flag.
    #[inline]
    pub fn new(w: Real, v: Vector3) -> Quaternion {
        Quaternion {
            w,
            v,
            degenerate: v.degenerate,
        }
    }

    #[inline]
    fn flagged(w: Real, v: Vector3, degenerate: bool) -> Quaternion {
        Quaternion {
            w,
            v,
            degenerate: v.degenerate || degenerate,
        }
    }

    /// The identity rotation.
    #[inline]
    pub fn identity() -> Quaternion {
        Quaternion::new(1.0, Vector3::zeros())
    }

    /// The rotation of `theta` radians about `axis`.
    ///
    /// The axis is normalized internally; a near-zero axis flags the result
    /// degenerate.
    pub fn from_axis_angle(axis: &Vector3, theta: Real) -> Quaternion {
        let half_theta = 0.5 * theta;
        let axis = axis.normalized();

        Quaternion::flagged(half_theta.cos(), axis * half_theta.sin(), axis.degenerate)
            .normalized()
    }

    /// The shortest-arc rotation mapping `source` onto `destination`.
    ///
    /// Antiparallel inputs have no unique shortest arc; a half-turn about an
    /// axis orthogonal to `source` (built from its least-aligned coordinate
    /// axis) is used instead.
    pub fn between_vectors(source: &Vector3, destination: &Vector3) -> Quaternion {
        let axis = source.cross(destination);
        let angle = source.angle_between(destination);
        let mut rotation = Quaternion::from_axis_angle(&axis, angle);

        if rotation.degenerate {
            if angle.abs() < NORMALIZE_EPSILON {
                return Quaternion::identity();
            }

            let size = Vector3::new(source.x.abs(), source.y.abs(), source.z.abs());
            rotation = if size.x < size.y && size.x < size.z {
                Quaternion::from_axis_angle(&source.cross(&Vector3::x_axis()), PI)
            } else if size.y < size.z {
                Quaternion::from_axis_angle(&source.cross(&Vector3::y_axis()), PI)
            } else {
                Quaternion::from_axis_angle(&source.cross(&Vector3::z_axis()), PI)
            };
        }

        rotation.normalized()
    }

    /// The rotation mapping one orthonormal forward/up basis onto another,
    /// as a forward alignment followed by an up alignment.
    ///
    /// When either alignment is a half-turn its rotation axis is undefined;
    /// the remaining known direction (the default up, then the destination
    /// forward) serves as the axis instead.
    pub fn from_forward_up(
        destination_forward: &Vector3,
        destination_up: &Vector3,
        default_forward: &Vector3,
        default_up: &Vector3,
    ) -> Quaternion {
        let axis0 = default_forward.cross(destination_forward);
        let angle0 = default_forward.angle_between(destination_forward);

        let mut rotation0 = Quaternion::from_axis_angle(&axis0, angle0);
        if rotation0.degenerate {
            rotation0 = if angle0.abs() < NORMALIZE_EPSILON {
                Quaternion::identity()
            } else {
                Quaternion::from_axis_angle(default_up, PI)
            };
        }

        let intermediate_up = rotation0 * *default_up;
        let axis1 = intermediate_up.cross(destination_up);
        let angle1 = intermediate_up.angle_between(destination_up);

        let mut rotation1 = Quaternion::from_axis_angle(&axis1, angle1);
        if rotation1.degenerate {
            rotation1 = if angle1.abs() < NORMALIZE_EPSILON {
                Quaternion::identity()
            } else {
                Quaternion::from_axis_angle(destination_forward, PI)
            };
        }

        (rotation1 * rotation0).normalized()
    }

    /// The rotation given by yaw, pitch and roll angles, in radians.
    pub fn from_euler(yaw: Real, pitch: Real, roll: Real) -> Quaternion {
        let half_yaw = 0.5 * yaw;
        let half_pitch = 0.5 * pitch;
        let half_roll = 0.5 * roll;

        let shy = half_yaw.sin();
        let shp = half_pitch.sin();
        let shr = half_roll.sin();
        let chy = half_yaw.cos();
        let chp = half_pitch.cos();
        let chr = half_roll.cos();

        Quaternion::new(
            chr * chp * chy + shr * shp * shy,
            Vector3::new(
                shr * chp * chy - chr * shp * shy,
                chr * shp * chy + shr * chp * shy,
                chr * chp * shy - shr * shp * chy,
            ),
        )
    }

    /// The squared magnitude.
    #[inline]
    pub fn norm_squared(&self) -> Real {
        self.w * self.w + self.v.dot(&self.v)
    }

    /// The magnitude.
    #[inline]
    pub fn norm(&self) -> Real {
        self.norm_squared().sqrt()
    }

    /// The conjugate.
    #[inline]
    pub fn conjugate(&self) -> Quaternion {
        Quaternion::flagged(self.w, -self.v, self.degenerate)
    }

    /// The multiplicative inverse.
    pub fn reciprocal(&self) -> Quaternion {
        let star = self.conjugate();
        star / (*self * star).w
    }

    /// Rescales `self` to unit magnitude in place, or flags it degenerate if
    /// the magnitude is below [`NORMALIZE_EPSILON`].
    pub fn normalize(&mut self) {
        let norm = self.norm();

        if norm < NORMALIZE_EPSILON {
            self.degenerate = true;
            return;
        }

        let inv = 1.0 / norm;
        self.w *= inv;
        self.v *= inv;
    }

    /// Returns `self` rescaled to unit magnitude, or a degenerate-flagged
    /// copy if the magnitude is below [`NORMALIZE_EPSILON`].
    #[must_use]
    pub fn normalized(&self) -> Quaternion {
        let norm = self.norm();

        if norm < NORMALIZE_EPSILON {
            return Quaternion {
                degenerate: true,
                ..*self
            };
        }

        let inv = 1.0 / norm;
        Quaternion::new(self.w * inv, self.v * inv)
    }

    /// The rotation axis and angle, in radians.
    ///
    /// For near-zero rotations the axis direction is arbitrary; the raw
    /// imaginary part is returned unscaled in that case.
    pub fn to_axis_angle(&self) -> (Vector3, Real) {
        let mut q = self.normalized();

        q.w = q.w.clamp(-1.0, 1.0);

        let angle = 2.0 * q.w.acos();
        let sin_half = (1.0 - q.w * q.w).sqrt();

        if sin_half.abs() < NORMALIZE_EPSILON {
            (q.v, angle)
        } else {
            (q.v / sin_half, angle)
        }
    }

    /// The equivalent rotation matrix.
    ///
    /// Valid only for unit quaternions; no internal renormalization is
    /// performed.
    pub fn to_rotation_matrix(&self) -> Matrix4 {
        let x2 = self.v.x * self.v.x;
        let y2 = self.v.y * self.v.y;
        let z2 = self.v.z * self.v.z;
        let xy = self.v.x * self.v.y;
        let xz = self.v.x * self.v.z;
        let yz = self.v.y * self.v.z;
        let wx = self.w * self.v.x;
        let wy = self.w * self.v.y;
        let wz = self.w * self.v.z;

        Matrix4::new(
            1.0 - 2.0 * (y2 + z2),
            2.0 * (xy - wz),
            2.0 * (xz + wy),
            0.0,
            //
            2.0 * (xy + wz),
            1.0 - 2.0 * (x2 + z2),
            2.0 * (yz - wx),
            0.0,
            //
            2.0 * (xz - wy),
            2.0 * (yz + wx),
            1.0 - 2.0 * (x2 + y2),
            0.0,
            //
            0.0,
            0.0,
            0.0,
            1.0,
        )
    }
}

impl Add for Quaternion {
    type Output = Quaternion;

    #[inline]
    fn add(self, rhs: Quaternion) -> Quaternion {
        Quaternion::flagged(
            self.w + rhs.w,
            self.v + rhs.v,
            self.degenerate || rhs.degenerate,
        )
    }
}

impl Sub for Quaternion {
    type Output = Quaternion;

    #[inline]
    fn sub(self, rhs: Quaternion) -> Quaternion {
        Quaternion::flagged(
            self.w - rhs.w,
            self.v - rhs.v,
            self.degenerate || rhs.degenerate,
        )
    }
}

/// The Hamilton product, composing `rhs`'s rotation followed by `self`'s.
impl Mul for Quaternion {
    type Output = Quaternion;

    #[inline]
    fn mul(self, rhs: Quaternion) -> Quaternion {
        Quaternion::flagged(
            self.w * rhs.w - self.v.dot(&rhs.v),
            rhs.v * self.w + self.v * rhs.w + self.v.cross(&rhs.v),
            self.degenerate || rhs.degenerate,
        )
    }
}

impl Mul<Real> for Quaternion {
    type Output = Quaternion;

    #[inline]
    fn mul(self, rhs: Real) -> Quaternion {
        Quaternion::flagged(self.w * rhs, self.v * rhs, self.degenerate)
    }
}

impl Div<Real> for Quaternion {
    type Output = Quaternion;

    #[inline]
    fn div(self, rhs: Real) -> Quaternion {
        Quaternion::flagged(self.w / rhs, self.v / rhs, self.degenerate)
    }
}

impl Neg for Quaternion {
    type Output = Quaternion;

    #[inline]
    fn neg(self) -> Quaternion {
        self * -1.0
    }
}

/// Rotates a vector. Valid only for unit quaternions.
impl Mul<Vector3> for Quaternion {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        let a = self.w;
        let b = self.v.x;
        let c = self.v.y;
        let d = self.v.z;

        let t2 = a * b;
        let t3 = a * c;
        let t4 = a * d;
        let t5 = -b * b;
        let t6 = b * c;
        let t7 = b * d;
        let t8 = -c * c;
        let t9 = c * d;
        let t10 = -d * d;

        Vector3::flagged(
            2.0 * ((t8 + t10) * rhs.x + (t6 - t4) * rhs.y + (t3 + t7) * rhs.z) + rhs.x,
            2.0 * ((t4 + t6) * rhs.x + (t5 + t10) * rhs.y + (t9 - t2) * rhs.z) + rhs.y,
            2.0 * ((t7 - t3) * rhs.x + (t2 + t9) * rhs.y + (t5 + t8) * rhs.z) + rhs.z,
            self.degenerate || rhs.degenerate,
        )
    }
}

/// Equality over the scalar and imaginary parts; the degeneracy flag does
/// not take part in value identity.
impl PartialEq for Quaternion {
    #[inline]
    fn eq(&self, rhs: &Quaternion) -> bool {
        self.w == rhs.w && self.v == rhs.v
    }
}

impl One for Quaternion {
    fn one() -> Quaternion {
        Quaternion::identity()
    }
}

impl AbsDiffEq for Quaternion {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, rhs: &Quaternion, epsilon: Real) -> bool {
        Real::abs_diff_eq(&self.w, &rhs.w, epsilon) && Vector3::abs_diff_eq(&self.v, &rhs.v, epsilon)
    }
}

impl RelativeEq for Quaternion {
    fn default_max_relative() -> Real {
        Real::default_max_relative()
    }

    fn relative_eq(&self, rhs: &Quaternion, epsilon: Real, max_relative: Real) -> bool {
        Real::relative_eq(&self.w, &rhs.w, epsilon, max_relative)
            && Vector3::relative_eq(&self.v, &rhs.v, epsilon, max_relative)
    }
}
