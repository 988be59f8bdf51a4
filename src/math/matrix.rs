use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num::{One, Zero};

use crate::math::{Quaternion, Real, Vector3};

/// A row-major 4x4 matrix, used as an affine transform over [`Vector3`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix4 {
    m: [[Real; 4]; 4],
}

impl Matrix4 {
    /// Creates a matrix from its 16 elements, given row by row.
    #[inline]
    pub fn new(
        m11: Real,
        m12: Real,
        m13: Real,
        m14: Real,
        m21: Real,
        m22: Real,
        m23: Real,
        m24: Real,
        m31: Real,
        m32: Real,
        m33: Real,
        m34: Real,
        m41: Real,
        m42: Real,
        m43: Real,
        m44: Real,
    ) -> Matrix4 {
        Matrix4 {
            m: [
                [m11, m12, m13, m14],
                [m21, m22, m23, m24],
                [m31, m32, m33, m34],
                [m41, m42, m43, m44],
            ],
        }
    }

    /// The zero matrix.
    #[inline]
    pub fn zeros() -> Matrix4 {
        Matrix4 { m: [[0.0; 4]; 4] }
    }

    /// The identity matrix.
    #[inline]
    pub fn identity() -> Matrix4 {
        let mut matrix = Matrix4::zeros();
        for i in 0..4 {
            matrix.m[i][i] = 1.0;
        }
        matrix
    }

    /// Embeds three vectors as the columns of the linear part of an affine
    /// frame, with a unit `w`.
    ///
    /// Multiplying the result by `(x, y, z)` yields `x * a + y * b + z * c`.
    pub fn from_columns(a: &Vector3, b: &Vector3, c: &Vector3) -> Matrix4 {
        Matrix4::new(
            a.x, b.x, c.x, 0.0, //
            a.y, b.y, c.y, 0.0, //
            a.z, b.z, c.z, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Embeds three vectors as the rows of the linear part of an affine
    /// frame, with a unit `w`.
    pub fn from_rows(a: &Vector3, b: &Vector3, c: &Vector3) -> Matrix4 {
        Matrix4::from_columns(a, b, c).transposed()
    }

    /// A non-uniform scaling transform.
    pub fn scale(factors: &Vector3) -> Matrix4 {
        let mut matrix = Matrix4::identity();
        matrix.m[0][0] = factors.x;
        matrix.m[1][1] = factors.y;
        matrix.m[2][2] = factors.z;
        matrix
    }

    /// A translation transform.
    pub fn translate(offset: &Vector3) -> Matrix4 {
        let mut matrix = Matrix4::identity();
        matrix.m[0][3] = offset.x;
        matrix.m[1][3] = offset.y;
        matrix.m[2][3] = offset.z;
        matrix
    }

    /// A rotation transform about the given axis.
    pub fn rotate(axis: &Vector3, angle: Real) -> Matrix4 {
        Quaternion::from_axis_angle(axis, angle).to_rotation_matrix()
    }

    fn minor(&self, row: usize, col: usize) -> Real {
        let mut sub = [[0.0; 3]; 3];
        let mut r = 0;
        for i in 0..4 {
            if i == row {
                continue;
            }
            let mut c = 0;
            for j in 0..4 {
                if j == col {
                    continue;
                }
                sub[r][c] = self.m[i][j];
                c += 1;
            }
            r += 1;
        }

        sub[0][0] * (sub[1][1] * sub[2][2] - sub[1][2] * sub[2][1])
            - sub[0][1] * (sub[1][0] * sub[2][2] - sub[1][2] * sub[2][0])
            + sub[0][2] * (sub[1][0] * sub[2][1] - sub[1][1] * sub[2][0])
    }

    /// The determinant.
    pub fn determinant(&self) -> Real {
        let mut det = 0.0;
        let mut sign = 1.0;
        for j in 0..4 {
            det += sign * self.m[0][j] * self.minor(0, j);
            sign = -sign;
        }
        det
    }

    /// The inverse, as the adjugate over the determinant.
    ///
    /// A singular matrix yields non-finite entries; there is no guard.
    #[must_use]
    pub fn inverted(&self) -> Matrix4 {
        let det = self.determinant();
        let mut out = Matrix4::zeros();
        for i in 0..4 {
            for j in 0..4 {
                let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
                out.m[j][i] = sign * self.minor(i, j) / det;
            }
        }
        out
    }

    /// Replaces `self` with its inverse.
    pub fn invert(&mut self) {
        *self = self.inverted();
    }

    /// The transpose.
    #[must_use]
    pub fn transposed(&self) -> Matrix4 {
        let mut out = Matrix4::zeros();
        for i in 0..4 {
            for j in 0..4 {
                out.m[i][j] = self.m[j][i];
            }
        }
        out
    }

    /// Transposes `self` in place.
    pub fn transpose(&mut self) {
        *self = self.transposed();
    }
}

impl Add for Matrix4 {
    type Output = Matrix4;

    fn add(self, rhs: Matrix4) -> Matrix4 {
        let mut out = Matrix4::zeros();
        for i in 0..4 {
            for j in 0..4 {
                out.m[i][j] = self.m[i][j] + rhs.m[i][j];
            }
        }
        out
    }
}

impl Sub for Matrix4 {
    type Output = Matrix4;

    fn sub(self, rhs: Matrix4) -> Matrix4 {
        let mut out = Matrix4::zeros();
        for i in 0..4 {
            for j in 0..4 {
                out.m[i][j] = self.m[i][j] - rhs.m[i][j];
            }
        }
        out
    }
}

impl Mul for Matrix4 {
    type Output = Matrix4;

    fn mul(self, rhs: Matrix4) -> Matrix4 {
        let mut out = Matrix4::zeros();
        for i in 0..4 {
            for j in 0..4 {
                let mut sum = 0.0;
                for (k, row) in rhs.m.iter().enumerate() {
                    sum += self.m[i][k] * row[j];
                }
                out.m[i][j] = sum;
            }
        }
        out
    }
}

impl Mul<Real> for Matrix4 {
    type Output = Matrix4;

    fn mul(self, rhs: Real) -> Matrix4 {
        let mut out = self;
        for row in out.m.iter_mut() {
            for value in row.iter_mut() {
                *value *= rhs;
            }
        }
        out
    }
}

impl Div<Real> for Matrix4 {
    type Output = Matrix4;

    fn div(self, rhs: Real) -> Matrix4 {
        self * (1.0 / rhs)
    }
}

impl Neg for Matrix4 {
    type Output = Matrix4;

    fn neg(self) -> Matrix4 {
        self * -1.0
    }
}

/// Applies the affine transform to a point-like operand: the linear part
/// times the components, plus the translation column. There is no separate
/// direction transform; every operand is treated as having `w = 1`.
impl Mul<Vector3> for Matrix4 {
    type Output = Vector3;

    #[inline]
    fn mul(self, rhs: Vector3) -> Vector3 {
        Vector3::flagged(
            self.m[0][0] * rhs.x + self.m[0][1] * rhs.y + self.m[0][2] * rhs.z + self.m[0][3],
            self.m[1][0] * rhs.x + self.m[1][1] * rhs.y + self.m[1][2] * rhs.z + self.m[1][3],
            self.m[2][0] * rhs.x + self.m[2][1] * rhs.y + self.m[2][2] * rhs.z + self.m[2][3],
            rhs.degenerate,
        )
    }
}

impl Index<(usize, usize)> for Matrix4 {
    type Output = Real;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Real {
        &self.m[row][col]
    }
}

impl Zero for Matrix4 {
    fn zero() -> Matrix4 {
        Matrix4::zeros()
    }

    fn is_zero(&self) -> bool {
        self.m.iter().flatten().all(|value| *value == 0.0)
    }
}

impl One for Matrix4 {
    fn one() -> Matrix4 {
        Matrix4::identity()
    }
}

impl AbsDiffEq for Matrix4 {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, rhs: &Matrix4, epsilon: Real) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(rhs.m.iter().flatten())
            .all(|(a, b)| Real::abs_diff_eq(a, b, epsilon))
    }
}

impl RelativeEq for Matrix4 {
    fn default_max_relative() -> Real {
        Real::default_max_relative()
    }

    fn relative_eq(&self, rhs: &Matrix4, epsilon: Real, max_relative: Real) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(rhs.m.iter().flatten())
            .all(|(a, b)| Real::relative_eq(a, b, epsilon, max_relative))
    }
}

impl UlpsEq for Matrix4 {
    fn default_max_ulps() -> u32 {
        Real::default_max_ulps()
    }

    fn ulps_eq(&self, rhs: &Matrix4, epsilon: Real, max_ulps: u32) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(rhs.m.iter().flatten())
            .all(|(a, b)| Real::ulps_eq(a, b, epsilon, max_ulps))
    }
}
