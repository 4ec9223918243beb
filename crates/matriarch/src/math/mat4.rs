// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Add, Mul, MulAssign, Sub};

use serde::{Deserialize, Serialize};

use crate::coord::{Pos, Vec3};

/// Row‑major 4×4 affine transform matrix.
///
/// - Element `m_rc` sits at row `r`, column `c`; translation occupies the last
///   column (`m03`, `m13`, `m23`).
/// - Immutable: every operation returns a new matrix. Composition helpers
///   right-multiply, so `a.translate(..).rotate_x(..)` is `a * T * Rx`.
/// - Serializes as its 16 elements in row-major order.
///
/// # Examples
/// ```
/// use matriarch::{Mat4, Pos};
/// let m = Mat4::IDENTITY.translate(5.0, -3.0, 2.0);
/// let p = m.transform_pos(&Pos::new(2.0, 4.0, -1.0, 90.0, 10.0));
/// assert_eq!(p.to_array(), [7.0, 1.0, 1.0]);
/// assert_eq!((p.yaw(), p.pitch()), (90.0, 10.0));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mat4 {
    data: [f64; 16],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat4 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::new([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0, //
    ]);

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a matrix from 16 elements in row-major order.
    pub const fn new(data: [f64; 16]) -> Self {
        Self { data }
    }

    /// Creates a matrix from four rows.
    pub const fn from_rows(rows: [[f64; 4]; 4]) -> Self {
        let [r0, r1, r2, r3] = rows;
        Self::new([
            r0[0], r0[1], r0[2], r0[3], //
            r1[0], r1[1], r1[2], r1[3], //
            r2[0], r2[1], r2[2], r2[3], //
            r3[0], r3[1], r3[2], r3[3], //
        ])
    }

    /// Builds a translation matrix.
    ///
    /// Identity with `m03 = x`, `m13 = y`, `m23 = z`.
    pub const fn translation(x: f64, y: f64, z: f64) -> Self {
        Self::new([
            1.0, 0.0, 0.0, x, //
            0.0, 1.0, 0.0, y, //
            0.0, 0.0, 1.0, z, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Rotation about +X by `angle` radians (right-handed, `m12 = -sin`).
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            1.0, 0.0, 0.0, 0.0, //
            0.0, c, -s, 0.0, //
            0.0, s, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Rotation about +Y by `angle` radians (right-handed, `m20 = -sin`).
    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c, 0.0, s, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            -s, 0.0, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Rotation about +Z by `angle` radians (right-handed, `m01 = -sin`).
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c, -s, 0.0, 0.0, //
            s, c, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Composes translation, rotation and scale from scalars.
    ///
    /// Equivalent to
    /// `IDENTITY.translate(px, py, pz).rotate(rx, ry, rz).scale(sx, sy, sz)`;
    /// rotation angles are radians.
    pub fn transform(
        px: f64,
        py: f64,
        pz: f64,
        rx: f64,
        ry: f64,
        rz: f64,
        sx: f64,
        sy: f64,
        sz: f64,
    ) -> Self {
        Self::IDENTITY
            .translate(px, py, pz)
            .rotate(rx, ry, rz)
            .scale(sx, sy, sz)
    }

    #[inline]
    fn at(&self, row: usize, col: usize) -> f64 {
        self.data[row * 4 + col]
    }

    /// Returns `self * translation(x, y, z)`.
    pub fn translate(&self, x: f64, y: f64, z: f64) -> Self {
        self.multiply(&Self::translation(x, y, z))
    }

    /// Returns `self * rotation_x(angle)`.
    pub fn rotate_x(&self, angle: f64) -> Self {
        self.multiply(&Self::rotation_x(angle))
    }

    /// Returns `self * rotation_y(angle)`.
    pub fn rotate_y(&self, angle: f64) -> Self {
        self.multiply(&Self::rotation_y(angle))
    }

    /// Returns `self * rotation_z(angle)`.
    pub fn rotate_z(&self, angle: f64) -> Self {
        self.multiply(&Self::rotation_z(angle))
    }

    /// Applies X, then Y, then Z rotations (radians), each as its own
    /// right-multiplication: `self * Rx(pitch) * Ry(yaw) * Rz(roll)`.
    ///
    /// # Examples
    /// ```
    /// use core::f64::consts::FRAC_PI_2;
    /// use matriarch::{Mat4, Vec3};
    /// // Roll 90°: +X maps to +Y.
    /// let v = Mat4::IDENTITY.rotate(0.0, 0.0, FRAC_PI_2).transform_vec(&Vec3::UNIT_X);
    /// assert!((v.y() - 1.0).abs() < 1e-12);
    /// ```
    pub fn rotate(&self, pitch: f64, yaw: f64, roll: f64) -> Self {
        self.rotate_x(pitch).rotate_y(yaw).rotate_z(roll)
    }

    /// Scales the diagonal by `(x, y, z, 1)`. See [`Mat4::scale_w`].
    pub fn scale(&self, x: f64, y: f64, z: f64) -> Self {
        self.scale_w(x, y, z, 1.0)
    }

    /// Multiplies the diagonal terms in place: `m00 *= x`, `m11 *= y`,
    /// `m22 *= z`, `m33 *= w`.
    ///
    /// Off-diagonal terms are left alone, so on anything other than a
    /// translation-only matrix this is not the same as right-multiplying by a
    /// scale matrix.
    pub fn scale_w(&self, x: f64, y: f64, z: f64, w: f64) -> Self {
        let mut out = self.data;
        out[0] *= x;
        out[5] *= y;
        out[10] *= z;
        out[15] *= w;
        Self::new(out)
    }

    /// [`Mat4::scale`] with factors taken from a vector.
    pub fn scale_vec(&self, factors: &Vec3) -> Self {
        self.scale_vec_w(factors, 1.0)
    }

    /// [`Mat4::scale_w`] with the first three factors taken from a vector.
    pub fn scale_vec_w(&self, factors: &Vec3, w: f64) -> Self {
        self.scale_w(factors.x(), factors.y(), factors.z(), w)
    }

    /// Element-wise sum.
    pub fn add(&self, rhs: &Self) -> Self {
        let mut out = self.data;
        for (o, r) in out.iter_mut().zip(rhs.data) {
            *o += r;
        }
        Self::new(out)
    }

    /// Element-wise difference.
    pub fn sub(&self, rhs: &Self) -> Self {
        let mut out = self.data;
        for (o, r) in out.iter_mut().zip(rhs.data) {
            *o -= r;
        }
        Self::new(out)
    }

    /// Matrix product `self * rhs`: row `r` of `self` dotted with column `c`
    /// of `rhs`.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.at(row, k) * rhs.at(k, col);
                }
                out[row * 4 + col] = sum;
            }
        }
        Self::new(out)
    }

    /// Transforms a position as a point (`w = 1`, no perspective divide).
    ///
    /// Yaw and pitch are copied from the input unchanged.
    ///
    /// Every output row reads the matching matrix row (`y` uses `m10..m13`,
    /// `z` uses `m20..m23`), as [`Mat4::transform_vec`] does. The earlier host
    /// integration used `m01` in the `y` row and `m02`/`m21` in the `z` row;
    /// this function deliberately does not reproduce that.
    pub fn transform_pos(&self, pos: &Pos) -> Pos {
        let (x, y, z) = (pos.x(), pos.y(), pos.z());

        let nx = self.at(0, 0) * x + self.at(0, 1) * y + self.at(0, 2) * z + self.at(0, 3);
        let ny = self.at(1, 0) * x + self.at(1, 1) * y + self.at(1, 2) * z + self.at(1, 3);
        let nz = self.at(2, 0) * x + self.at(2, 1) * y + self.at(2, 2) * z + self.at(2, 3);

        pos.with_coords(nx, ny, nz)
    }

    /// Transforms a direction (`w = 0`); the translation column is ignored.
    pub fn transform_vec(&self, direction: &Vec3) -> Vec3 {
        let (x, y, z) = (direction.x(), direction.y(), direction.z());

        let nx = self.at(0, 0) * x + self.at(0, 1) * y + self.at(0, 2) * z;
        let ny = self.at(1, 0) * x + self.at(1, 1) * y + self.at(1, 2) * z;
        let nz = self.at(2, 0) * x + self.at(2, 1) * y + self.at(2, 2) * z;

        Vec3::new(nx, ny, nz)
    }

    /// Element at `(row, col)`, or `None` outside `0..4`.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        (row < 4 && col < 4).then(|| self.at(row, col))
    }

    /// Copy of the matrix with the element at `(row, col)` replaced.
    ///
    /// Returns `None` when either index is outside `0..4`.
    ///
    /// # Examples
    /// ```
    /// use matriarch::Mat4;
    /// let m = Mat4::IDENTITY.with(0, 3, 12.5).unwrap();
    /// assert_eq!(m, Mat4::translation(12.5, 0.0, 0.0));
    /// assert!(Mat4::IDENTITY.with(4, 0, 1.0).is_none());
    /// ```
    pub fn with(&self, row: usize, col: usize, value: f64) -> Option<Self> {
        if row >= 4 || col >= 4 {
            return None;
        }
        let mut out = self.data;
        out[row * 4 + col] = value;
        Some(Self::new(out))
    }

    /// Row `r` as `[m_r0, m_r1, m_r2, m_r3]`.
    pub fn row(&self, r: usize) -> Option<[f64; 4]> {
        (r < 4).then(|| [self.at(r, 0), self.at(r, 1), self.at(r, 2), self.at(r, 3)])
    }

    /// Column `c` as `[m_0c, m_1c, m_2c, m_3c]`.
    pub fn column(&self, c: usize) -> Option<[f64; 4]> {
        (c < 4).then(|| [self.at(0, c), self.at(1, c), self.at(2, c), self.at(3, c)])
    }

    /// The 16 elements in row-major order.
    pub const fn to_array(self) -> [f64; 16] {
        self.data
    }

    /// The matrix as four rows.
    pub fn to_rows(self) -> [[f64; 4]; 4] {
        let mut rows = [[0.0; 4]; 4];
        for (r, row) in rows.iter_mut().enumerate() {
            row.copy_from_slice(&self.data[r * 4..r * 4 + 4]);
        }
        rows
    }

    /// The 16 elements in column-major order.
    pub fn to_cols_array(self) -> [f64; 16] {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                out[col * 4 + row] = self.at(row, col);
            }
        }
        out
    }

    /// Row-major `f32` elements, the layout display-entity transformation
    /// fields take.
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_row_major_f32(self) -> [f32; 16] {
        self.data.map(|v| v as f32)
    }

    /// Returns `true` when no element is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }
}

impl From<[f64; 16]> for Mat4 {
    fn from(value: [f64; 16]) -> Self {
        Self::new(value)
    }
}

impl From<[[f64; 4]; 4]> for Mat4 {
    fn from(value: [[f64; 4]; 4]) -> Self {
        Self::from_rows(value)
    }
}

impl From<Mat4> for [f64; 16] {
    fn from(value: Mat4) -> Self {
        value.to_array()
    }
}

impl Add for Mat4 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Mat4::add(&self, &rhs)
    }
}

impl Sub for Mat4 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Mat4::sub(&self, &rhs)
    }
}

impl Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<&Mat4> for Mat4 {
    type Output = Self;
    fn mul(self, rhs: &Mat4) -> Self::Output {
        self.multiply(rhs)
    }
}

impl MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl MulAssign<&Mat4> for Mat4 {
    fn mul_assign(&mut self, rhs: &Mat4) {
        *self = self.multiply(rhs);
    }
}

impl Mul<Pos> for Mat4 {
    type Output = Pos;
    fn mul(self, rhs: Pos) -> Self::Output {
        self.transform_pos(&rhs)
    }
}

impl Mul<Vec3> for Mat4 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Self::Output {
        self.transform_vec(&rhs)
    }
}
