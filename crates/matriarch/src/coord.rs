// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Coordinate values exchanged with the host server.
//!
//! The host owns the notion of where an entity is; these types are the thin
//! value boundary the matrix reads from and produces. Points go through
//! [`crate::Mat4::transform_pos`] (homogeneous `w = 1`), directions through
//! [`crate::Mat4::transform_vec`] (homogeneous `w = 0`).

use serde::{Deserialize, Serialize};

/// A world position with a view direction.
///
/// * `x`, `y`, `z` are block-space coordinates.
/// * `yaw` and `pitch` are in degrees, as the host reports them. Matrix
///   application carries them through untouched.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Pos {
    x: f64,
    y: f64,
    z: f64,
    #[serde(default)]
    yaw: f64,
    #[serde(default)]
    pitch: f64,
}

impl Pos {
    /// The origin, looking along yaw 0 / pitch 0.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0, 0.0);

    /// Creates a position from coordinates and view angles (degrees).
    pub const fn new(x: f64, y: f64, z: f64, yaw: f64, pitch: f64) -> Self {
        Self {
            x,
            y,
            z,
            yaw,
            pitch,
        }
    }

    /// Creates a position with a zero view direction.
    pub const fn at(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 0.0, 0.0)
    }

    /// X coordinate.
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Y coordinate.
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Z coordinate.
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// Yaw in degrees.
    pub const fn yaw(&self) -> f64 {
        self.yaw
    }

    /// Pitch in degrees.
    pub const fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Returns a copy with the coordinates replaced and the view kept.
    pub const fn with_coords(&self, x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, self.yaw, self.pitch)
    }

    /// Returns a copy with the view replaced and the coordinates kept.
    pub const fn with_view(&self, yaw: f64, pitch: f64) -> Self {
        Self::new(self.x, self.y, self.z, yaw, pitch)
    }

    /// The coordinates as `[x, y, z]`.
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// The coordinates as a vector, dropping the view.
    pub const fn as_vec(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl From<Vec3> for Pos {
    fn from(value: Vec3) -> Self {
        Self::at(value.x(), value.y(), value.z())
    }
}

/// A 3D direction (or any three-component quantity without a view).
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    x: f64,
    y: f64,
    z: f64,
}

impl Vec3 {
    /// All zeros.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// All ones; the neutral scale.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit vector along +X.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector along +Y.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector along +Z.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// X component.
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Y component.
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Z component.
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// The components as `[x, y, z]`.
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Returns `true` when every component is finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(value: [f64; 3]) -> Self {
        let [x, y, z] = value;
        Self::new(x, y, z)
    }
}

impl From<Pos> for Vec3 {
    fn from(value: Pos) -> Self {
        value.as_vec()
    }
}
