// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace, warn};

use crate::coord::{Pos, Vec3};
use crate::error::TransformError;
use crate::math::{deg_to_rad, Mat4};

/// Unit the angles of a [`Rotation`] are written in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    /// Radians (the unit [`Mat4`] works in).
    #[default]
    Radians,
    /// Degrees (the unit the host reports view angles in).
    Degrees,
}

/// Euler angles applied as X (pitch), then Y (yaw), then Z (roll).
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Rotation {
    /// Rotation about +X.
    pub pitch: f64,
    /// Rotation about +Y.
    pub yaw: f64,
    /// Rotation about +Z.
    pub roll: f64,
    /// Unit of the three angles.
    pub unit: AngleUnit,
}

impl Rotation {
    /// Angles in radians.
    pub const fn radians(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self {
            pitch,
            yaw,
            roll,
            unit: AngleUnit::Radians,
        }
    }

    /// Angles in degrees.
    pub const fn degrees(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self {
            pitch,
            yaw,
            roll,
            unit: AngleUnit::Degrees,
        }
    }

    /// Returns `(pitch, yaw, roll)` in radians.
    pub fn to_radians(&self) -> (f64, f64, f64) {
        match self.unit {
            AngleUnit::Radians => (self.pitch, self.yaw, self.roll),
            AngleUnit::Degrees => (
                deg_to_rad(self.pitch),
                deg_to_rad(self.yaw),
                deg_to_rad(self.roll),
            ),
        }
    }
}

/// A translate, rotate, scale description of a display entity transform.
///
/// Whole top-level fields may be left out and default to no translation, no
/// rotation and unit scale, so `{}` is the identity. A vector that is present
/// must carry all of `x`, `y` and `z`; rotation angles default to zero
/// individually.
///
/// ```
/// use matriarch::{Mat4, Transform};
/// let t = Transform::from_json(r#"{ "translation": { "x": 1.0, "y": 2.0, "z": 3.0 } }"#)?;
/// assert_eq!(t.to_mat4(), Mat4::translation(1.0, 2.0, 3.0));
/// assert_eq!(Transform::from_json("{}")?.to_mat4(), Mat4::IDENTITY);
/// # Ok::<(), matriarch::TransformError>(())
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transform {
    /// Offset applied first.
    pub translation: Vec3,
    /// Euler rotation applied after the translation.
    pub rotation: Rotation,
    /// Diagonal scale applied last.
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// No translation, no rotation, unit scale.
    pub const fn identity() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Rotation::radians(0.0, 0.0, 0.0),
            scale: Vec3::ONE,
        }
    }

    /// Creates a transform from components.
    pub const fn new(translation: Vec3, rotation: Rotation, scale: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// Places a transform at a host position, rotated by its view.
    ///
    /// Pitch and yaw are read from the position (degrees); roll is zero.
    pub fn from_pos(pos: &Pos, scale: Vec3) -> Self {
        Self::new(
            pos.as_vec(),
            Rotation::degrees(pos.pitch(), pos.yaw(), 0.0),
            scale,
        )
    }

    /// Replaces the translation.
    pub const fn with_translation(mut self, translation: Vec3) -> Self {
        self.translation = translation;
        self
    }

    /// Replaces the rotation.
    pub const fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Replaces the scale.
    pub const fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Composes `IDENTITY.translate(t).rotate(pitch, yaw, roll).scale(s)`.
    pub fn to_mat4(&self) -> Mat4 {
        let (pitch, yaw, roll) = self.rotation.to_radians();
        let m = Mat4::IDENTITY
            .translate(self.translation.x(), self.translation.y(), self.translation.z())
            .rotate(pitch, yaw, roll)
            .scale_vec(&self.scale);
        trace!(matrix = ?m.to_array(), "composed transform");
        if !m.is_finite() {
            warn!(transform = ?self, "composed transform has non-finite elements");
        }
        m
    }

    /// Checks that every component is finite.
    pub fn validate(&self) -> Result<(), TransformError> {
        let fields = [
            ("translation.x", self.translation.x()),
            ("translation.y", self.translation.y()),
            ("translation.z", self.translation.z()),
            ("rotation.pitch", self.rotation.pitch),
            ("rotation.yaw", self.rotation.yaw),
            ("rotation.roll", self.rotation.roll),
            ("scale.x", self.scale.x()),
            ("scale.y", self.scale.y()),
            ("scale.z", self.scale.z()),
        ];
        match fields.into_iter().find(|(_, v)| !v.is_finite()) {
            Some((field, value)) => Err(TransformError::NonFinite { field, value }),
            None => Ok(()),
        }
    }

    /// Parses and validates a JSON description.
    ///
    /// JSON has no NaN or infinity tokens and serde_json rejects out-of-range
    /// numbers such as `1e400` as a [`TransformError::Serde`], so the
    /// [`Transform::validate`] pass here is a backstop; non-finite values
    /// normally only reach a `Transform` built in code, and
    /// [`Transform::to_json`] rejects those.
    #[instrument(level = "debug", skip_all, err)]
    pub fn from_json(json: &str) -> Result<Self, TransformError> {
        let transform: Self = serde_json::from_str(json)?;
        transform.validate()?;
        debug!(?transform, "parsed transform");
        Ok(transform)
    }

    /// Validates and serializes to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, TransformError> {
        self.validate()?;
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<Transform> for Mat4 {
    fn from(value: Transform) -> Self {
        value.to_mat4()
    }
}
