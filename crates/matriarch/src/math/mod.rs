// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scalar helpers and the [`Mat4`] transform matrix.
//!
//! All arithmetic is plain `f64` with IEEE 754 semantics: NaN and infinities
//! propagate and nothing is clamped or validated.

mod mat4;

pub use mat4::Mat4;

/// Per-element tolerance used when comparing matrices against a reference
/// implementation (`1/1024`).
pub const PRECISION: f64 = 1.0 / 1024.0;

/// Converts degrees to radians.
pub fn deg_to_rad(value: f64) -> f64 {
    value.to_radians()
}

/// Converts radians to degrees.
pub fn rad_to_deg(value: f64) -> f64 {
    value.to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn deg_rad_roundtrip_basic_angles() {
        for deg in [0.0_f64, 45.0, 90.0, 180.0, -90.0, 720.0] {
            assert_abs_diff_eq!(rad_to_deg(deg_to_rad(deg)), deg, epsilon = 1e-9);
        }
    }

    #[test]
    fn right_angle_is_half_pi() {
        assert_abs_diff_eq!(
            deg_to_rad(90.0),
            core::f64::consts::FRAC_PI_2,
            epsilon = 1e-12
        );
    }
}
