// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use approx::assert_abs_diff_eq;
use matriarch::math::deg_to_rad;
use matriarch::{AngleUnit, Mat4, Pos, Rotation, Transform, TransformError, Vec3};

#[test]
fn identity_transform_is_identity_matrix() {
    assert_eq!(Transform::identity().to_mat4(), Mat4::IDENTITY);
    assert_eq!(Transform::default(), Transform::identity());
}

#[test]
fn to_mat4_matches_scalar_transform() {
    let t = Transform::new(
        Vec3::new(1.0, -2.0, 3.5),
        Rotation::radians(0.2, -0.4, 1.1),
        Vec3::new(2.0, 0.5, 1.0),
    );
    let expected = Mat4::transform(1.0, -2.0, 3.5, 0.2, -0.4, 1.1, 2.0, 0.5, 1.0);
    assert_eq!(t.to_mat4(), expected);
    assert_eq!(Mat4::from(t), expected);
}

#[test]
fn degree_rotation_converts_before_composing() {
    let t = Transform::identity().with_rotation(Rotation::degrees(30.0, 60.0, 90.0));
    let expected = Mat4::IDENTITY.rotate(deg_to_rad(30.0), deg_to_rad(60.0), deg_to_rad(90.0));
    let (a, b) = (t.to_mat4().to_array(), expected.to_array());
    for i in 0..16 {
        assert_abs_diff_eq!(a[i], b[i], epsilon = 1e-12);
    }
}

#[test]
fn from_pos_uses_view_angles_in_degrees() {
    let pos = Pos::new(10.0, 64.0, -3.0, 90.0, 45.0);
    let t = Transform::from_pos(&pos, Vec3::ONE);
    assert_eq!(t.translation, Vec3::new(10.0, 64.0, -3.0));
    assert_eq!(t.rotation, Rotation::degrees(45.0, 90.0, 0.0));
    assert_eq!(t.rotation.unit, AngleUnit::Degrees);

    // The entity origin ends up at the position itself.
    let origin = t.to_mat4() * Pos::ZERO;
    assert_abs_diff_eq!(origin.x(), 10.0, epsilon = 1e-12);
    assert_abs_diff_eq!(origin.y(), 64.0, epsilon = 1e-12);
    assert_abs_diff_eq!(origin.z(), -3.0, epsilon = 1e-12);
}

#[test]
fn json_description_with_partial_fields() {
    let json = r#"{
        "translation": { "x": 0.5, "y": 1.0, "z": -0.5 },
        "rotation": { "yaw": 180.0, "unit": "degrees" }
    }"#;
    let t = Transform::from_json(json).unwrap();
    assert_eq!(t.scale, Vec3::ONE);
    assert_eq!(t.rotation.pitch, 0.0);

    let m = t.to_mat4();
    // Yaw 180° flips X and Z around the translated origin.
    let out = m.transform_vec(&Vec3::UNIT_X);
    assert_abs_diff_eq!(out.x(), -1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(out.z(), 0.0, epsilon = 1e-12);
    assert_eq!(m.column(3), Some([0.5, 1.0, -0.5, 1.0]));
}

#[test]
fn unknown_angle_unit_is_rejected() {
    let err = Transform::from_json(r#"{ "rotation": { "unit": "gradians" } }"#).unwrap_err();
    assert!(matches!(err, TransformError::Serde(_)), "{err}");
}

#[test]
fn non_finite_description_is_rejected_before_serializing() {
    let t = Transform::identity().with_translation(Vec3::new(f64::NAN, 0.0, 0.0));
    let err = t.to_json().unwrap_err();
    assert!(
        matches!(err, TransformError::NonFinite { field: "translation.x", .. }),
        "{err}"
    );
    assert!(err.to_string().contains("translation.x"));
}

#[test]
fn non_finite_description_still_composes() {
    // Matrix math never rejects input; only the text boundary validates.
    let t = Transform::identity().with_scale(Vec3::new(f64::INFINITY, 1.0, 1.0));
    let m = t.to_mat4();
    assert!(!m.is_finite());
    assert_eq!(m.get(0, 0), Some(f64::INFINITY));
}

#[test]
fn display_entity_export_is_row_major_f32() {
    let m = Transform::identity()
        .with_translation(Vec3::new(1.0, 2.0, 3.0))
        .with_scale(Vec3::new(2.0, 2.0, 2.0))
        .to_mat4();
    assert_eq!(
        m.to_row_major_f32(),
        [
            2.0, 0.0, 0.0, 1.0, //
            0.0, 2.0, 0.0, 2.0, //
            0.0, 0.0, 2.0, 3.0, //
            0.0, 0.0, 0.0, 1.0,
        ]
    );
}
