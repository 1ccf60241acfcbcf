use super::*;

#[test]
fn defaults_validate() {
    let cfg = BuildConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.pathed_name, "MustChange");
    assert_eq!(cfg.pathed_datablock, "PathedDefault");
    assert_eq!(cfg.min_pixels, 250);
}

#[test]
fn json_fills_missing_fields_with_defaults() {
    let cfg = BuildConfig::from_json_str(r#"{"point_epsilon": 0.001, "pathed_name": "Elevator"}"#)
        .unwrap();
    assert_eq!(cfg.point_epsilon, 0.001);
    assert_eq!(cfg.pathed_name, "Elevator");
    assert_eq!(cfg.plane_epsilon, BuildConfig::default().plane_epsilon);
}

#[test]
fn unknown_fields_and_bad_values_are_rejected() {
    assert!(matches!(
        BuildConfig::from_json_str(r#"{"bsp_mode": 2}"#),
        Err(DifError::Validation(_))
    ));

    let cfg = BuildConfig {
        point_epsilon: -1.0,
        ..BuildConfig::default()
    };
    assert!(cfg.validate().is_err());

    let cfg = BuildConfig {
        plane_epsilon: f32::NAN,
        ..BuildConfig::default()
    };
    assert!(cfg.validate().is_err());

    let cfg = BuildConfig {
        pathed_datablock: "x".repeat(256),
        ..BuildConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn triangle_cap_is_off_by_default() {
    assert_eq!(BuildConfig::default().max_triangles, None);
    let cfg = BuildConfig::from_json_str(r#"{"max_triangles": 12000}"#).unwrap();
    assert_eq!(cfg.max_triangles, Some(12000));
}
