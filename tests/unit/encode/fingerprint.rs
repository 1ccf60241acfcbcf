use super::*;
use crate::{
    build::builder::SceneBuilder,
    encode::writer::to_bytes,
    foundation::core::{Vec2, Vec3},
    scene::model::{Trigger, Triangle},
};

fn scene() -> SceneGraph {
    let mut b = SceneBuilder::new();
    b.add_triangle(
        Triangle::with_face_normal([Vec3::ZERO, Vec3::X, Vec3::Y], [Vec2::ZERO, Vec2::X, Vec2::Y], Vec3::Z),
        "grass",
    )
    .unwrap();
    b.add_trigger(Trigger::new("Goal", "FinishTrigger", Vec3::ZERO)).unwrap();
    b.build().unwrap()
}

#[test]
fn streaming_and_buffered_fingerprints_agree() {
    let g = scene();
    for v in Version::ALL {
        let bytes = to_bytes(&g, v).unwrap();
        assert_eq!(fingerprint_scene(&g, v).unwrap(), fingerprint_bytes(&bytes));
    }
}

#[test]
fn fingerprint_is_stable_and_version_sensitive() {
    let g = scene();
    let a = fingerprint_scene(&g, Version::Baseline).unwrap();
    assert_eq!(a, fingerprint_scene(&g, Version::Baseline).unwrap());
    assert_ne!(a, fingerprint_scene(&g, Version::Mbg).unwrap());
}

#[test]
fn halves_are_independent_and_length_matters() {
    let f = fingerprint_bytes(b"dif");
    assert_ne!(f.hi, f.lo);
    assert_ne!(fingerprint_bytes(&[]), fingerprint_bytes(&[0]));
    assert_eq!(f.to_string().len(), 32);
}
