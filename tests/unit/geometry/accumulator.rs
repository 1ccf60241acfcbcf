use super::*;
use crate::foundation::core::{Vec2, Vec3};

fn tri(x: f32) -> Triangle {
    Triangle::with_face_normal(
        [Vec3::new(x, 0.0, 0.0), Vec3::new(x + 1.0, 0.0, 0.0), Vec3::new(x, 1.0, 0.0)],
        [Vec2::ZERO, Vec2::X, Vec2::Y],
        Vec3::Z,
    )
}

#[test]
fn groups_follow_first_seen_material_order() {
    let mut acc = GeometryAccumulator::new();
    acc.add_triangle(tri(0.0), "stone");
    acc.add_triangle(tri(1.0), "grass");
    acc.add_triangle(tri(2.0), "stone");
    acc.add_triangle(tri(3.0), "water");

    let names = acc.groups().iter().map(|g| g.material.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["stone", "grass", "water"]);
    assert_eq!(acc.material_count(), 3);
    assert_eq!(acc.triangle_count(), 4);

    let stone = &acc.groups()[0];
    assert_eq!(stone.triangles, vec![tri(0.0), tri(2.0)]);
}

#[test]
fn degenerate_triangles_are_accepted() {
    let mut acc = GeometryAccumulator::new();
    let flat = Triangle::with_face_normal([Vec3::ZERO; 3], [Vec2::ZERO; 3], Vec3::Z);
    acc.add_triangle(flat, "null");
    assert_eq!(acc.triangle_count(), 1);
}

#[test]
fn double_sided_appends_flipped_twin() {
    let mut acc = GeometryAccumulator::new();
    acc.add_double_sided(tri(0.0), "glass");
    let g = &acc.groups()[0];
    assert_eq!(g.triangles, vec![tri(0.0), tri(0.0).flipped()]);
}

#[test]
fn take_groups_resets_state() {
    let mut acc = GeometryAccumulator::new();
    acc.add_triangle(tri(0.0), "a");
    let groups = acc.take_groups();
    assert_eq!(groups.len(), 1);
    assert!(acc.is_empty());

    acc.add_triangle(tri(0.0), "b");
    acc.add_triangle(tri(0.0), "a");
    assert_eq!(acc.groups()[0].material, "b");
    assert_eq!(acc.groups()[1].material, "a");
}
