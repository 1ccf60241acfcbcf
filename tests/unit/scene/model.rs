use super::*;

fn tri() -> Triangle {
    Triangle::with_face_normal(
        [Vec3::ZERO, Vec3::X, Vec3::Y],
        [Vec2::ZERO, Vec2::X, Vec2::Y],
        Vec3::Z,
    )
}

#[test]
fn face_normal_is_shared_by_all_vertices() {
    let t = tri();
    assert!(t.vertices.iter().all(|v| v.normal == Vec3::Z));
    assert_eq!(t.vertices[1].uv, Vec2::X);
    assert!((t.area() - 0.5).abs() < 1e-6);
}

#[test]
fn flipped_reverses_winding() {
    let t = tri();
    let f = t.flipped();
    assert_eq!(f.positions(), [Vec3::Y, Vec3::X, Vec3::ZERO]);
    assert_eq!(f.vertices[0].uv, Vec2::Y);
    assert_eq!(f.flipped(), t);
}

#[test]
fn degenerate_triangle_has_zero_area() {
    let t = Triangle::with_face_normal([Vec3::ONE; 3], [Vec2::ZERO; 3], Vec3::Z);
    assert_eq!(t.area(), 0.0);
}

#[test]
fn cuboid_planes_bound_every_point() {
    let origin = Vec3::new(-1.0, 2.0, 0.5);
    let size = Vec3::new(2.0, 3.0, 4.0);
    let poly = Polyhedron::cuboid(origin, size);

    assert_eq!(poly.points.len(), 8);
    assert_eq!(poly.planes.len(), 6);
    assert_eq!(poly.edges.len(), 12);

    for p in &poly.points {
        for plane in &poly.planes {
            assert!(plane.signed_distance(*p) <= 1e-5);
        }
    }
    assert_eq!(poly.points[7], origin + size);
}

#[test]
fn cuboid_edges_join_adjacent_vertices_on_shared_faces() {
    let poly = Polyhedron::cuboid(Vec3::ZERO, Vec3::ONE);
    for e in &poly.edges {
        let a = poly.points[e.vertex0 as usize];
        let b = poly.points[e.vertex1 as usize];
        assert!(((a - b).length() - 1.0).abs() < 1e-6);
        for face in [e.face0, e.face1] {
            let plane = poly.planes[face as usize];
            assert!(plane.signed_distance(a).abs() < 1e-6);
            assert!(plane.signed_distance(b).abs() < 1e-6);
        }
        assert_ne!(e.face0, e.face1);
    }
}

#[test]
fn fixed_properties_are_appended_last() {
    let e = GameEntity::new("Item", "GemItem", Vec3::ZERO)
        .with_properties(Dictionary::new().with("health", "100"))
        .with_fixed_properties();
    assert_eq!(
        e.properties.iter().collect::<Vec<_>>(),
        vec![("health", "100"), ("static", "1"), ("rotate", "1")]
    );
}

#[test]
fn fixed_properties_do_not_replace_caller_values() {
    let e = GameEntity::new("Item", "GemItem", Vec3::ZERO)
        .with_properties(Dictionary::new().with("static", "0"))
        .with_fixed_properties();
    assert_eq!(e.properties.get_all("static").collect::<Vec<_>>(), vec!["0", "1"]);
}

#[test]
fn trigger_defaults_to_unit_volume() {
    let t = Trigger::new("finish", "InBoundsTrigger", Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(t.volume, Polyhedron::cuboid(Vec3::ZERO, Vec3::ONE));
    assert!(t.properties.is_empty());

    let t: Trigger =
        serde_json::from_str(r#"{"name":"t","datablock":"d","position":[0,0,0]}"#).unwrap();
    assert_eq!(t.volume.points.len(), 8);
}
