use super::*;

const DOC: &str = r#"{
    "triangles": [
        {"material": "grass", "vertices": [
            {"position": [0, 0, 0], "uv": [0, 0], "normal": [0, 0, 1]},
            {"position": [1, 0, 0], "uv": [1, 0], "normal": [0, 0, 1]},
            {"position": [0, 1, 0], "uv": [0, 1], "normal": [0, 0, 1]}
        ]}
    ],
    "pathed": [{
        "name": "Lift",
        "triangles": [
            {"material": "metal", "vertices": [
                {"position": [0, 0, 5], "uv": [0, 0], "normal": [0, 0, 1]},
                {"position": [1, 0, 5], "uv": [1, 0], "normal": [0, 0, 1]},
                {"position": [0, 1, 5], "uv": [0, 1], "normal": [0, 0, 1]}
            ]}
        ],
        "markers": [
            {"position": [0, 0, 0], "ms_to_next": 1000},
            {"position": [0, 0, 10], "ms_to_next": 1000, "smoothing": "spline"}
        ]
    }],
    "triggers": [{"name": "Goal", "datablock": "FinishTrigger", "position": [1, 1, 0]}],
    "entities": [{
        "game_class": "Item",
        "datablock": "GemItem",
        "position": [0, 0, 1],
        "properties": [["health", "100"]]
    }]
}"#;

#[test]
fn document_builds_every_section() {
    let doc = SceneDocument::from_json_str(DOC).unwrap();
    let g = doc.build(&BuildConfig::default()).unwrap();

    assert_eq!(g.interiors().len(), 2);
    assert_eq!(g.static_interiors().count(), 1);

    let p = &g.pathed_interiors()[0];
    assert_eq!(p.name, "Lift");
    assert_eq!(p.datablock, "PathedDefault");
    assert_eq!(p.markers.len(), 2);
    assert_eq!(p.markers.as_slice()[1].smoothing, crate::scene::marker::Smoothing::Spline);

    assert_eq!(g.triggers()[0].volume, crate::scene::model::Polyhedron::default());
    let props: Vec<_> = g.game_entities()[0].properties.iter().collect();
    assert_eq!(props, vec![("health", "100"), ("static", "1"), ("rotate", "1")]);
}

#[test]
fn double_sided_documents_emit_both_faces() {
    let mut doc = SceneDocument::from_json_str(DOC).unwrap();
    doc.pathed.clear();
    doc.double_sided = true;
    let g = doc.build(&BuildConfig::default()).unwrap();
    assert_eq!(g.interiors()[0].surfaces.len(), 2);
}

#[test]
fn empty_document_is_valid() {
    let doc = SceneDocument::from_json_str("{}").unwrap();
    let g = doc.build(&BuildConfig::default()).unwrap();
    assert!(g.interiors().is_empty());
}

#[test]
fn malformed_documents_are_validation_errors() {
    assert!(matches!(
        SceneDocument::from_json_str(r#"{"triangles": 3}"#),
        Err(DifError::Validation(_))
    ));
    assert!(matches!(
        SceneDocument::from_json_str(r#"{"lights": []}"#),
        Err(DifError::Validation(_))
    ));

    let doc = SceneDocument {
        pathed: vec![PathedDocument::default()],
        ..SceneDocument::default()
    };
    assert!(matches!(
        doc.build(&BuildConfig::default()),
        Err(DifError::Validation(_))
    ));
}

fn emitted(doc: &SceneDocument) -> Vec<Triangle> {
    let mut b = SceneBuilder::new();
    doc.add_triangles(&mut b, &doc.triangles).unwrap();
    b.accumulator().groups()[0].triangles.clone()
}

#[test]
fn flip_reverses_winding() {
    let mut doc = SceneDocument::from_json_str(DOC).unwrap();
    let original = doc.triangles[0].triangle();

    doc.flip = true;
    assert_eq!(emitted(&doc), vec![original.flipped()]);

    doc.double_sided = true;
    assert_eq!(emitted(&doc), vec![original.flipped(), original]);

    doc.flip = false;
    assert_eq!(emitted(&doc), vec![original, original.flipped()]);
}

#[test]
fn flip_is_read_from_json() {
    let doc = SceneDocument::from_json_str(r#"{"flip": true, "double_sided": true}"#).unwrap();
    assert!(doc.flip);
    assert!(doc.double_sided);
}

fn numbered(n: usize) -> Vec<MaterialTriangle> {
    let base = SceneDocument::from_json_str(DOC).unwrap().triangles[0].clone();
    (0..n)
        .map(|i| MaterialTriangle {
            material: format!("m{i}"),
            ..base.clone()
        })
        .collect()
}

#[test]
fn triangle_cap_splits_into_several_scenes() {
    let mut doc = SceneDocument::from_json_str(DOC).unwrap();
    doc.triangles = numbered(5);
    let cfg = BuildConfig {
        max_triangles: Some(1),
        ..BuildConfig::default()
    };

    // a part closes once it holds more than the cap
    let sizes: Vec<_> = doc.parts(1).iter().map(|p| p.len()).collect();
    assert_eq!(sizes, vec![2, 2, 1]);

    let graphs = doc.build_split(&cfg).unwrap();
    assert_eq!(graphs.len(), 3);
    assert_eq!(graphs[0].static_interiors().count(), 2);
    assert_eq!(graphs[0].pathed_interiors().len(), 1);
    assert_eq!(graphs[0].triggers().len(), 1);
    assert_eq!(graphs[0].game_entities().len(), 1);
    for g in &graphs[1..] {
        assert!(g.pathed_interiors().is_empty());
        assert!(g.triggers().is_empty());
        assert!(g.game_entities().is_empty());
    }
    let materials: Vec<_> = graphs[2].interiors().iter().map(|i| i.materials[0].clone()).collect();
    assert_eq!(materials, vec!["m4".to_string()]);
}

#[test]
fn double_sided_counts_twice_against_the_cap() {
    let doc = SceneDocument {
        triangles: numbered(4),
        double_sided: true,
        ..SceneDocument::default()
    };
    let sizes: Vec<_> = doc.parts(2).iter().map(|p| p.len()).collect();
    assert_eq!(sizes, vec![2, 2]);
}

#[test]
fn no_cap_builds_one_scene() {
    let doc = SceneDocument::from_json_str(DOC).unwrap();
    let graphs = doc.build_split(&BuildConfig::default()).unwrap();
    assert_eq!(graphs.len(), 1);
    assert_eq!(graphs[0].interiors().len(), 2);
}
