use super::*;

#[test]
fn duplicate_keys_are_preserved_in_order() {
    let mut d = Dictionary::new();
    d.insert("team", "red");
    d.insert("team", "blue");

    assert_eq!(d.len(), 2);
    assert_eq!(
        d.iter().collect::<Vec<_>>(),
        vec![("team", "red"), ("team", "blue")]
    );
    assert_eq!(d.get("team"), Some("red"));
    assert_eq!(d.get_all("team").collect::<Vec<_>>(), vec!["red", "blue"]);
}

#[test]
fn missing_key_is_none() {
    let d = Dictionary::new().with("health", "100");
    assert_eq!(d.get("armor"), None);
    assert_eq!(d.get_all("armor").count(), 0);
    assert!(!d.is_empty());
    assert!(Dictionary::new().is_empty());
}

#[test]
fn collect_and_extend_append() {
    let mut d: Dictionary = [("a", "1"), ("b", "2")].into_iter().collect();
    d.extend([("a", "3")]);
    assert_eq!(
        d.iter().collect::<Vec<_>>(),
        vec![("a", "1"), ("b", "2"), ("a", "3")]
    );
}

#[test]
fn json_is_an_ordered_pair_list() {
    let d = Dictionary::new().with("team", "red").with("team", "blue");
    let s = serde_json::to_string(&d).unwrap();
    assert_eq!(s, r#"[["team","red"],["team","blue"]]"#);
    let de: Dictionary = serde_json::from_str(&s).unwrap();
    assert_eq!(de, d);
}
