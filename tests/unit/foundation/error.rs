use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        DifError::geometry("x")
            .to_string()
            .contains("geometry build error:")
    );
    assert!(
        DifError::dangling("x")
            .to_string()
            .contains("dangling interior reference:")
    );
    assert!(
        DifError::invalid_version("x")
            .to_string()
            .contains("invalid version:")
    );
    assert!(
        DifError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(DifError::AlreadyBuilt.to_string().contains("already been built"));
}

#[test]
fn write_file_names_the_path() {
    let err = DifError::WriteFile {
        path: PathBuf::from("out/level.dif"),
        source: std::io::Error::other("disk full"),
    };
    let msg = err.to_string();
    assert!(msg.contains("out/level.dif"));
    assert!(msg.contains("disk full"));
    assert!(err.is_io());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = DifError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
    assert!(!err.is_io());
}
