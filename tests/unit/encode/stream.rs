use super::*;

fn bytes_of(f: impl FnOnce(&mut StreamWriter<Vec<u8>>) -> DifResult<()>) -> Vec<u8> {
    let mut w = StreamWriter::new(Vec::new());
    f(&mut w).unwrap();
    w.into_inner()
}

#[test]
fn integers_are_little_endian() {
    let out = bytes_of(|w| {
        w.u32(44)?;
        w.u16(0x0102)?;
        w.i32(-2)?;
        w.bool(true)
    });
    assert_eq!(
        out,
        vec![44, 0, 0, 0, 0x02, 0x01, 0xfe, 0xff, 0xff, 0xff, 1]
    );
}

#[test]
fn vectors_and_quats_write_components_in_order() {
    let out = bytes_of(|w| {
        w.vec3(Vec3::new(1.0, 2.0, 3.0))?;
        w.quat(Quat::IDENTITY)
    });
    let floats: Vec<f32> = out
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect();
    assert_eq!(floats, vec![1.0, 2.0, 3.0, 1.0, 0.0, 0.0, 0.0]);
}

#[test]
fn strings_are_length_prefixed_and_capped() {
    assert_eq!(bytes_of(|w| w.string("abc")), vec![3, b'a', b'b', b'c']);
    assert_eq!(bytes_of(|w| w.string("")), vec![0]);

    let max = "x".repeat(MAX_STRING_LEN);
    assert_eq!(bytes_of(|w| w.string(&max)).len(), 256);

    let mut w = StreamWriter::new(Vec::new());
    let err = w.string(&"x".repeat(256)).unwrap_err();
    assert!(matches!(err, DifError::Validation(_)));
    assert_eq!(w.position(), 0);
}

#[test]
fn dictionary_keeps_duplicates_in_order() {
    let d = Dictionary::new().with("a", "1").with("a", "2");
    let out = bytes_of(|w| w.dictionary(&d));
    assert_eq!(
        out,
        vec![2, 0, 0, 0, 1, b'a', 1, b'1', 1, b'a', 1, b'2']
    );
}

#[test]
fn list_writes_count_then_items() {
    let out = bytes_of(|w| w.list(&[7u8, 9], |w, &b| w.u8(b)));
    assert_eq!(out, vec![2, 0, 0, 0, 7, 9]);
}

#[test]
fn sink_failures_surface_as_io() {
    struct Broken;
    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk gone"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let mut w = StreamWriter::new(Broken);
    let err = w.u32(1).unwrap_err();
    assert!(err.is_io());
}
