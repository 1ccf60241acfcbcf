use std::io::Write;

use crate::{
    encode::{version::Version, writer::write_scene},
    foundation::{error::DifResult, math::Fnv1a64},
    scene::graph::SceneGraph,
};

/// 128-bit content hash of a serialized stream, from two independently seeded FNV-1a
/// passes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StreamFingerprint {
    pub hi: u64,
    pub lo: u64,
}

impl std::fmt::Display for StreamFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

pub fn fingerprint_bytes(bytes: &[u8]) -> StreamFingerprint {
    let mut sink = HashSink::new();
    sink.write_pair(bytes);
    sink.finish()
}

/// Fingerprint of `graph` serialized as `version`, without buffering the stream.
///
/// Equal to `fingerprint_bytes(&to_bytes(graph, version)?)`.
pub fn fingerprint_scene(graph: &SceneGraph, version: Version) -> DifResult<StreamFingerprint> {
    let mut sink = HashSink::new();
    write_scene(graph, version, &mut sink)?;
    Ok(sink.finish())
}

struct HashSink {
    a: Fnv1a64,
    b: Fnv1a64,
    len: u64,
}

impl HashSink {
    fn new() -> Self {
        Self {
            a: Fnv1a64::new(Fnv1a64::OFFSET_BASIS),
            b: Fnv1a64::new(Fnv1a64::ALT_BASIS),
            len: 0,
        }
    }

    fn write_pair(&mut self, bytes: &[u8]) {
        self.a.write_bytes(bytes);
        self.b.write_bytes(bytes);
        self.len += bytes.len() as u64;
    }

    /// Folds the total length in last so a stream and its zero-padded twin differ.
    fn finish(mut self) -> StreamFingerprint {
        self.a.write_u64(self.len);
        self.b.write_u64(self.len);
        StreamFingerprint {
            hi: self.a.finish(),
            lo: self.b.finish(),
        }
    }
}

impl Write for HashSink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.write_pair(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/fingerprint.rs"]
mod tests;
