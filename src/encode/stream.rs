//! Little-endian primitive writer shared by every layout.

use std::io::Write;

use crate::{
    foundation::{
        core::{Quat, Vec2, Vec3},
        error::{DifError, DifResult},
    },
    scene::dictionary::Dictionary,
};

/// Longest string a u8 length prefix can describe.
pub const MAX_STRING_LEN: usize = u8::MAX as usize;

pub struct StreamWriter<W: Write> {
    inner: W,
    written: u64,
}

impl<W: Write> StreamWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    /// Bytes written so far.
    pub fn position(&self) -> u64 {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    pub fn bytes(&mut self, b: &[u8]) -> DifResult<()> {
        self.inner.write_all(b)?;
        self.written += b.len() as u64;
        Ok(())
    }

    pub fn u8(&mut self, v: u8) -> DifResult<()> {
        self.bytes(&[v])
    }

    pub fn bool(&mut self, v: bool) -> DifResult<()> {
        self.u8(u8::from(v))
    }

    pub fn u16(&mut self, v: u16) -> DifResult<()> {
        self.bytes(&v.to_le_bytes())
    }

    pub fn u32(&mut self, v: u32) -> DifResult<()> {
        self.bytes(&v.to_le_bytes())
    }

    pub fn i32(&mut self, v: i32) -> DifResult<()> {
        self.bytes(&v.to_le_bytes())
    }

    pub fn f32(&mut self, v: f32) -> DifResult<()> {
        self.bytes(&v.to_le_bytes())
    }

    pub fn vec2(&mut self, v: Vec2) -> DifResult<()> {
        self.f32(v.x)?;
        self.f32(v.y)
    }

    pub fn vec3(&mut self, v: Vec3) -> DifResult<()> {
        self.f32(v.x)?;
        self.f32(v.y)?;
        self.f32(v.z)
    }

    /// Quaternion as `w, x, y, z`.
    pub fn quat(&mut self, q: Quat) -> DifResult<()> {
        self.f32(q.w)?;
        self.f32(q.x)?;
        self.f32(q.y)?;
        self.f32(q.z)
    }

    /// u8 length prefix followed by the UTF-8 bytes.
    pub fn string(&mut self, s: &str) -> DifResult<()> {
        let len = u8::try_from(s.len()).map_err(|_| {
            DifError::validation(format!(
                "string of {} bytes exceeds {MAX_STRING_LEN}: '{}...'",
                s.len(),
                s.chars().take(16).collect::<String>()
            ))
        })?;
        self.u8(len)?;
        self.bytes(s.as_bytes())
    }

    /// u32 element count.
    pub fn count(&mut self, n: usize) -> DifResult<()> {
        let n = u32::try_from(n)
            .map_err(|_| DifError::validation(format!("count {n} does not fit in u32")))?;
        self.u32(n)
    }

    /// Count followed by each element, in slice order.
    pub fn list<T>(
        &mut self,
        items: &[T],
        mut each: impl FnMut(&mut Self, &T) -> DifResult<()>,
    ) -> DifResult<()> {
        self.count(items.len())?;
        for item in items {
            each(self, item)?;
        }
        Ok(())
    }

    /// Pair count followed by key/value strings in insertion order.
    pub fn dictionary(&mut self, d: &Dictionary) -> DifResult<()> {
        self.count(d.len())?;
        for (k, v) in d.iter() {
            self.string(k)?;
            self.string(v)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/stream.rs"]
mod tests;
