use crate::foundation::{
    core::{Bounds, Sphere, Vec3, Vec4},
    error::{DifError, DifResult},
};

/// Static-geometry result of the geometry step for one triangle set.
///
/// The scene graph holds and forwards interiors without looking inside; only the
/// serializer layouts read these fields.
#[derive(Clone, Debug, PartialEq)]
pub struct Interior {
    pub detail_level: u32,
    pub min_pixels: u32,
    pub bounds: Bounds,
    pub bounding_sphere: Sphere,
    /// Texture names referenced by `Surface::texture_index`.
    pub materials: Vec<String>,
    pub normals: Vec<Vec3>,
    pub planes: Vec<InteriorPlane>,
    pub points: Vec<Vec3>,
    /// One visibility byte per point.
    pub point_visibility: Vec<u8>,
    pub tex_gens: Vec<TexGenEq>,
    /// Point indices; surfaces address contiguous runs of this list.
    pub windings: Vec<u32>,
    pub surfaces: Vec<Surface>,
}

/// Plane stored as an index into `Interior::normals` plus a distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteriorPlane {
    pub normal_index: u16,
    pub distance: f32,
}

/// Texture coordinate generation: `u = dot(s.xyz, p) + s.w`, `v = dot(t.xyz, p) + t.w`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TexGenEq {
    pub s: Vec4,
    pub t: Vec4,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    pub winding_start: u32,
    pub winding_count: u32,
    pub plane_index: u16,
    /// Surface faces opposite to its plane's normal.
    pub plane_flipped: bool,
    pub texture_index: u16,
    pub tex_gen_index: u32,
    pub flags: u8,
}

impl Surface {
    /// Visible from outside the interior.
    pub const OUTSIDE_VISIBLE: u8 = 0b1_0000;
}

impl Interior {
    /// Check that every index points inside its target list.
    ///
    /// Interiors come from an external capability, so layouts call this before writing.
    pub fn validate(&self) -> DifResult<()> {
        if self.point_visibility.len() != self.points.len() {
            return Err(DifError::validation(format!(
                "interior has {} points but {} visibility entries",
                self.points.len(),
                self.point_visibility.len()
            )));
        }
        if let Some(i) = self.points.iter().position(|&p| !self.bounds.contains(p)) {
            return Err(DifError::validation(format!(
                "point {i} lies outside the interior bounds"
            )));
        }
        for plane in &self.planes {
            if usize::from(plane.normal_index) >= self.normals.len() {
                return Err(DifError::validation(format!(
                    "plane references normal {} of {}",
                    plane.normal_index,
                    self.normals.len()
                )));
            }
        }
        if let Some(&bad) = self
            .windings
            .iter()
            .find(|&&i| i as usize >= self.points.len())
        {
            return Err(DifError::validation(format!(
                "winding references point {bad} of {}",
                self.points.len()
            )));
        }
        for (i, s) in self.surfaces.iter().enumerate() {
            let end = u64::from(s.winding_start) + u64::from(s.winding_count);
            if end > self.windings.len() as u64 {
                return Err(DifError::validation(format!(
                    "surface {i} winding run ends at {end}, past {}",
                    self.windings.len()
                )));
            }
            if usize::from(s.plane_index) >= self.planes.len() {
                return Err(DifError::validation(format!(
                    "surface {i} references plane {}",
                    s.plane_index
                )));
            }
            if usize::from(s.texture_index) >= self.materials.len() {
                return Err(DifError::validation(format!(
                    "surface {i} references material {}",
                    s.texture_index
                )));
            }
            if s.tex_gen_index as usize >= self.tex_gens.len() {
                return Err(DifError::validation(format!(
                    "surface {i} references texgen {}",
                    s.tex_gen_index
                )));
            }
        }
        Ok(())
    }

    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/interior.rs"]
mod tests;
