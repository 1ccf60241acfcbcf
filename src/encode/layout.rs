use std::io::Write;

use crate::{
    encode::{stream::StreamWriter, version::Version},
    foundation::error::{DifError, DifResult},
    geometry::interior::{Interior, Surface},
    scene::model::{GameEntity, Polyhedron, Trigger},
};

/// Material list sub-version shared by every layout.
pub const MATERIAL_LIST_VERSION: u8 = 1;

/// Set on a serialized plane index when the surface faces away from its plane.
const PLANE_FLIPPED_BIT: u16 = 0x8000;

/// Per-version record encoding.
///
/// Records shared by every version are provided methods; the required methods are the
/// places where versions disagree.
pub trait Layout {
    const VERSION: Version;
    /// Leads every interior record. Readers take 0 as the MBG surface layout and any
    /// other value as the stock one.
    const INTERIOR_FORMAT_VERSION: u32;

    fn write_surface<W: Write>(w: &mut StreamWriter<W>, surface: &Surface) -> DifResult<()>;

    /// Everything of a trigger between its datablock and its volume.
    fn write_trigger_extras<W: Write>(w: &mut StreamWriter<W>, trigger: &Trigger) -> DifResult<()>;

    fn write_interior<W: Write>(w: &mut StreamWriter<W>, itr: &Interior) -> DifResult<()> {
        itr.validate()?;

        w.u32(Self::INTERIOR_FORMAT_VERSION)?;
        w.u32(itr.detail_level)?;
        w.u32(itr.min_pixels)?;
        w.vec3(itr.bounds.min)?;
        w.vec3(itr.bounds.max)?;
        w.vec3(itr.bounding_sphere.origin)?;
        w.f32(itr.bounding_sphere.radius)?;

        w.list(&itr.normals, |w, n| w.vec3(*n))?;
        w.list(&itr.planes, |w, p| {
            w.u16(p.normal_index)?;
            w.f32(p.distance)
        })?;
        w.list(&itr.points, |w, p| w.vec3(*p))?;
        w.list(&itr.point_visibility, |w, v| w.u8(*v))?;
        w.list(&itr.tex_gens, |w, eq| {
            for c in eq.s.to_array().into_iter().chain(eq.t.to_array()) {
                w.f32(c)?;
            }
            Ok(())
        })?;

        w.u8(MATERIAL_LIST_VERSION)?;
        w.list(&itr.materials, |w, m| w.string(m))?;

        w.list(&itr.windings, |w, i| w.u32(*i))?;
        w.list(&itr.surfaces, |w, s| Self::write_surface(w, s))
    }

    fn write_trigger<W: Write>(w: &mut StreamWriter<W>, trigger: &Trigger) -> DifResult<()> {
        w.string(&trigger.name)?;
        w.string(&trigger.datablock)?;
        Self::write_trigger_extras(w, trigger)?;
        write_polyhedron(w, &trigger.volume)?;
        w.vec3(trigger.position)
    }

    fn write_game_entity<W: Write>(w: &mut StreamWriter<W>, entity: &GameEntity) -> DifResult<()> {
        w.string(&entity.datablock)?;
        w.string(&entity.game_class)?;
        w.vec3(entity.position)?;
        w.dictionary(&entity.properties)
    }
}

/// Stock engine layout: 32-bit winding counts, triggers without properties.
#[derive(Clone, Copy, Debug)]
pub struct BaselineLayout;

impl Layout for BaselineLayout {
    const VERSION: Version = Version::Baseline;
    const INTERIOR_FORMAT_VERSION: u32 = 1;

    fn write_surface<W: Write>(w: &mut StreamWriter<W>, surface: &Surface) -> DifResult<()> {
        write_surface_with(w, surface, |w, n| w.u32(n))
    }

    fn write_trigger_extras<W: Write>(_: &mut StreamWriter<W>, _: &Trigger) -> DifResult<()> {
        Ok(())
    }
}

/// MBG layout: 8-bit winding counts, triggers carry their properties.
#[derive(Clone, Copy, Debug)]
pub struct MbgLayout;

impl Layout for MbgLayout {
    const VERSION: Version = Version::Mbg;
    const INTERIOR_FORMAT_VERSION: u32 = 0;

    fn write_surface<W: Write>(w: &mut StreamWriter<W>, surface: &Surface) -> DifResult<()> {
        write_surface_with(w, surface, |w, n| {
            let n = u8::try_from(n).map_err(|_| {
                DifError::validation(format!("winding count {n} exceeds 255 for the mbg layout"))
            })?;
            w.u8(n)
        })
    }

    fn write_trigger_extras<W: Write>(w: &mut StreamWriter<W>, trigger: &Trigger) -> DifResult<()> {
        w.dictionary(&trigger.properties)
    }
}

fn write_surface_with<W: Write>(
    w: &mut StreamWriter<W>,
    s: &Surface,
    winding_count: impl FnOnce(&mut StreamWriter<W>, u32) -> DifResult<()>,
) -> DifResult<()> {
    if s.plane_index & PLANE_FLIPPED_BIT != 0 {
        return Err(DifError::validation(format!(
            "plane index {} does not fit in 15 bits",
            s.plane_index
        )));
    }
    let plane = if s.plane_flipped {
        s.plane_index | PLANE_FLIPPED_BIT
    } else {
        s.plane_index
    };

    w.u32(s.winding_start)?;
    winding_count(w, s.winding_count)?;
    w.u16(plane)?;
    w.u16(s.texture_index)?;
    w.u32(s.tex_gen_index)?;
    w.u8(s.flags)
}

fn write_polyhedron<W: Write>(w: &mut StreamWriter<W>, p: &Polyhedron) -> DifResult<()> {
    w.list(&p.points, |w, pt| w.vec3(*pt))?;
    w.list(&p.planes, |w, pl| {
        w.vec3(pl.normal)?;
        w.f32(pl.distance)
    })?;
    w.list(&p.edges, |w, e| {
        w.u32(e.face0)?;
        w.u32(e.face1)?;
        w.u32(e.vertex0)?;
        w.u32(e.vertex1)
    })
}

#[cfg(test)]
#[path = "../../tests/unit/encode/layout.rs"]
mod tests;
