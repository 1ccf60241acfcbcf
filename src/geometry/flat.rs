//! Direct triangle-to-interior conversion: one surface per triangle, no BSP.

use std::collections::HashMap;

use crate::{
    build::config::BuildConfig,
    foundation::{
        core::{Bounds, PlaneF, Sphere, Vec2, Vec3, Vec4},
        error::{DifError, DifResult},
        math::solve4,
    },
    geometry::{
        accumulator::MaterialGroup,
        capability::InteriorBuilder,
        interior::{Interior, InteriorPlane, Surface, TexGenEq},
    },
    scene::model::Triangle,
};

/// Bundled [`InteriorBuilder`] that welds points, shares planes and derives a texgen
/// equation per triangle.
#[derive(Clone, Debug, Default)]
pub struct FlatInteriorBuilder {
    cfg: BuildConfig,
}

impl FlatInteriorBuilder {
    pub fn new(cfg: BuildConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.cfg
    }

    #[tracing::instrument(skip_all, fields(material = %group.material, triangles = group.triangles.len()))]
    fn build_group(&self, group: &MaterialGroup) -> DifResult<Interior> {
        if group.triangles.is_empty() {
            return Err(DifError::geometry(format!(
                "material '{}' has no triangles",
                group.material
            )));
        }

        let mut points = Welder::new(self.cfg.point_epsilon);
        let mut normals = Welder::new(self.cfg.plane_epsilon);
        let mut planes: Vec<InteriorPlane> = Vec::new();
        let mut plane_lookup: HashMap<(u16, i64), u16> = HashMap::new();
        let mut tex_gens: Vec<TexGenEq> = Vec::new();
        let mut tex_gen_lookup: HashMap<[u32; 8], u32> = HashMap::new();
        let mut windings: Vec<u32> = Vec::with_capacity(group.triangles.len() * 3);
        let mut surfaces: Vec<Surface> = Vec::with_capacity(group.triangles.len());

        let min_area = self.cfg.point_epsilon * self.cfg.point_epsilon;

        for (i, tri) in group.triangles.iter().enumerate() {
            let fail = |why: &str| {
                DifError::geometry(format!(
                    "material '{}' triangle {i}: {why}",
                    group.material
                ))
            };

            if !is_finite(tri) {
                return Err(fail("non-finite vertex data"));
            }
            let [p0, p1, p2] = tri.positions();
            let plane = PlaneF::from_triangle(p0, p1, p2)
                .filter(|_| tri.area() > min_area)
                .ok_or_else(|| fail("degenerate (zero area)"))?;

            let normal_index = normals.insert(plane.normal);
            let normal_index = u16::try_from(normal_index)
                .map_err(|_| fail("more than 65535 distinct normals"))?;
            let plane_key = (normal_index, quantize(plane.distance, self.cfg.plane_epsilon));
            let plane_index = match plane_lookup.get(&plane_key) {
                Some(&idx) => idx,
                None => {
                    let idx = u16::try_from(planes.len())
                        .map_err(|_| fail("more than 65535 distinct planes"))?;
                    planes.push(InteriorPlane {
                        normal_index,
                        distance: plane.distance,
                    });
                    plane_lookup.insert(plane_key, idx);
                    idx
                }
            };

            let eq = tex_gen_for(tri, plane.normal).ok_or_else(|| fail("texture mapping is singular"))?;
            let eq_key = texgen_key(&eq);
            let tex_gen_index = match tex_gen_lookup.get(&eq_key) {
                Some(&idx) => idx,
                None => {
                    let idx = tex_gens.len() as u32;
                    tex_gens.push(eq);
                    tex_gen_lookup.insert(eq_key, idx);
                    idx
                }
            };

            let winding_start = windings.len() as u32;
            for p in [p0, p1, p2] {
                windings.push(points.insert(p) as u32);
            }

            surfaces.push(Surface {
                winding_start,
                winding_count: 3,
                plane_index,
                plane_flipped: false,
                texture_index: 0,
                tex_gen_index,
                flags: Surface::OUTSIDE_VISIBLE,
            });
        }

        let points = points.into_values();
        let normals = normals.into_values();
        let bounds = Bounds::from_points(points.iter())
            .ok_or_else(|| DifError::geometry(format!("material '{}' has no points", group.material)))?;

        tracing::debug!(
            points = points.len(),
            planes = planes.len(),
            surfaces = surfaces.len(),
            "built interior"
        );

        Ok(Interior {
            detail_level: self.cfg.detail_level,
            min_pixels: self.cfg.min_pixels,
            bounds,
            bounding_sphere: Sphere::enclosing(bounds),
            materials: vec![group.material.clone()],
            normals,
            planes,
            point_visibility: vec![0xff; points.len()],
            points,
            tex_gens,
            windings,
            surfaces,
        })
    }
}

impl InteriorBuilder for FlatInteriorBuilder {
    #[tracing::instrument(skip_all, fields(groups = groups.len()))]
    fn build_interiors(&mut self, groups: &[MaterialGroup]) -> DifResult<Vec<Interior>> {
        self.cfg.validate()?;
        groups.iter().map(|g| self.build_group(g)).collect()
    }
}

fn is_finite(tri: &Triangle) -> bool {
    tri.vertices
        .iter()
        .all(|v| v.position.is_finite() && v.uv.is_finite() && v.normal.is_finite())
}

fn quantize(v: f32, eps: f32) -> i64 {
    if eps > 0.0 {
        (f64::from(v) / f64::from(eps)).round() as i64
    } else {
        i64::from(v.to_bits())
    }
}

/// Deduplicates vectors that fall into the same `eps`-sized grid cell.
struct Welder {
    eps: f32,
    values: Vec<Vec3>,
    lookup: HashMap<[i64; 3], usize>,
}

impl Welder {
    fn new(eps: f32) -> Self {
        Self {
            eps,
            values: Vec::new(),
            lookup: HashMap::new(),
        }
    }

    fn insert(&mut self, v: Vec3) -> usize {
        let key = [
            quantize(v.x, self.eps),
            quantize(v.y, self.eps),
            quantize(v.z, self.eps),
        ];
        *self.lookup.entry(key).or_insert_with(|| {
            self.values.push(v);
            self.values.len() - 1
        })
    }

    fn into_values(self) -> Vec<Vec3> {
        self.values
    }
}

/// Affine map reproducing the triangle's UVs at its vertices, with no gradient along the
/// face normal.
fn tex_gen_for(tri: &Triangle, normal: Vec3) -> Option<TexGenEq> {
    let row = |p: Vec3| [f64::from(p.x), f64::from(p.y), f64::from(p.z), 1.0];
    let n = [f64::from(normal.x), f64::from(normal.y), f64::from(normal.z), 0.0];
    let [a, b, c] = tri.vertices;
    let m = [row(a.position), row(b.position), row(c.position), n];

    let solve = |k: fn(Vec2) -> f32| {
        let rhs = [f64::from(k(a.uv)), f64::from(k(b.uv)), f64::from(k(c.uv)), 0.0];
        solve4(m, rhs, 1e-12).map(|x| Vec4::new(x[0] as f32, x[1] as f32, x[2] as f32, x[3] as f32))
    };

    Some(TexGenEq {
        s: solve(|uv| uv.x)?,
        t: solve(|uv| uv.y)?,
    })
}

fn texgen_key(eq: &TexGenEq) -> [u32; 8] {
    let s = eq.s.to_array().map(f32::to_bits);
    let t = eq.t.to_array().map(f32::to_bits);
    [s[0], s[1], s[2], s[3], t[0], t[1], t[2], t[3]]
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/flat.rs"]
mod tests;
