//! JSON scene description consumed by the `difbuild` binary.

use crate::{
    build::{builder::SceneBuilder, config::BuildConfig},
    foundation::{
        core::Vec3,
        error::{DifError, DifResult},
    },
    scene::{
        dictionary::Dictionary,
        graph::{PathedOptions, SceneGraph},
        marker::Marker,
        model::{GameEntity, Triangle, Trigger, Vertex},
    },
};

/// Triangle tagged with the material it is drawn with.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MaterialTriangle {
    pub material: String,
    pub vertices: [Vertex; 3],
}

impl MaterialTriangle {
    pub fn triangle(&self) -> Triangle {
        Triangle::new(self.vertices)
    }
}

/// Moving sub-scene: its own triangles, built separately, then driven by `markers`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathedDocument {
    pub name: Option<String>,
    pub datablock: Option<String>,
    pub offset: Vec3,
    pub properties: Dictionary,
    pub triangles: Vec<MaterialTriangle>,
    pub markers: Vec<Marker>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneDocument {
    pub triangles: Vec<MaterialTriangle>,
    /// Reverse the winding of every triangle.
    pub flip: bool,
    /// Export every triangle from both sides.
    pub double_sided: bool,
    pub pathed: Vec<PathedDocument>,
    pub triggers: Vec<Trigger>,
    pub entities: Vec<GameEntity>,
}

impl SceneDocument {
    pub fn from_json_str(s: &str) -> DifResult<Self> {
        serde_json::from_str(s).map_err(|e| DifError::validation(format!("invalid scene document: {e}")))
    }

    /// Build the document into a scene graph.
    ///
    /// Every pathed entry is built by its own builder first; each interior that build
    /// yields is attached to the main scene with the entry's markers.
    #[tracing::instrument(
        skip_all,
        fields(triangles = self.triangles.len(), pathed = self.pathed.len())
    )]
    pub fn build(&self, cfg: &BuildConfig) -> DifResult<SceneGraph> {
        let mut builder = SceneBuilder::with_config(cfg.clone())?;
        self.add_triangles(&mut builder, &self.triangles)?;
        self.add_placed(&mut builder, cfg)?;
        builder.build()
    }

    /// Build the document into one or more scene graphs, honouring
    /// [`BuildConfig::max_triangles`].
    ///
    /// The first scene carries pathed interiors, triggers and entities; the rest carry
    /// static geometry only. Without a cap this is a single [`Self::build`].
    #[tracing::instrument(skip_all, fields(max_triangles = ?cfg.max_triangles))]
    pub fn build_split(&self, cfg: &BuildConfig) -> DifResult<Vec<SceneGraph>> {
        let Some(max) = cfg.max_triangles else {
            return Ok(vec![self.build(cfg)?]);
        };

        let mut graphs = Vec::new();
        for (i, part) in self.parts(max).into_iter().enumerate() {
            let mut builder = SceneBuilder::with_config(cfg.clone())?;
            self.add_triangles(&mut builder, part)?;
            if i == 0 {
                self.add_placed(&mut builder, cfg)?;
            }
            graphs.push(builder.build()?);
        }
        tracing::info!(scenes = graphs.len(), "document split");
        Ok(graphs)
    }

    /// Source triangles per scene. A part is closed before the next source triangle
    /// once its emitted count exceeds `max`.
    fn parts(&self, max: usize) -> Vec<&[MaterialTriangle]> {
        let per_source = if self.double_sided { 2 } else { 1 };
        let mut parts = Vec::new();
        let mut start = 0;
        let mut emitted = 0;
        for i in 0..self.triangles.len() {
            if emitted > max {
                parts.push(&self.triangles[start..i]);
                start = i;
                emitted = 0;
            }
            emitted += per_source;
        }
        parts.push(&self.triangles[start..]);
        parts
    }

    fn add_placed(&self, builder: &mut SceneBuilder, cfg: &BuildConfig) -> DifResult<()> {
        for (i, p) in self.pathed.iter().enumerate() {
            if p.triangles.is_empty() {
                return Err(DifError::validation(format!("pathed entry {i} has no triangles")));
            }
            let mut sub = SceneBuilder::with_config(cfg.clone())?;
            self.add_triangles(&mut sub, &p.triangles)?;
            let source = sub.build()?;
            tracing::debug!(entry = i, interiors = source.interiors().len(), "pathed geometry built");

            for id in source.interior_ids() {
                let opts = PathedOptions {
                    name: p.name.clone(),
                    datablock: p.datablock.clone(),
                    offset: p.offset,
                    properties: p.properties.clone(),
                };
                builder.add_pathed_interior_with(&source, id, &p.markers, opts)?;
            }
        }

        for t in &self.triggers {
            builder.add_trigger(t.clone())?;
        }
        for e in &self.entities {
            builder.add_game_entity(e.clone())?;
        }
        Ok(())
    }

    fn add_triangles(&self, builder: &mut SceneBuilder, tris: &[MaterialTriangle]) -> DifResult<()> {
        for t in tris {
            let tri = t.triangle();
            let (front, back) = if self.flip {
                (tri.flipped(), tri)
            } else {
                (tri, tri.flipped())
            };
            builder.add_triangle(front, &t.material)?;
            if self.double_sided {
                builder.add_triangle(back, &t.material)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/document.rs"]
mod tests;
