use crate::{
    foundation::core::{InteriorId, PlaneF, Vec2, Vec3},
    scene::{dictionary::Dictionary, marker::MarkerSequence},
};

/// Properties every game entity receives, appended after the caller's own.
pub const ENTITY_FIXED_PROPERTIES: [(&str, &str); 2] = [("static", "1"), ("rotate", "1")];

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Vertex {
    pub position: Vec3,
    pub uv: Vec2,
    pub normal: Vec3,
}

impl Vertex {
    pub fn new(position: Vec3, uv: Vec2, normal: Vec3) -> Self {
        Self {
            position,
            uv,
            normal,
        }
    }
}

/// Three vertices in caller winding order.
///
/// Winding is kept verbatim; the geometry step derives face orientation from it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
}

impl Triangle {
    pub fn new(vertices: [Vertex; 3]) -> Self {
        Self { vertices }
    }

    /// Triangle whose three vertices share one face normal.
    pub fn with_face_normal(positions: [Vec3; 3], uvs: [Vec2; 3], normal: Vec3) -> Self {
        Self {
            vertices: [
                Vertex::new(positions[0], uvs[0], normal),
                Vertex::new(positions[1], uvs[1], normal),
                Vertex::new(positions[2], uvs[2], normal),
            ],
        }
    }

    /// Same vertices in reverse winding (p3, p2, p1).
    pub fn flipped(self) -> Self {
        let [a, b, c] = self.vertices;
        Self {
            vertices: [c, b, a],
        }
    }

    pub fn positions(&self) -> [Vec3; 3] {
        self.vertices.map(|v| v.position)
    }

    /// Half the cross-product magnitude; zero for degenerate input.
    pub fn area(&self) -> f32 {
        let [a, b, c] = self.positions();
        (b - a).cross(c - a).length() * 0.5
    }
}

/// Edge of a convex polyhedron: two faces meeting along two vertices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PolyhedronEdge {
    pub face0: u32,
    pub face1: u32,
    pub vertex0: u32,
    pub vertex1: u32,
}

/// Convex trigger volume.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Polyhedron {
    pub points: Vec<Vec3>,
    pub planes: Vec<PlaneF>,
    pub edges: Vec<PolyhedronEdge>,
}

impl Polyhedron {
    /// Box spanning `origin .. origin + size` with outward-facing planes.
    ///
    /// Point `i` sits at `origin + size * (i & 1, (i >> 1) & 1, (i >> 2) & 1)`.
    pub fn cuboid(origin: Vec3, size: Vec3) -> Self {
        let points = (0..8u32)
            .map(|i| {
                origin
                    + size
                        * Vec3::new(
                            (i & 1) as f32,
                            ((i >> 1) & 1) as f32,
                            ((i >> 2) & 1) as f32,
                        )
            })
            .collect::<Vec<_>>();

        let max = origin + size;
        // -X, +X, -Y, +Y, -Z, +Z
        let planes = vec![
            PlaneF {
                normal: Vec3::NEG_X,
                distance: origin.x,
            },
            PlaneF {
                normal: Vec3::X,
                distance: -max.x,
            },
            PlaneF {
                normal: Vec3::NEG_Y,
                distance: origin.y,
            },
            PlaneF {
                normal: Vec3::Y,
                distance: -max.y,
            },
            PlaneF {
                normal: Vec3::NEG_Z,
                distance: origin.z,
            },
            PlaneF {
                normal: Vec3::Z,
                distance: -max.z,
            },
        ];

        // Every edge varies along exactly one axis; its two faces are the fixed
        // sides on the remaining two axes.
        let mut edges = Vec::with_capacity(12);
        for axis in 0..3u32 {
            let bit = 1u32 << axis;
            let others = [(axis + 1) % 3, (axis + 2) % 3];
            for v0 in (0..8u32).filter(|v| v & bit == 0) {
                let face = |a: u32| a * 2 + ((v0 >> a) & 1);
                edges.push(PolyhedronEdge {
                    face0: face(others[0]),
                    face1: face(others[1]),
                    vertex0: v0,
                    vertex1: v0 | bit,
                });
            }
        }

        Self {
            points,
            planes,
            edges,
        }
    }
}

impl Default for Polyhedron {
    /// Unit box at the trigger origin.
    fn default() -> Self {
        Self::cuboid(Vec3::ZERO, Vec3::ONE)
    }
}

/// Named volume used for runtime event detection.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Trigger {
    pub name: String,
    pub datablock: String,
    pub position: Vec3,
    #[serde(default)]
    pub properties: Dictionary,
    #[serde(default)]
    pub volume: Polyhedron,
}

impl Trigger {
    pub fn new(name: impl Into<String>, datablock: impl Into<String>, position: Vec3) -> Self {
        Self {
            name: name.into(),
            datablock: datablock.into(),
            position,
            properties: Dictionary::new(),
            volume: Polyhedron::default(),
        }
    }

    pub fn with_properties(mut self, properties: Dictionary) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_volume(mut self, volume: Polyhedron) -> Self {
        self.volume = volume;
        self
    }
}

/// Placed object instance.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GameEntity {
    pub game_class: String,
    pub datablock: String,
    pub position: Vec3,
    #[serde(default)]
    pub properties: Dictionary,
}

impl GameEntity {
    pub fn new(game_class: impl Into<String>, datablock: impl Into<String>, position: Vec3) -> Self {
        Self {
            game_class: game_class.into(),
            datablock: datablock.into(),
            position,
            properties: Dictionary::new(),
        }
    }

    pub fn with_properties(mut self, properties: Dictionary) -> Self {
        self.properties = properties;
        self
    }

    /// Apply the fixed placement policy: append [`ENTITY_FIXED_PROPERTIES`] after the
    /// caller's properties. Existing pairs with the same keys are kept.
    pub(crate) fn with_fixed_properties(mut self) -> Self {
        self.properties.extend(ENTITY_FIXED_PROPERTIES);
        self
    }
}

/// Interior moving along a marker path.
#[derive(Clone, Debug, PartialEq)]
pub struct PathedInterior {
    pub name: String,
    pub datablock: String,
    /// Geometry in the owning graph's arena.
    pub interior: InteriorId,
    pub offset: Vec3,
    pub properties: Dictionary,
    pub markers: MarkerSequence,
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
