use std::sync::atomic::{AtomicU64, Ordering};

pub use glam::{Quat, Vec2, Vec3, Vec4};

/// Identity of one built [`SceneGraph`](crate::SceneGraph).
///
/// Ids are drawn from a process-wide counter so handles from different graphs never alias.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct GraphId(u64);

impl GraphId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric id.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for GraphId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "graph#{}", self.0)
    }
}

/// Non-owning handle to an interior stored in a scene graph's arena.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct InteriorId {
    pub(crate) graph: GraphId,
    pub(crate) index: u32,
}

impl InteriorId {
    pub(crate) fn new(graph: GraphId, index: u32) -> Self {
        Self { graph, index }
    }

    /// Graph that owns the interior.
    pub fn graph(self) -> GraphId {
        self.graph
    }

    /// Slot in the owning graph's arena.
    pub fn index(self) -> u32 {
        self.index
    }
}

impl std::fmt::Display for InteriorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "interior {} of {}", self.index, self.graph)
    }
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Bounds {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Bounds {
    /// Inverted box that any point union will replace.
    pub fn empty() -> Self {
        Self {
            min: Vec3::splat(f32::INFINITY),
            max: Vec3::splat(f32::NEG_INFINITY),
        }
    }

    /// Smallest box containing every point; `None` when `points` is empty.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Vec3>) -> Option<Self> {
        let mut b = Self::empty();
        let mut any = false;
        for p in points {
            b = b.union_point(*p);
            any = true;
        }
        any.then_some(b)
    }

    /// Grow the box to include `p`.
    pub fn union_point(self, p: Vec3) -> Self {
        Self {
            min: self.min.min(p),
            max: self.max.max(p),
        }
    }

    /// Box center.
    pub fn center(self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Edge lengths along each axis.
    pub fn extent(self) -> Vec3 {
        self.max - self.min
    }

    /// Inclusive containment test.
    pub fn contains(self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }
}

/// Bounding sphere.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Sphere {
    /// Sphere center.
    pub origin: Vec3,
    /// Sphere radius.
    pub radius: f32,
}

impl Sphere {
    /// Sphere centered on the box that touches its corners.
    pub fn enclosing(bounds: Bounds) -> Self {
        Self {
            origin: bounds.center(),
            radius: bounds.extent().length() * 0.5,
        }
    }
}

/// Plane in `dot(normal, p) + distance = 0` form.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlaneF {
    /// Unit normal.
    pub normal: Vec3,
    /// Signed distance term.
    pub distance: f32,
}

impl PlaneF {
    /// Plane through a triangle, facing the side implied by its winding.
    ///
    /// Returns `None` for zero-area or non-finite input.
    pub fn from_triangle(v0: Vec3, v1: Vec3, v2: Vec3) -> Option<Self> {
        let normal = (v2 - v0).cross(v1 - v0).try_normalize()?;
        let centroid = (v0 + v1 + v2) / 3.0;
        Some(Self {
            normal,
            distance: -centroid.dot(normal),
        })
    }

    /// Signed distance from `p` to the plane.
    pub fn signed_distance(self, p: Vec3) -> f32 {
        self.normal.dot(p) + self.distance
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
