//! Builds interior scene geometry and writes it as DIF binary streams.
//!
//! The flow is:
//!
//! - Feed triangles, triggers, game entities and pathed interiors into a [`SceneBuilder`]
//! - [`SceneBuilder::build`] runs the geometry step and returns a [`SceneGraph`]
//! - Serialize the graph with [`write_scene`], [`to_bytes`] or [`write_scene_file`] for a
//!   chosen [`Version`]
#![forbid(unsafe_code)]

pub mod build;
pub mod encode;
pub mod foundation;
pub mod geometry;
pub mod scene;
pub mod source;

pub use crate::build::builder::{BuilderState, SceneBuilder};
pub use crate::build::config::BuildConfig;
pub use crate::encode::fingerprint::{StreamFingerprint, fingerprint_bytes, fingerprint_scene};
pub use crate::encode::version::{DIF_VERSION, Version};
pub use crate::encode::writer::{to_bytes, write_scene, write_scene_file};
pub use crate::foundation::core::{Bounds, GraphId, InteriorId, PlaneF, Quat, Sphere, Vec2, Vec3, Vec4};
pub use crate::foundation::error::{DifError, DifResult};
pub use crate::geometry::accumulator::{GeometryAccumulator, MaterialGroup};
pub use crate::geometry::capability::InteriorBuilder;
pub use crate::geometry::flat::FlatInteriorBuilder;
pub use crate::geometry::interior::Interior;
pub use crate::scene::dictionary::Dictionary;
pub use crate::scene::graph::{PathedOptions, SceneGraph};
pub use crate::scene::marker::{Marker, MarkerSequence, Smoothing};
pub use crate::scene::model::{
    ENTITY_FIXED_PROPERTIES, GameEntity, PathedInterior, Polyhedron, PolyhedronEdge, Trigger,
    Triangle, Vertex,
};
pub use crate::source::document::SceneDocument;
