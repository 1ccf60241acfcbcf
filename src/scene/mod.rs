//! Scene model: property dictionaries, marker paths, placed objects and the built graph.

pub mod dictionary;
/// Scene graph produced by `SceneBuilder::build`.
pub mod graph;
pub mod marker;
pub mod model;
