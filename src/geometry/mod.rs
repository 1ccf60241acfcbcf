//! Triangle grouping and the geometry step that turns groups into interiors.

pub mod accumulator;
/// Pluggable geometry step.
pub mod capability;
/// Bundled geometry step.
pub mod flat;
pub mod interior;
