use crate::{
    foundation::error::DifResult,
    geometry::{accumulator::MaterialGroup, interior::Interior},
};

/// Geometry step that turns material-grouped triangles into interiors.
///
/// Contract: on success the result holds exactly one interior per group, in group order.
/// Unbuildable input is reported as [`DifError::GeometryBuild`](crate::DifError::GeometryBuild).
pub trait InteriorBuilder {
    fn build_interiors(&mut self, groups: &[MaterialGroup]) -> DifResult<Vec<Interior>>;
}

impl<F> InteriorBuilder for F
where
    F: FnMut(&[MaterialGroup]) -> DifResult<Vec<Interior>>,
{
    fn build_interiors(&mut self, groups: &[MaterialGroup]) -> DifResult<Vec<Interior>> {
        self(groups)
    }
}
