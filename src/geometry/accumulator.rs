use std::collections::HashMap;

use crate::scene::model::Triangle;

/// Triangles sharing one material, in insertion order.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialGroup {
    pub material: String,
    pub triangles: Vec<Triangle>,
}

/// Collects triangles keyed by material name.
///
/// Groups are kept in first-seen material order. Nothing is validated here: degenerate or
/// oddly wound triangles are passed on verbatim to the geometry step.
#[derive(Clone, Debug, Default)]
pub struct GeometryAccumulator {
    groups: Vec<MaterialGroup>,
    by_material: HashMap<String, usize>,
}

impl GeometryAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `triangle` to the group of `material`, creating the group on first use.
    pub fn add_triangle(&mut self, triangle: Triangle, material: &str) {
        let idx = match self.by_material.get(material) {
            Some(&idx) => idx,
            None => {
                let idx = self.groups.len();
                self.groups.push(MaterialGroup {
                    material: material.to_owned(),
                    triangles: Vec::new(),
                });
                self.by_material.insert(material.to_owned(), idx);
                idx
            }
        };
        self.groups[idx].triangles.push(triangle);
    }

    /// Append `triangle` followed by its reversed-winding twin.
    pub fn add_double_sided(&mut self, triangle: Triangle, material: &str) {
        self.add_triangle(triangle, material);
        self.add_triangle(triangle.flipped(), material);
    }

    pub fn groups(&self) -> &[MaterialGroup] {
        &self.groups
    }

    pub fn triangle_count(&self) -> usize {
        self.groups.iter().map(|g| g.triangles.len()).sum()
    }

    pub fn material_count(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Move every group out, leaving the accumulator empty.
    pub fn take_groups(&mut self) -> Vec<MaterialGroup> {
        self.by_material.clear();
        std::mem::take(&mut self.groups)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/accumulator.rs"]
mod tests;
