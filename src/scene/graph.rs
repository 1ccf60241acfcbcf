use crate::{
    foundation::{
        core::{GraphId, InteriorId, Vec3},
        error::{DifError, DifResult},
    },
    geometry::interior::Interior,
    scene::{
        dictionary::Dictionary,
        marker::{Marker, MarkerSequence},
        model::{GameEntity, PathedInterior, Trigger},
    },
};

/// Optional overrides for a pathed interior's record.
///
/// Unset name and datablock fall back to the defaults the graph was built with.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathedOptions {
    pub name: Option<String>,
    pub datablock: Option<String>,
    pub offset: Vec3,
    pub properties: Dictionary,
}

impl PathedOptions {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_datablock(mut self, datablock: impl Into<String>) -> Self {
        self.datablock = Some(datablock.into());
        self
    }

    pub fn with_offset(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_properties(mut self, properties: Dictionary) -> Self {
        self.properties = properties;
        self
    }
}

/// Built scene: an arena of interiors plus everything placed around them.
///
/// Interiors are addressed through [`InteriorId`] handles that carry this graph's
/// [`GraphId`]; a handle from another graph is never resolved here.
#[derive(Clone, Debug)]
pub struct SceneGraph {
    id: GraphId,
    interiors: Vec<Interior>,
    pathed_interiors: Vec<PathedInterior>,
    triggers: Vec<Trigger>,
    game_entities: Vec<GameEntity>,
    pathed_name: String,
    pathed_datablock: String,
}

impl SceneGraph {
    pub(crate) fn new(pathed_name: String, pathed_datablock: String) -> Self {
        Self {
            id: GraphId::next(),
            interiors: Vec::new(),
            pathed_interiors: Vec::new(),
            triggers: Vec::new(),
            game_entities: Vec::new(),
            pathed_name,
            pathed_datablock,
        }
    }

    pub fn id(&self) -> GraphId {
        self.id
    }

    /// All interiors in arena order.
    pub fn interiors(&self) -> &[Interior] {
        &self.interiors
    }

    pub fn interior(&self, id: InteriorId) -> Option<&Interior> {
        if id.graph != self.id {
            return None;
        }
        self.interiors.get(id.index as usize)
    }

    pub fn contains(&self, id: InteriorId) -> bool {
        self.interior(id).is_some()
    }

    /// Handles for every interior in arena order.
    pub fn interior_ids(&self) -> impl Iterator<Item = InteriorId> + '_ {
        (0..self.interiors.len() as u32).map(|i| InteriorId::new(self.id, i))
    }

    /// Interiors no pathed interior refers to, in arena order.
    pub fn static_interiors(&self) -> impl Iterator<Item = (InteriorId, &Interior)> + '_ {
        self.interior_ids()
            .zip(&self.interiors)
            .filter(|(id, _)| !self.is_pathed_geometry(*id))
    }

    /// `true` when at least one pathed interior moves this interior.
    pub fn is_pathed_geometry(&self, id: InteriorId) -> bool {
        self.pathed_interiors.iter().any(|p| p.interior == id)
    }

    pub fn pathed_interiors(&self) -> &[PathedInterior] {
        &self.pathed_interiors
    }

    pub fn triggers(&self) -> &[Trigger] {
        &self.triggers
    }

    pub fn game_entities(&self) -> &[GameEntity] {
        &self.game_entities
    }

    pub fn add_trigger(&mut self, trigger: Trigger) {
        self.triggers.push(trigger);
    }

    /// Append an entity after applying the fixed placement policy.
    pub fn add_game_entity(&mut self, entity: GameEntity) {
        self.game_entities.push(entity.with_fixed_properties());
    }

    /// Make one of this graph's interiors move along `markers`.
    ///
    /// Fails with [`DifError::DanglingInteriorReference`] if `interior` is not owned by
    /// this graph; the graph is left untouched in that case.
    pub fn add_pathed_interior(&mut self, interior: InteriorId, markers: &[Marker]) -> DifResult<()> {
        self.add_pathed_interior_with(interior, markers, PathedOptions::default())
    }

    pub fn add_pathed_interior_with(
        &mut self,
        interior: InteriorId,
        markers: &[Marker],
        opts: PathedOptions,
    ) -> DifResult<()> {
        if !self.contains(interior) {
            return Err(DifError::dangling(format!(
                "{interior} is not owned by {}",
                self.id
            )));
        }
        self.push_pathed(interior, MarkerSequence::from(markers), opts);
        Ok(())
    }

    pub(crate) fn push_interior(&mut self, interior: Interior) -> InteriorId {
        let id = InteriorId::new(self.id, self.interiors.len() as u32);
        self.interiors.push(interior);
        id
    }

    pub(crate) fn push_pathed(&mut self, interior: InteriorId, markers: MarkerSequence, opts: PathedOptions) {
        let PathedOptions {
            name,
            datablock,
            offset,
            properties,
        } = opts;
        self.pathed_interiors.push(PathedInterior {
            name: name.unwrap_or_else(|| self.pathed_name.clone()),
            datablock: datablock.unwrap_or_else(|| self.pathed_datablock.clone()),
            interior,
            offset,
            properties,
            markers,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/graph.rs"]
mod tests;
