use crate::{
    build::config::BuildConfig,
    foundation::{
        core::InteriorId,
        error::{DifError, DifResult},
    },
    geometry::{
        accumulator::GeometryAccumulator, capability::InteriorBuilder, flat::FlatInteriorBuilder,
        interior::Interior,
    },
    scene::{
        graph::{PathedOptions, SceneGraph},
        marker::{Marker, MarkerSequence},
        model::{GameEntity, Trigger, Triangle},
    },
};

/// Lifecycle of a [`SceneBuilder`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuilderState {
    /// Nothing added yet.
    Empty,
    /// At least one triangle or auxiliary object is pending.
    Accumulating,
    /// `build()` succeeded; the builder accepts nothing further.
    Built,
}

struct PendingPathed {
    interior: Interior,
    markers: MarkerSequence,
    opts: PathedOptions,
}

/// Collects triangles and auxiliary objects, then builds one [`SceneGraph`].
///
/// A builder builds at most once. After a successful `build()` every mutating call
/// returns [`DifError::AlreadyBuilt`]; triggers, entities and pathed interiors are then
/// attached on the returned graph instead.
pub struct SceneBuilder {
    state: BuilderState,
    cfg: BuildConfig,
    geometry: Box<dyn InteriorBuilder>,
    accumulator: GeometryAccumulator,
    triggers: Vec<Trigger>,
    game_entities: Vec<GameEntity>,
    pathed: Vec<PendingPathed>,
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SceneBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneBuilder")
            .field("state", &self.state)
            .field("triangles", &self.accumulator.triangle_count())
            .field("materials", &self.accumulator.material_count())
            .field("triggers", &self.triggers.len())
            .field("game_entities", &self.game_entities.len())
            .field("pathed", &self.pathed.len())
            .finish_non_exhaustive()
    }
}

impl SceneBuilder {
    /// Builder using [`FlatInteriorBuilder`] and the default config.
    pub fn new() -> Self {
        let cfg = BuildConfig::default();
        Self::from_parts(cfg.clone(), Box::new(FlatInteriorBuilder::new(cfg)))
    }

    pub fn with_config(cfg: BuildConfig) -> DifResult<Self> {
        cfg.validate()?;
        Ok(Self::from_parts(
            cfg.clone(),
            Box::new(FlatInteriorBuilder::new(cfg)),
        ))
    }

    /// Replace the geometry step. The config still supplies pathed-interior defaults.
    pub fn with_geometry(mut self, geometry: impl InteriorBuilder + 'static) -> Self {
        self.geometry = Box::new(geometry);
        self
    }

    fn from_parts(cfg: BuildConfig, geometry: Box<dyn InteriorBuilder>) -> Self {
        Self {
            state: BuilderState::Empty,
            cfg,
            geometry,
            accumulator: GeometryAccumulator::new(),
            triggers: Vec::new(),
            game_entities: Vec::new(),
            pathed: Vec::new(),
        }
    }

    pub fn state(&self) -> BuilderState {
        self.state
    }

    pub fn config(&self) -> &BuildConfig {
        &self.cfg
    }

    /// Triangles grouped so far.
    pub fn accumulator(&self) -> &GeometryAccumulator {
        &self.accumulator
    }

    fn accept(&mut self) -> DifResult<()> {
        match self.state {
            BuilderState::Built => Err(DifError::AlreadyBuilt),
            BuilderState::Empty | BuilderState::Accumulating => {
                self.state = BuilderState::Accumulating;
                Ok(())
            }
        }
    }

    pub fn add_triangle(&mut self, triangle: Triangle, material: &str) -> DifResult<()> {
        self.accept()?;
        self.accumulator.add_triangle(triangle, material);
        Ok(())
    }

    /// Add `triangle` and its reverse-wound twin so the face is visible from both sides.
    pub fn add_double_sided(&mut self, triangle: Triangle, material: &str) -> DifResult<()> {
        self.accept()?;
        self.accumulator.add_double_sided(triangle, material);
        Ok(())
    }

    pub fn add_trigger(&mut self, trigger: Trigger) -> DifResult<()> {
        self.accept()?;
        self.triggers.push(trigger);
        Ok(())
    }

    /// Queue an entity. The fixed placement properties are appended when it lands in
    /// the graph.
    pub fn add_game_entity(&mut self, entity: GameEntity) -> DifResult<()> {
        self.accept()?;
        self.game_entities.push(entity);
        Ok(())
    }

    /// Queue a moving copy of `interior`, taken from the previously built `source`.
    ///
    /// On [`DifError::DanglingInteriorReference`] nothing is queued and the state is
    /// unchanged.
    pub fn add_pathed_interior(
        &mut self,
        source: &SceneGraph,
        interior: InteriorId,
        markers: &[Marker],
    ) -> DifResult<()> {
        self.add_pathed_interior_with(source, interior, markers, PathedOptions::default())
    }

    pub fn add_pathed_interior_with(
        &mut self,
        source: &SceneGraph,
        interior: InteriorId,
        markers: &[Marker],
        opts: PathedOptions,
    ) -> DifResult<()> {
        if self.state == BuilderState::Built {
            return Err(DifError::AlreadyBuilt);
        }
        let interior = source.interior(interior).cloned().ok_or_else(|| {
            DifError::dangling(format!("{interior} is not owned by {}", source.id()))
        })?;
        self.accept()?;
        self.pathed.push(PendingPathed {
            interior,
            markers: MarkerSequence::from(markers),
            opts,
        });
        Ok(())
    }

    /// Run the geometry step and move everything pending into a fresh graph.
    ///
    /// Interiors come out in first-seen material order, followed by the geometry of
    /// queued pathed interiors. If the geometry step fails the builder keeps its
    /// content and can be built again.
    #[tracing::instrument(
        skip_all,
        fields(
            triangles = self.accumulator.triangle_count(),
            materials = self.accumulator.material_count()
        )
    )]
    pub fn build(&mut self) -> DifResult<SceneGraph> {
        if self.state == BuilderState::Built {
            return Err(DifError::AlreadyBuilt);
        }

        let groups = self.accumulator.groups();
        let interiors = self.geometry.build_interiors(groups)?;
        if interiors.len() != groups.len() {
            return Err(DifError::geometry(format!(
                "expected one interior per material group ({}), got {}",
                groups.len(),
                interiors.len()
            )));
        }
        for (group, itr) in groups.iter().zip(&interiors) {
            itr.validate().map_err(|e| {
                DifError::geometry(format!("interior for material '{}': {e}", group.material))
            })?;
            tracing::debug!(
                material = %group.material,
                surfaces = itr.surface_count(),
                points = itr.point_count(),
                "material group built"
            );
        }

        let mut graph = SceneGraph::new(
            self.cfg.pathed_name.clone(),
            self.cfg.pathed_datablock.clone(),
        );
        for itr in interiors {
            graph.push_interior(itr);
        }
        for PendingPathed {
            interior,
            markers,
            opts,
        } in std::mem::take(&mut self.pathed)
        {
            let id = graph.push_interior(interior);
            graph.push_pathed(id, markers, opts);
        }
        for trigger in std::mem::take(&mut self.triggers) {
            graph.add_trigger(trigger);
        }
        for entity in std::mem::take(&mut self.game_entities) {
            graph.add_game_entity(entity);
        }
        self.accumulator.take_groups();
        self.state = BuilderState::Built;

        tracing::info!(
            graph = %graph.id(),
            interiors = graph.interiors().len(),
            surfaces = graph.interiors().iter().map(Interior::surface_count).sum::<usize>(),
            points = graph.interiors().iter().map(Interior::point_count).sum::<usize>(),
            pathed = graph.pathed_interiors().len(),
            triggers = graph.triggers().len(),
            game_entities = graph.game_entities().len(),
            "scene built"
        );
        Ok(graph)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/build/builder.rs"]
mod tests;
