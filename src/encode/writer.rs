use std::{io::Write, path::Path};

use crate::{
    encode::{
        layout::{BaselineLayout, Layout, MbgLayout},
        stream::StreamWriter,
        version::{DIF_VERSION, Version},
    },
    foundation::{
        core::InteriorId,
        error::{DifError, DifResult},
    },
    scene::{graph::SceneGraph, model::PathedInterior},
};

/// Marks a game entity section that carries a list.
const GAME_ENTITIES_PRESENT: u32 = 2;

/// Serialize `graph` in the `version` layout into `sink`. Returns the bytes written.
///
/// Output depends only on the graph content and `version`.
#[tracing::instrument(skip(graph, sink), fields(graph = %graph.id()))]
pub fn write_scene<W: Write>(graph: &SceneGraph, version: Version, sink: W) -> DifResult<u64> {
    let mut w = StreamWriter::new(sink);
    match version {
        Version::Baseline => write_graph::<BaselineLayout, W>(graph, &mut w)?,
        Version::Mbg => write_graph::<MbgLayout, W>(graph, &mut w)?,
    }
    let written = w.position();
    w.into_inner().flush()?;
    tracing::debug!(bytes = written, "scene written");
    Ok(written)
}

/// Serialize into a fresh buffer.
pub fn to_bytes(graph: &SceneGraph, version: Version) -> DifResult<Vec<u8>> {
    let mut out = Vec::new();
    write_scene(graph, version, &mut out)?;
    Ok(out)
}

/// Serialize and write a `.dif` file, creating missing parent directories.
///
/// The stream is fully encoded before the file is touched, so encoding errors never
/// leave a partial file behind. IO errors during the write do.
pub fn write_scene_file(graph: &SceneGraph, version: Version, path: impl AsRef<Path>) -> DifResult<()> {
    let path = path.as_ref();
    let bytes = to_bytes(graph, version)?;
    ensure_parent_dir(path)?;
    std::fs::write(path, &bytes).map_err(|source| DifError::WriteFile {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), %version, "wrote dif");
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> DifResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| DifError::WriteFile {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

fn write_graph<L: Layout, W: Write>(graph: &SceneGraph, w: &mut StreamWriter<W>) -> DifResult<()> {
    w.u32(DIF_VERSION)?;
    // no preview bitmap
    w.bool(false)?;

    let statics: Vec<_> = graph.static_interiors().map(|(_, itr)| itr).collect();
    tracing::debug!(count = statics.len(), "static interiors");
    w.list(&statics, |w, itr| L::write_interior(w, itr))?;

    // Each moving interior is written once, in the order pathed interiors first claim it.
    let mut pathed_geometry: Vec<InteriorId> = Vec::new();
    for p in graph.pathed_interiors() {
        if !pathed_geometry.contains(&p.interior) {
            pathed_geometry.push(p.interior);
        }
    }
    tracing::debug!(
        geometry = pathed_geometry.len(),
        followers = graph.pathed_interiors().len(),
        "pathed interiors"
    );
    w.list(&pathed_geometry, |w, id| {
        let itr = graph
            .interior(*id)
            .ok_or_else(|| DifError::dangling(format!("{id} is not owned by {}", graph.id())))?;
        L::write_interior(w, itr)
    })?;
    w.list(graph.pathed_interiors(), |w, p| {
        let index = pathed_geometry
            .iter()
            .position(|id| *id == p.interior)
            .ok_or_else(|| DifError::dangling(format!("{} has no geometry", p.name)))?;
        write_follower(w, p, index)
    })?;

    tracing::debug!(count = graph.triggers().len(), "triggers");
    w.list(graph.triggers(), |w, t| L::write_trigger(w, t))?;

    // force fields, AI special nodes, vehicle collision
    for _ in 0..3 {
        w.u32(0)?;
    }

    let entities = graph.game_entities();
    tracing::debug!(count = entities.len(), "game entities");
    if entities.is_empty() {
        w.u32(0)?;
    } else {
        w.u32(GAME_ENTITIES_PRESENT)?;
        w.list(entities, |w, e| L::write_game_entity(w, e))?;
    }
    w.u32(0)
}

fn write_follower<W: Write>(w: &mut StreamWriter<W>, p: &PathedInterior, index: usize) -> DifResult<()> {
    w.string(&p.name)?;
    w.string(&p.datablock)?;
    w.count(index)?;
    w.vec3(p.offset)?;
    w.dictionary(&p.properties)?;
    // trigger ids
    w.u32(0)?;
    w.list(p.markers.as_slice(), |w, m| {
        w.vec3(m.position)?;
        w.quat(m.rotation)?;
        w.u32(m.ms_to_next)?;
        w.u32(m.smoothing.as_u32())?;
        w.i32(m.initial_path_position)
    })?;
    w.u32(p.markers.total_ms())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/writer.rs"]
mod tests;
