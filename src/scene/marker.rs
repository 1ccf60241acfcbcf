use crate::foundation::core::{Quat, Vec3};

/// Interpolation used between a marker and the next one.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Smoothing {
    /// Straight-line motion.
    #[default]
    Linear,
    /// Catmull-Rom style spline through neighbouring markers.
    Spline,
    /// Ease in/out between markers.
    Accelerate,
}

impl Smoothing {
    /// Wire value of the smoothing type.
    pub fn as_u32(self) -> u32 {
        match self {
            Self::Linear => 0,
            Self::Spline => 1,
            Self::Accelerate => 2,
        }
    }
}

/// One timed waypoint of a moving interior.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Marker {
    /// Waypoint position.
    pub position: Vec3,
    /// Orientation at the waypoint.
    #[serde(default = "identity_rotation")]
    pub rotation: Quat,
    /// Travel time to the next marker. On the last marker it only matters for looping paths.
    pub ms_to_next: u32,
    /// Interpolation towards the next marker.
    #[serde(default)]
    pub smoothing: Smoothing,
    /// Path position the interior starts at.
    #[serde(default)]
    pub initial_path_position: i32,
}

fn identity_rotation() -> Quat {
    Quat::IDENTITY
}

impl Marker {
    /// Linear marker with identity rotation.
    pub fn new(position: Vec3, ms_to_next: u32) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            ms_to_next,
            smoothing: Smoothing::Linear,
            initial_path_position: 0,
        }
    }

    pub fn with_smoothing(mut self, smoothing: Smoothing) -> Self {
        self.smoothing = smoothing;
        self
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_initial_path_position(mut self, pos: i32) -> Self {
        self.initial_path_position = pos;
        self
    }
}

/// Ordered marker list of one pathed interior.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct MarkerSequence {
    markers: Vec<Marker>,
}

impl MarkerSequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a marker at the end of the path.
    pub fn push(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    /// Markers in path order.
    pub fn as_slice(&self) -> &[Marker] {
        &self.markers
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Marker> {
        self.markers.iter()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Sum of every `ms_to_next`, saturating at `u32::MAX`.
    pub fn total_ms(&self) -> u32 {
        self.markers
            .iter()
            .fold(0u32, |acc, m| acc.saturating_add(m.ms_to_next))
    }
}

impl From<&[Marker]> for MarkerSequence {
    fn from(markers: &[Marker]) -> Self {
        Self {
            markers: markers.to_vec(),
        }
    }
}

impl From<Vec<Marker>> for MarkerSequence {
    fn from(markers: Vec<Marker>) -> Self {
        Self { markers }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/marker.rs"]
mod tests;
