use crate::foundation::error::{DifError, DifResult};

/// Tunables for the geometry step and for pathed-interior records.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Points closer than this (per axis grid cell) are welded into one.
    pub point_epsilon: f32,
    /// Normals and plane distances closer than this are shared.
    pub plane_epsilon: f32,
    /// Detail level written into every interior.
    pub detail_level: u32,
    /// Minimum on-screen pixel size before the engine drops the detail level.
    pub min_pixels: u32,
    /// Object name given to pathed interiors.
    pub pathed_name: String,
    /// Datablock given to pathed interiors.
    pub pathed_datablock: String,
    /// Start a new scene once more than this many triangles went into the current one.
    /// Only scene documents split; `None` keeps everything in one scene.
    pub max_triangles: Option<usize>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            point_epsilon: 1e-6,
            plane_epsilon: 1e-5,
            detail_level: 0,
            min_pixels: 250,
            pathed_name: "MustChange".to_owned(),
            pathed_datablock: "PathedDefault".to_owned(),
            max_triangles: None,
        }
    }
}

impl BuildConfig {
    pub fn validate(&self) -> DifResult<()> {
        for (name, v) in [
            ("point_epsilon", self.point_epsilon),
            ("plane_epsilon", self.plane_epsilon),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(DifError::validation(format!(
                    "{name} must be finite and >= 0 (got {v})"
                )));
            }
        }
        for (name, v) in [
            ("pathed_name", &self.pathed_name),
            ("pathed_datablock", &self.pathed_datablock),
        ] {
            if v.len() > usize::from(u8::MAX) {
                return Err(DifError::validation(format!(
                    "{name} is {} bytes, the format allows 255",
                    v.len()
                )));
            }
        }
        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> DifResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| DifError::validation(format!("invalid build config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/build/config.rs"]
mod tests;
