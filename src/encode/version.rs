use std::str::FromStr;

use crate::foundation::error::DifError;

/// DIF container version written at the head of every stream.
pub const DIF_VERSION: u32 = 44;

/// Target binary layout.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Version {
    /// Stock engine layout.
    #[default]
    Baseline,
    /// Marble Blast Gold layout.
    Mbg,
}

impl Version {
    pub const ALL: [Version; 2] = [Version::Baseline, Version::Mbg];

    pub fn name(self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::Mbg => "mbg",
        }
    }
}

impl FromStr for Version {
    type Err = DifError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "baseline" | "tge" => Ok(Self::Baseline),
            "mbg" => Ok(Self::Mbg),
            other => Err(DifError::invalid_version(format!(
                "'{other}' (expected baseline, tge or mbg)"
            ))),
        }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/version.rs"]
mod tests;
