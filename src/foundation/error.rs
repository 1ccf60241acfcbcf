use std::path::PathBuf;

/// Convenience result type used across the crate.
pub type DifResult<T> = Result<T, DifError>;

/// Error type for scene building and DIF serialization.
#[derive(thiserror::Error, Debug)]
pub enum DifError {
    /// The geometry capability rejected the accumulated triangles.
    #[error("geometry build error: {0}")]
    GeometryBuild(String),

    /// A pathed interior referenced an interior that no built scene graph owns.
    #[error("dangling interior reference: {0}")]
    DanglingInteriorReference(String),

    /// `build()` or a pre-build operation was invoked on a builder that already built.
    #[error("scene builder has already been built")]
    AlreadyBuilt,

    /// The requested format version is not one this crate can write.
    #[error("invalid version: {0}")]
    InvalidVersion(String),

    /// Input or configuration value outside of what the format can carry.
    #[error("validation error: {0}")]
    Validation(String),

    /// Writing the output file failed.
    #[error("failed to write '{}': {source}", path.display())]
    WriteFile {
        /// Destination path.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// Writing to a caller-provided sink failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other failure.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DifError {
    /// Build a [`DifError::GeometryBuild`] error.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::GeometryBuild(msg.into())
    }

    /// Build a [`DifError::DanglingInteriorReference`] error.
    pub fn dangling(msg: impl Into<String>) -> Self {
        Self::DanglingInteriorReference(msg.into())
    }

    /// Build a [`DifError::InvalidVersion`] error.
    pub fn invalid_version(msg: impl Into<String>) -> Self {
        Self::InvalidVersion(msg.into())
    }

    /// Build a [`DifError::Validation`] error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Return `true` for either IO variant.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_) | Self::WriteFile { .. })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
