//! DIF binary serialization.
//!
//! [`writer`] walks a scene graph in section order; the per-version differences live in
//! [`layout`] and are selected once from a [`version::Version`].

pub mod fingerprint;
pub mod layout;
/// Little-endian primitive writer.
pub mod stream;
pub mod version;
pub mod writer;
