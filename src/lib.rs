//! Deterministic, tileable 3D noise volumes for volumetric cloud rendering.
//!
//! Combines hash-based value noise, tileable Worley noise and multi-octave
//! gradient noise into layered Perlin-Worley density fields, packs them into
//! RGBA8 volume buffers and emits each volume as a 2D tile-atlas PNG that a
//! renderer un-tiles back into a 3D texture.
//!
//! The whole pipeline is a one-shot batch computation: allocate, populate,
//! serialize, drop. Identical configurations produce byte-identical output.

pub mod atlas;
pub mod config;
mod error;
pub mod noise;
pub mod textures;
pub mod volume;

pub use atlas::Atlas;
pub use config::{BaseShapeConfig, ErosionConfig};
pub use error::Error;
pub use textures::{VolumePair, base_shape, erosion};
pub use volume::Volume;
