//! Seaglass library - stylized procedural water surface

pub mod camera;
pub mod cli;
pub mod clock;
pub mod error;
pub mod params;
pub mod rendering;
pub mod shading;
pub mod wave;
