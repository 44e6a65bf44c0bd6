//! Parameter definitions with physical units and documented semantics.
//!
//! All magic numbers are extracted here with:
//! - Physical units (meters, seconds, radians)
//! - Documented ranges and meanings
//! - Presets for the two shading variants

mod camera;
mod render;
mod shading;
mod wave;

// Re-export all types
pub use camera::OrbitParams;
pub use render::{FogParams, RenderConfig};
pub use shading::ShadingParams;
pub use wave::{GridParams, NormalMode, WaveBand, WaveParams};
