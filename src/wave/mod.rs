//! Procedural water surface: displacement function, grid mesh and the
//! per-frame field update.

pub mod displacement;
mod mesh;
mod system;

// Re-export public types
pub use mesh::{Vertex, WaveGrid};
pub use system::WaveField;
