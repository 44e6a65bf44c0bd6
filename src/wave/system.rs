//! High-level wave field combining the grid with its wave parameters.

use super::displacement;
use super::mesh::WaveGrid;
use crate::params::{GridParams, WaveParams};

/// Wave field renderer core: one grid, one fixed parameter set
pub struct WaveField {
    pub grid: WaveGrid,
    params: WaveParams,
}

impl WaveField {
    /// Create a wave field with a flat grid (call `update` before drawing)
    pub fn new(grid_params: &GridParams, params: WaveParams) -> Self {
        let grid = WaveGrid::new(grid_params);
        log::debug!(
            "wave grid: {} vertices, {} triangles, spacing {:.3}m, {:?} normals",
            grid.vertices.len(),
            grid.indices.len() / 3,
            grid.spacing(),
            grid.normal_mode()
        );
        Self { grid, params }
    }

    /// Recompute elevation and normals of every vertex for time `time_s`
    pub fn update(&mut self, time_s: f32) {
        self.grid.displace(time_s, &self.params);
    }

    /// Elevation at an arbitrary planar point (meters)
    pub fn sample(&self, x: f32, y: f32, time_s: f32) -> f32 {
        displacement::elevation(x, y, time_s, &self.params)
    }
}
