//! Planar wave grid with per-frame displacement and normal recomputation.

use bytemuck::{Pod, Zeroable};

use super::displacement;
use crate::params::{GridParams, NormalMode, WaveParams};

/// Vertex data for the water mesh (world position + surface normal)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Square grid spanning the water domain
///
/// Topology and planar coordinates are fixed at construction; only the
/// height and normal of each vertex change from frame to frame.
pub struct WaveGrid {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    /// Planar (x, y) of every vertex, planar y stored as world Z
    base_xy: Vec<[f32; 2]>,
    segments: usize,
    spacing: f32,
    normal_mode: NormalMode,
}

impl WaveGrid {
    /// Create a flat grid centred on the origin
    pub fn new(params: &GridParams) -> Self {
        let segments = params.segments.max(1);
        let size_m = params.effective_size_m();
        if size_m != params.size_m {
            log::warn!("grid size {} is not a positive length, using {}m", params.size_m, size_m);
        }
        let spacing = params.spacing_m();
        let half_size = size_m / 2.0;
        let side = segments + 1;

        let mut vertices = Vec::with_capacity(side * side);
        let mut base_xy = Vec::with_capacity(side * side);

        // Generate flat XZ plane grid
        for iy in 0..side {
            for ix in 0..side {
                let x_pos = ix as f32 * spacing - half_size;
                let y_pos = iy as f32 * spacing - half_size;

                base_xy.push([x_pos, y_pos]);
                vertices.push(Vertex {
                    position: [x_pos, 0.0, y_pos],
                    normal: [0.0, 1.0, 0.0],
                });
            }
        }

        // Counter-clockwise winding seen from above
        let mut indices = Vec::with_capacity(segments * segments * 6);
        for iy in 0..segments {
            for ix in 0..segments {
                let top_left = (iy * side + ix) as u32;
                let top_right = top_left + 1;
                let bottom_left = ((iy + 1) * side + ix) as u32;
                let bottom_right = bottom_left + 1;

                indices.extend_from_slice(&[
                    top_left,
                    bottom_left,
                    top_right,
                    top_right,
                    bottom_left,
                    bottom_right,
                ]);
            }
        }

        Self {
            vertices,
            indices,
            base_xy,
            segments,
            spacing,
            normal_mode: params.normal_mode,
        }
    }

    /// Vertices per side
    pub fn side(&self) -> usize {
        self.segments + 1
    }

    /// Distance between neighbouring vertices (meters)
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn normal_mode(&self) -> NormalMode {
        self.normal_mode
    }

    /// Index of the vertex at grid column `ix`, row `iy`
    pub fn vertex_index(&self, ix: usize, iy: usize) -> usize {
        iy * self.side() + ix
    }

    /// Undisplaced planar coordinates of vertex `i`
    pub fn base_xy(&self, i: usize) -> [f32; 2] {
        self.base_xy[i]
    }

    /// Re-evaluate every vertex for time `t_s`
    ///
    /// Each vertex is recomputed from its planar coordinates alone, so the
    /// result never depends on earlier frames.
    pub fn displace(&mut self, t_s: f32, params: &WaveParams) {
        for (vertex, &[x, y]) in self.vertices.iter_mut().zip(&self.base_xy) {
            vertex.position = [x, displacement::elevation(x, y, t_s, params), y];
        }

        match self.normal_mode {
            NormalMode::Analytic => {
                for (vertex, &[x, y]) in self.vertices.iter_mut().zip(&self.base_xy) {
                    vertex.normal = displacement::analytic_normal(x, y, t_s, params).to_array();
                }
            }
            NormalMode::FiniteDifference => self.recompute_grid_normals(),
        }
    }

    /// Normals from central differences of neighbouring heights
    ///
    /// Border vertices fall back to one-sided differences.
    fn recompute_grid_normals(&mut self) {
        let side = self.side();
        let height = |vertices: &[Vertex], ix: usize, iy: usize| vertices[iy * side + ix].position[1];

        for iy in 0..side {
            for ix in 0..side {
                let (x0, x1) = (ix.saturating_sub(1), (ix + 1).min(side - 1));
                let (y0, y1) = (iy.saturating_sub(1), (iy + 1).min(side - 1));

                let hx = (height(&self.vertices, x1, iy) - height(&self.vertices, x0, iy))
                    / ((x1 - x0) as f32 * self.spacing);
                let hy = (height(&self.vertices, ix, y1) - height(&self.vertices, ix, y0))
                    / ((y1 - y0) as f32 * self.spacing);

                self.vertices[iy * side + ix].normal =
                    displacement::normal_from_slopes(hx, hy).to_array();
            }
        }
    }

    /// Largest |height| currently in the mesh
    #[cfg(test)]
    fn max_abs_height(&self) -> f32 {
        self.vertices
            .iter()
            .map(|v| v.position[1].abs())
            .fold(0.0, f32::max)
    }

    /// Geometric normal of triangle `tri` (unit length)
    #[cfg(test)]
    fn face_normal(&self, tri: usize) -> glam::Vec3 {
        use glam::Vec3;

        let i = &self.indices[tri * 3..tri * 3 + 3];
        let v0 = Vec3::from_array(self.vertices[i[0] as usize].position);
        let v1 = Vec3::from_array(self.vertices[i[1] as usize].position);
        let v2 = Vec3::from_array(self.vertices[i[2] as usize].position);
        (v1 - v0).cross(v2 - v0).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn small_grid(normal_mode: NormalMode) -> WaveGrid {
        WaveGrid::new(&GridParams {
            size_m: 50.0,
            segments: 16,
            normal_mode,
        })
    }

    #[test]
    fn test_grid_creation() {
        let params = GridParams::default();
        let grid = WaveGrid::new(&params);

        // (segments + 1)^2 vertices
        assert_eq!(grid.vertices.len(), (params.segments + 1).pow(2));

        // segments^2 quads * 2 triangles * 3 indices
        assert_eq!(grid.indices.len(), params.segments.pow(2) * 6);

        let max_index = *grid.indices.iter().max().unwrap() as usize;
        assert_eq!(max_index, grid.vertices.len() - 1);
    }

    #[test]
    fn test_grid_spans_domain() {
        let grid = small_grid(NormalMode::Analytic);
        let first = grid.base_xy(0);
        let last = grid.base_xy(grid.vertices.len() - 1);
        assert_eq!(first, [-25.0, -25.0]);
        assert!((last[0] - 25.0).abs() < 1e-4);
        assert!((last[1] - 25.0).abs() < 1e-4);
        assert_eq!(grid.base_xy(grid.vertex_index(1, 0))[0], -25.0 + grid.spacing());
    }

    #[test]
    fn test_flat_triangles_face_up() {
        let grid = small_grid(NormalMode::Analytic);
        for tri in 0..grid.indices.len() / 3 {
            assert!((grid.face_normal(tri) - Vec3::Y).length() < 1e-5);
        }
    }

    #[test]
    fn test_displace_matches_function_and_keeps_planar_coords() {
        let params = WaveParams::default();
        let mut grid = small_grid(NormalMode::Analytic);
        grid.displace(2.5, &params);

        for (i, v) in grid.vertices.iter().enumerate() {
            let [x, y] = grid.base_xy(i);
            assert_eq!(v.position[0], x);
            assert_eq!(v.position[2], y);
            assert_eq!(v.position[1], displacement::elevation(x, y, 2.5, &params));
        }
        assert!(grid.max_abs_height() <= params.amplitude_bound());
    }

    #[test]
    fn test_displace_is_stateless() {
        let params = WaveParams::default();
        let mut a = small_grid(NormalMode::Analytic);
        let mut b = small_grid(NormalMode::Analytic);

        a.displace(1.0, &params);
        a.displace(9.0, &params);
        a.displace(4.0, &params);
        b.displace(4.0, &params);

        for (va, vb) in a.vertices.iter().zip(&b.vertices) {
            assert_eq!(va.position, vb.position);
            assert_eq!(va.normal, vb.normal);
        }
    }

    #[test]
    fn test_finite_difference_normals_track_analytic() {
        let params = WaveParams::default();
        let mut analytic = WaveGrid::new(&GridParams {
            normal_mode: NormalMode::Analytic,
            ..GridParams::default()
        });
        let mut grid = WaveGrid::new(&GridParams {
            normal_mode: NormalMode::FiniteDifference,
            ..GridParams::default()
        });
        analytic.displace(3.0, &params);
        grid.displace(3.0, &params);

        // Interior vertices only; borders use one-sided differences
        let side = grid.side();
        for iy in 1..side - 1 {
            for ix in 1..side - 1 {
                let i = grid.vertex_index(ix, iy);
                let a = Vec3::from_array(analytic.vertices[i].normal);
                let b = Vec3::from_array(grid.vertices[i].normal);
                assert!(a.dot(b) > 0.999, "normal mismatch at ({}, {})", ix, iy);
            }
        }
    }

    #[test]
    fn test_zero_size_keeps_normals_finite() {
        let params = WaveParams::default();
        let mut grid = WaveGrid::new(&GridParams {
            size_m: 0.0,
            segments: 4,
            normal_mode: NormalMode::FiniteDifference,
        });
        grid.displace(1.0, &params);

        assert!(grid.spacing() > 0.0);
        for v in &grid.vertices {
            assert!(v.normal.iter().all(|c| c.is_finite()), "{:?}", v.normal);
            assert!(v.normal[1] > 0.0);
        }
    }

    #[test]
    fn test_normals_follow_displaced_surface() {
        let params = WaveParams::default();
        let mut grid = small_grid(NormalMode::Analytic);
        grid.displace(1.0, &params);

        // Not the flat-plane normal anywhere it matters
        let tilted = grid
            .vertices
            .iter()
            .filter(|v| v.normal[1] < 0.999)
            .count();
        assert!(tilted > grid.vertices.len() / 4);
    }
}
