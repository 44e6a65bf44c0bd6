//! Orbit camera around the water surface.
//!
//! Owns eye position and projection. The renderer only reads from it.

use glam::{Mat4, Vec3};

use crate::params::{OrbitParams, RenderConfig};

/// Pending motion below this is dropped so the camera comes to rest
const REST_EPSILON: f32 = 1e-5;

/// Orbit camera with damped rotate and zoom
pub struct OrbitCamera {
    params: OrbitParams,
    target: Vec3,
    distance: f32,
    azimuth: f32,
    polar: f32,
    // Motion not yet applied (radians, log-distance)
    pending_azimuth: f32,
    pending_polar: f32,
    pending_zoom: f32,
    dragging: bool,
    fov: f32,
    aspect: f32,
    near: f32,
    far: f32,
}

impl OrbitCamera {
    /// Create orbit camera from orbit and projection settings
    pub fn new(params: OrbitParams, render_config: &RenderConfig) -> Self {
        let distance = params
            .distance_m
            .clamp(params.min_distance_m, params.max_distance_m);
        let polar = params.polar.clamp(params.min_polar, params.max_polar);

        Self {
            target: Vec3::from_array(params.target),
            distance,
            azimuth: params.azimuth,
            polar,
            pending_azimuth: 0.0,
            pending_polar: 0.0,
            pending_zoom: 0.0,
            dragging: false,
            fov: render_config.fov_degrees.to_radians(),
            aspect: render_config.aspect_ratio(),
            near: render_config.near_plane_m,
            far: render_config.far_plane_m,
            params,
        }
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Queue a rotation from a pointer movement in pixels
    ///
    /// Ignored unless a drag is in progress.
    pub fn drag(&mut self, dx: f32, dy: f32) {
        if !self.dragging {
            return;
        }
        self.pending_azimuth -= dx * self.params.rotate_speed;
        self.pending_polar -= dy * self.params.rotate_speed;
    }

    /// Queue a zoom; positive `lines` moves closer
    pub fn zoom(&mut self, lines: f32) {
        self.pending_zoom -= lines * self.params.zoom_speed;
    }

    /// Apply a fraction of the pending motion (call once per frame)
    pub fn update(&mut self) {
        let k = self.params.damping.clamp(f32::EPSILON, 1.0);

        let d_azimuth = self.pending_azimuth * k;
        let d_polar = self.pending_polar * k;
        let d_zoom = self.pending_zoom * k;

        self.azimuth += d_azimuth;
        self.polar = (self.polar + d_polar).clamp(self.params.min_polar, self.params.max_polar);
        self.distance = (self.distance * d_zoom.exp())
            .clamp(self.params.min_distance_m, self.params.max_distance_m);

        self.pending_azimuth -= d_azimuth;
        self.pending_polar -= d_polar;
        self.pending_zoom -= d_zoom;

        for pending in [
            &mut self.pending_azimuth,
            &mut self.pending_polar,
            &mut self.pending_zoom,
        ] {
            if pending.abs() < REST_EPSILON {
                *pending = 0.0;
            }
        }
    }

    /// Update projection for a new viewport size
    ///
    /// Only the aspect ratio changes; eye, target and world geometry are
    /// untouched. Zero-sized viewports (minimised windows) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn polar(&self) -> f32 {
        self.polar
    }

    /// Current eye position from spherical coordinates
    pub fn eye(&self) -> Vec3 {
        let (sin_p, cos_p) = self.polar.sin_cos();
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        self.target + Vec3::new(sin_p * sin_a, cos_p, sin_p * cos_a) * self.distance
    }

    pub fn view_matrix(&self) -> Mat4 {
        // Always keep Y as up vector (camera never rolls)
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    /// Combined view-projection matrix
    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
