//! Rendering and scene configuration.

/// Linear distance fog blended toward the clear colour
#[derive(Debug, Clone, PartialEq)]
pub struct FogParams {
    /// Fog colour (linear RGB), normally the clear colour
    pub color: [f32; 3],

    /// Distance where fog starts (meters)
    pub near_m: f32,

    /// Distance where fog is total (meters)
    pub far_m: f32,

    pub enabled: bool,
}

impl Default for FogParams {
    fn default() -> Self {
        Self {
            color: [0.02, 0.06, 0.11],
            near_m: 30.0,
            far_m: 110.0,
            enabled: true,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Vertical field of view (degrees)
    pub fov_degrees: f32,

    /// Near clipping plane (meters)
    pub near_plane_m: f32,

    /// Far clipping plane (meters)
    pub far_plane_m: f32,

    /// Background colour (linear RGB)
    pub clear_color: [f32; 3],

    pub fog: FogParams,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let fog = FogParams::default();
        Self {
            window_width: 1280,
            window_height: 720,
            fov_degrees: 55.0,
            near_plane_m: 0.1,
            far_plane_m: 500.0,
            clear_color: fog.color,
            fog,
        }
    }
}

impl RenderConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height.max(1) as f32
    }
}
