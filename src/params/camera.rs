//! Orbit camera configuration.

use std::f32::consts::FRAC_PI_2;

/// Orbit controls around a fixed target
#[derive(Debug, Clone)]
pub struct OrbitParams {
    /// Point the camera orbits and looks at (meters)
    pub target: [f32; 3],

    /// Initial distance from target (meters)
    pub distance_m: f32,

    /// Closest zoom (meters)
    pub min_distance_m: f32,

    /// Farthest zoom (meters)
    pub max_distance_m: f32,

    /// Initial rotation around the vertical axis (radians)
    pub azimuth: f32,

    /// Initial angle from the vertical axis (radians, 0 = straight down)
    pub polar: f32,

    /// Smallest polar angle (radians)
    pub min_polar: f32,

    /// Largest polar angle (radians, < PI/2 keeps the eye above water)
    pub max_polar: f32,

    /// Radians of rotation per pixel dragged
    pub rotate_speed: f32,

    /// Fractional zoom per wheel line
    pub zoom_speed: f32,

    /// Fraction of pending motion applied per frame (0 < damping <= 1)
    pub damping: f32,
}

impl Default for OrbitParams {
    fn default() -> Self {
        Self {
            target: [0.0, 0.0, 0.0],
            distance_m: 38.0,
            min_distance_m: 8.0,
            max_distance_m: 90.0,
            azimuth: 0.6,
            polar: 1.05,
            min_polar: 0.1,
            max_polar: FRAC_PI_2 - 0.05,
            rotate_speed: 0.005,
            zoom_speed: 0.1,
            damping: 0.08,
        }
    }
}
