//! Closed-form wave height function and its analytic derivatives.
//!
//! Elevation is a pure function of planar position, elapsed time and the
//! wave parameter set. Nothing here carries state between frames.

use glam::Vec3;

use crate::params::{WaveBand, WaveParams};

/// Small band: y frequency relative to x frequency
const SMALL_Y_FREQ_RATIO: f32 = 0.5;
/// Small band: y phase speed relative to x phase speed
const SMALL_Y_SPEED_RATIO: f32 = 0.8;
/// Medium band: y contribution to the travelling phase
const MEDIUM_Y_FREQ_RATIO: f32 = 0.3;
/// Large primary band: y frequency relative to x frequency
const LARGE_Y_FREQ_RATIO: f32 = 0.8;
/// Large primary band: y phase speed relative to x phase speed
const LARGE_Y_SPEED_RATIO: f32 = 0.7;
/// Large secondary band: x contribution to the diagonal phase
const LARGE_DIAGONAL_X_RATIO: f32 = 0.7;

/// Phase offset of a band at time `t`
#[inline]
fn phase(band: &WaveBand, t: f32, base_speed: f32) -> f32 {
    t * base_speed * band.speed
}

/// Elevation at planar (x, y) and time `t` (meters)
pub fn elevation(x: f32, y: f32, t: f32, params: &WaveParams) -> f32 {
    let v = params.base_speed;

    let s = &params.small;
    let ps = phase(s, t, v);
    let small = (x * s.frequency + ps).sin()
        * (y * s.frequency * SMALL_Y_FREQ_RATIO + ps * SMALL_Y_SPEED_RATIO).cos()
        * s.amplitude
        * s.weight;

    let m = &params.medium;
    let medium = (x * m.frequency + y * m.frequency * MEDIUM_Y_FREQ_RATIO + phase(m, t, v)).sin()
        * m.amplitude
        * m.weight;

    let l = &params.large_primary;
    let pl = phase(l, t, v);
    let large_primary = (x * l.frequency + pl).sin()
        * (y * l.frequency * LARGE_Y_FREQ_RATIO + pl * LARGE_Y_SPEED_RATIO).cos()
        * l.amplitude
        * l.weight;

    let d = &params.large_secondary;
    let large_secondary = ((x * LARGE_DIAGONAL_X_RATIO + y) * d.frequency + phase(d, t, v)).sin()
        * d.amplitude
        * d.weight;

    small + medium + large_primary + large_secondary + variation(x, y, params)
}

/// Static positional irregularity term (time-independent)
pub fn variation(x: f32, y: f32, params: &WaveParams) -> f32 {
    let f = params.variation_frequency;
    (x * f).sin() * (y * f).cos() * params.variation_amplitude
}

/// Partial derivatives (dh/dx, dh/dy) of [`elevation`]
pub fn gradient(x: f32, y: f32, t: f32, params: &WaveParams) -> (f32, f32) {
    let v = params.base_speed;
    let mut dx = 0.0;
    let mut dy = 0.0;

    // sin(a) * cos(b)
    let s = &params.small;
    let ps = phase(s, t, v);
    let a = x * s.frequency + ps;
    let b = y * s.frequency * SMALL_Y_FREQ_RATIO + ps * SMALL_Y_SPEED_RATIO;
    let k = s.amplitude * s.weight;
    dx += s.frequency * a.cos() * b.cos() * k;
    dy -= s.frequency * SMALL_Y_FREQ_RATIO * a.sin() * b.sin() * k;

    // sin(c)
    let m = &params.medium;
    let c = x * m.frequency + y * m.frequency * MEDIUM_Y_FREQ_RATIO + phase(m, t, v);
    let k = m.amplitude * m.weight * c.cos();
    dx += m.frequency * k;
    dy += m.frequency * MEDIUM_Y_FREQ_RATIO * k;

    // sin(a) * cos(b)
    let l = &params.large_primary;
    let pl = phase(l, t, v);
    let a = x * l.frequency + pl;
    let b = y * l.frequency * LARGE_Y_FREQ_RATIO + pl * LARGE_Y_SPEED_RATIO;
    let k = l.amplitude * l.weight;
    dx += l.frequency * a.cos() * b.cos() * k;
    dy -= l.frequency * LARGE_Y_FREQ_RATIO * a.sin() * b.sin() * k;

    // sin(c)
    let d = &params.large_secondary;
    let c = (x * LARGE_DIAGONAL_X_RATIO + y) * d.frequency + phase(d, t, v);
    let k = d.amplitude * d.weight * c.cos();
    dx += d.frequency * LARGE_DIAGONAL_X_RATIO * k;
    dy += d.frequency * k;

    let f = params.variation_frequency;
    let k = params.variation_amplitude * f;
    dx += k * (x * f).cos() * (y * f).cos();
    dy -= k * (x * f).sin() * (y * f).sin();

    (dx, dy)
}

/// World-space surface normal from the analytic gradient
///
/// Planar y maps to world +Z and elevation to world +Y, so the surface
/// (x, h, y) has tangents (1, hx, 0) and (0, hy, 1).
pub fn analytic_normal(x: f32, y: f32, t: f32, params: &WaveParams) -> Vec3 {
    let (hx, hy) = gradient(x, y, t, params);
    normal_from_slopes(hx, hy)
}

/// Unit normal for a height field with the given slopes
#[inline]
pub fn normal_from_slopes(hx: f32, hy: f32) -> Vec3 {
    Vec3::new(-hx, 1.0, -hy).normalize()
}
