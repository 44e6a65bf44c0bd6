//! Elevation-driven colour model.
//!
//! These functions mirror `fs_main` in `shader.wgsl` step for step. The GPU
//! copy is what draws; this one is what the tests pin down.

use glam::Vec3;

use crate::params::{FogParams, ShadingParams};

/// Crest band where foam fades in (meters)
const FOAM_START_M: f32 = 0.2;
const FOAM_END_M: f32 = 0.3;
/// Maximum blend toward foam and fresnel colours
const FOAM_STRENGTH: f32 = 0.3;
const FRESNEL_STRENGTH: f32 = 0.3;
/// Brightness modulation: base + elevation * slope
const BRIGHTNESS_BASE: f32 = 0.95;
const BRIGHTNESS_SLOPE: f32 = 0.15;

/// Hermite step between `edge0` and `edge1`, as in WGSL
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Depth-to-surface blend factor for elevation `e`, always in [0, 1]
pub fn mix_strength(e: f32, params: &ShadingParams) -> f32 {
    let m = (e + params.color_offset) * params.color_multiplier + params.mix_bias;
    // NaN from infinite inputs collapses to the depth colour
    if m.is_nan() {
        0.0
    } else {
        m.clamp(0.0, 1.0)
    }
}

/// Surface colour for elevation `e`
///
/// `normal` and `view_dir` (surface toward eye) are only read when fresnel
/// is enabled. Returns straight RGBA.
pub fn shade(e: f32, normal: Vec3, view_dir: Vec3, params: &ShadingParams) -> [f32; 4] {
    let depth = Vec3::from_array(params.depth_color);
    let surface = Vec3::from_array(params.surface_color);

    let mut color = depth.lerp(surface, mix_strength(e, params));

    if params.foam {
        let foam = smoothstep(FOAM_START_M, FOAM_END_M, e);
        color = color.lerp(Vec3::from_array(params.foam_color), foam * FOAM_STRENGTH);
    }

    if params.fresnel {
        let facing = view_dir.dot(normal).clamp(0.0, 1.0);
        let fresnel = (1.0 - facing).powi(2);
        let bright = (surface * params.fresnel_boost).min(Vec3::ONE);
        color = color.lerp(bright, fresnel * FRESNEL_STRENGTH);
    }

    if params.brightness {
        color *= BRIGHTNESS_BASE + e * BRIGHTNESS_SLOPE;
    }

    if params.dark_floor_clamp {
        color = color.max(Vec3::from_array(params.dark_floor));
    }

    color.extend(params.alpha).to_array()
}

/// Fraction of fog at `distance` from the eye (0 = clear, 1 = fully fogged)
pub fn fog_factor(distance: f32, fog: &FogParams) -> f32 {
    if !fog.enabled {
        return 0.0;
    }
    linear_ramp(fog.near_m, fog.far_m, distance)
}

/// Blend `rgb` toward the fog colour for a fragment at `distance`
pub fn apply_fog(rgb: [f32; 3], distance: f32, fog: &FogParams) -> [f32; 3] {
    Vec3::from_array(rgb)
        .lerp(Vec3::from_array(fog.color), fog_factor(distance, fog))
        .to_array()
}

/// Linear ramp clamped to [0, 1]
///
/// An empty or inverted range is a hard step at `start`, matching the fog
/// branch in `shader.wgsl`.
fn linear_ramp(start: f32, end: f32, x: f32) -> f32 {
    if end <= start {
        return if x >= start { 1.0 } else { 0.0 };
    }
    ((x - start) / (end - start)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rgb_close(a: [f32; 4], b: [f32; 3]) {
        for c in 0..3 {
            assert!((a[c] - b[c]).abs() < 1e-5, "{:?} vs {:?}", a, b);
        }
    }

    #[test]
    fn test_mix_strength_clamped_for_extremes() {
        let rich = ShadingParams::rich();
        let minimal = ShadingParams::minimal();
        let extremes = [
            -1.0e30,
            -1000.0,
            -1.6,
            0.0,
            1.6,
            1000.0,
            1.0e30,
            f32::INFINITY,
            f32::NEG_INFINITY,
        ];

        for params in [&rich, &minimal] {
            for &e in &extremes {
                let m = mix_strength(e, params);
                assert!((0.0..=1.0).contains(&m), "mix {} for e={}", m, e);
            }
        }

        let wild = ShadingParams {
            color_offset: -250.0,
            color_multiplier: -42.0,
            mix_bias: 17.0,
            ..ShadingParams::rich()
        };
        for &e in &extremes {
            assert!((0.0..=1.0).contains(&mix_strength(e, &wild)));
        }
    }

    #[test]
    fn test_bias_shifts_mix_strength() {
        let unbiased = ShadingParams::rich();
        let biased = ShadingParams {
            mix_bias: 0.5,
            ..ShadingParams::rich()
        };
        // (-0.5 + 0.9) * 0.45 = 0.18
        assert!((mix_strength(-0.5, &unbiased) - 0.18).abs() < 1e-6);
        assert!((mix_strength(-0.5, &biased) - 0.68).abs() < 1e-6);
    }

    #[test]
    fn test_minimal_variant_is_plain_gradient() {
        let params = ShadingParams::minimal();
        let lowest = shade(-100.0, Vec3::Y, Vec3::Y, &params);
        let highest = shade(100.0, Vec3::Y, Vec3::Y, &params);

        assert_rgb_close(lowest, params.depth_color);
        assert_rgb_close(highest, params.surface_color);
        assert_eq!(lowest[3], params.alpha);
    }

    #[test]
    fn test_alpha_is_near_opaque() {
        for params in [ShadingParams::rich(), ShadingParams::minimal()] {
            let rgba = shade(0.4, Vec3::Y, Vec3::new(0.3, 0.5, 0.8).normalize(), &params);
            assert!((0.92..=0.95).contains(&rgba[3]));
        }
    }

    #[test]
    fn test_foam_only_on_crests() {
        let with_foam = ShadingParams {
            foam: true,
            fresnel: false,
            brightness: false,
            dark_floor_clamp: false,
            ..ShadingParams::rich()
        };
        let without = ShadingParams {
            foam: false,
            ..with_foam.clone()
        };

        // Below the threshold foam has no effect
        assert_eq!(
            shade(0.1, Vec3::Y, Vec3::Y, &with_foam),
            shade(0.1, Vec3::Y, Vec3::Y, &without)
        );

        // Above it, the colour moves toward white
        let crest = shade(0.5, Vec3::Y, Vec3::Y, &with_foam);
        let plain = shade(0.5, Vec3::Y, Vec3::Y, &without);
        assert!(crest[0] > plain[0]);
        assert!(crest[1] > plain[1]);
    }

    #[test]
    fn test_fresnel_grows_at_grazing_angles() {
        let params = ShadingParams {
            foam: false,
            fresnel: true,
            brightness: false,
            dark_floor_clamp: false,
            ..ShadingParams::rich()
        };
        let without = ShadingParams {
            fresnel: false,
            ..params.clone()
        };

        // Looking straight down: fresnel term is zero
        assert_eq!(
            shade(-0.5, Vec3::Y, Vec3::Y, &params),
            shade(-0.5, Vec3::Y, Vec3::Y, &without)
        );

        let grazing = Vec3::new(1.0, 0.05, 0.0).normalize();
        let lit = shade(-0.5, Vec3::Y, grazing, &params);
        let flat = shade(-0.5, Vec3::Y, grazing, &without);
        assert!(lit[2] > flat[2]);
    }

    #[test]
    fn test_dark_floor_clamp() {
        let params = ShadingParams {
            depth_color: [0.0, 0.0, 0.0],
            ..ShadingParams::rich()
        };
        let rgba = shade(-1.6, Vec3::Y, Vec3::Y, &params);
        for c in 0..3 {
            assert!(rgba[c] >= params.dark_floor[c]);
        }
    }

    #[test]
    fn test_colors_do_not_touch_elevation() {
        use crate::params::WaveParams;
        use crate::wave::displacement::elevation;

        let waves = WaveParams::default();
        let e = elevation(5.0, 3.0, 1.0, &waves);

        let warm = ShadingParams {
            depth_color: [0.4, 0.1, 0.0],
            surface_color: [1.0, 0.7, 0.3],
            ..ShadingParams::rich()
        };
        let cool = ShadingParams::rich();

        assert_ne!(
            shade(e, Vec3::Y, Vec3::Y, &warm),
            shade(e, Vec3::Y, Vec3::Y, &cool)
        );
        assert_eq!(elevation(5.0, 3.0, 1.0, &waves).to_bits(), e.to_bits());
    }

    #[test]
    fn test_smoothstep_edges() {
        assert_eq!(smoothstep(0.2, 0.3, 0.1), 0.0);
        assert_eq!(smoothstep(0.2, 0.3, 0.4), 1.0);
        assert!((smoothstep(0.2, 0.3, 0.25) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_fog_ramp() {
        let fog = FogParams::default();
        let rgb = [0.5, 0.6, 0.7];

        assert_eq!(apply_fog(rgb, fog.near_m - 1.0, &fog), rgb);
        let far = apply_fog(rgb, fog.far_m + 1.0, &fog);
        for c in 0..3 {
            assert!((far[c] - fog.color[c]).abs() < 1e-6);
        }

        let disabled = FogParams {
            enabled: false,
            ..fog
        };
        assert_eq!(apply_fog(rgb, 1.0e6, &disabled), rgb);
    }

    #[test]
    fn test_degenerate_fog_range_steps_at_near() {
        let flat = FogParams {
            near_m: 40.0,
            far_m: 40.0,
            ..FogParams::default()
        };
        assert_eq!(fog_factor(39.9, &flat), 0.0);
        assert_eq!(fog_factor(40.0, &flat), 1.0);

        let inverted = FogParams {
            near_m: 50.0,
            far_m: 20.0,
            ..FogParams::default()
        };
        assert_eq!(fog_factor(30.0, &inverted), 0.0);
        assert_eq!(fog_factor(50.0, &inverted), 1.0);
    }
}
