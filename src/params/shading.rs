//! Surface shading parameters and the two variant presets.

/// Colour gradient and optical enhancement settings
///
/// Each enhancement layer is an independent toggle so either observed
/// variant (or any mix) can be reproduced.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadingParams {
    /// Colour of the troughs (linear RGB)
    pub depth_color: [f32; 3],

    /// Colour of the crests (linear RGB)
    pub surface_color: [f32; 3],

    /// Added to elevation before scaling into the mix factor (meters)
    pub color_offset: f32,

    /// Scale from offset elevation to mix factor (per meter)
    pub color_multiplier: f32,

    /// Constant added to the mix factor before clamping
    pub mix_bias: f32,

    /// Blend toward `foam_color` above the crest threshold
    pub foam: bool,

    /// Blend toward a brightened surface colour at grazing angles
    pub fresnel: bool,

    /// Scale colour by elevation
    pub brightness: bool,

    /// Clamp colour from below by `dark_floor`
    pub dark_floor_clamp: bool,

    /// Near-white crest colour
    pub foam_color: [f32; 3],

    /// Minimum colour when `dark_floor_clamp` is on
    pub dark_floor: [f32; 3],

    /// Multiplier producing the fresnel target from `surface_color`
    pub fresnel_boost: f32,

    /// Output opacity (0.92 - 0.95 keeps the surface near-opaque)
    pub alpha: f32,
}

impl ShadingParams {
    /// Full variant: foam, fresnel, brightness modulation and floor clamp
    pub fn rich() -> Self {
        Self {
            depth_color: [0.04, 0.22, 0.38],
            surface_color: [0.45, 0.78, 0.92],
            color_offset: 0.9,
            color_multiplier: 0.45,
            mix_bias: 0.0,
            foam: true,
            fresnel: true,
            brightness: true,
            dark_floor_clamp: true,
            foam_color: [0.95, 0.98, 1.0],
            dark_floor: [0.03, 0.1, 0.18],
            fresnel_boost: 1.3,
            alpha: 0.93,
        }
    }

    /// Gradient-only variant with the constant half bias
    pub fn minimal() -> Self {
        Self {
            mix_bias: 0.5,
            foam: false,
            fresnel: false,
            brightness: false,
            dark_floor_clamp: false,
            alpha: 0.95,
            ..Self::rich()
        }
    }
}

impl Default for ShadingParams {
    fn default() -> Self {
        Self::rich()
    }
}
