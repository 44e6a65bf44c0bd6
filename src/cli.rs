//! Command-line argument parsing.

use clap::{Parser, ValueEnum};

use crate::params::{GridParams, NormalMode, RenderConfig, ShadingParams};

/// Shading variant preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShadingPreset {
    /// Gradient plus foam, fresnel, brightness and dark floor
    Rich,
    /// Gradient only, with the half bias
    Minimal,
}

/// Normal derivation selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NormalArg {
    Analytic,
    FiniteDifference,
}

impl From<NormalArg> for NormalMode {
    fn from(arg: NormalArg) -> Self {
        match arg {
            NormalArg::Analytic => NormalMode::Analytic,
            NormalArg::FiniteDifference => NormalMode::FiniteDifference,
        }
    }
}

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "seaglass")]
#[command(about = "Stylized procedural water surface", long_about = None)]
pub struct Args {
    /// Initial window width (pixels)
    #[arg(long, value_name = "PIXELS", default_value_t = 1280)]
    pub width: u32,

    /// Initial window height (pixels)
    #[arg(long, value_name = "PIXELS", default_value_t = 720)]
    pub height: u32,

    /// Side length of the water plane (meters)
    #[arg(long, value_name = "METERS", default_value_t = 50.0, allow_negative_numbers = true)]
    pub size: f32,

    /// Grid subdivisions per side
    #[arg(long, value_name = "N", default_value_t = 128)]
    pub segments: usize,

    /// Shading variant
    #[arg(long, value_enum, default_value_t = ShadingPreset::Rich)]
    pub shading: ShadingPreset,

    /// Override the constant added to the colour mix before clamping
    #[arg(long, value_name = "BIAS", allow_negative_numbers = true)]
    pub color_bias: Option<f32>,

    /// Disable crest foam
    #[arg(long)]
    pub no_foam: bool,

    /// Disable the fresnel rim
    #[arg(long)]
    pub no_fresnel: bool,

    /// Disable elevation brightness modulation
    #[arg(long)]
    pub no_brightness: bool,

    /// Disable the dark floor clamp
    #[arg(long)]
    pub no_floor: bool,

    /// Disable distance fog
    #[arg(long)]
    pub no_fog: bool,

    /// How vertex normals are derived
    #[arg(long, value_enum, default_value_t = NormalArg::Analytic)]
    pub normals: NormalArg,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Shading parameters from the preset and individual toggles
    pub fn shading_params(&self) -> ShadingParams {
        let mut params = match self.shading {
            ShadingPreset::Rich => ShadingParams::rich(),
            ShadingPreset::Minimal => ShadingParams::minimal(),
        };

        if let Some(bias) = self.color_bias {
            params.mix_bias = bias;
        }
        params.foam &= !self.no_foam;
        params.fresnel &= !self.no_fresnel;
        params.brightness &= !self.no_brightness;
        params.dark_floor_clamp &= !self.no_floor;
        params
    }

    pub fn grid_params(&self) -> GridParams {
        if self.segments == 0 {
            log::warn!("segments must be positive, using 1");
        }
        let defaults = GridParams::default();
        let size_m = if self.size.is_finite() && self.size > 0.0 {
            self.size
        } else {
            log::warn!("size must be a positive length, using {}m", defaults.size_m);
            defaults.size_m
        };
        GridParams {
            size_m,
            segments: self.segments.max(1),
            normal_mode: self.normals.into(),
        }
    }

    pub fn render_config(&self) -> RenderConfig {
        let mut config = RenderConfig {
            window_width: self.width.max(1),
            window_height: self.height.max(1),
            ..RenderConfig::default()
        };
        config.fog.enabled = !self.no_fog;
        config
    }
}
