//! Wave band parameters and grid layout.

/// One sinusoidal term of the displacement sum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveBand {
    /// Spatial frequency (radians per meter)
    pub frequency: f32,

    /// Peak height of the term before weighting (meters)
    pub amplitude: f32,

    /// Phase speed multiplier applied on top of `WaveParams::base_speed`
    ///
    /// Each band owns its multiplier. The medium band's 1.2 is its own value
    /// rather than 1.2 times the small band's speed; the two readings agree
    /// while `small.speed` is 1.0, as in the defaults.
    pub speed: f32,

    /// Blend weight of this band in the final sum (dimensionless)
    pub weight: f32,
}

impl WaveBand {
    /// Largest absolute contribution this band can make to elevation
    pub fn peak(&self) -> f32 {
        (self.amplitude * self.weight).abs()
    }
}

/// Wave parameter set, constant for the lifetime of the process
#[derive(Debug, Clone, PartialEq)]
pub struct WaveParams {
    /// Global phase speed (radians per second)
    pub base_speed: f32,

    /// Fine chop: sin(x) * cos(y) with half-frequency y term
    pub small: WaveBand,

    /// Diagonal swell travelling mostly along +X
    pub medium: WaveBand,

    /// Long rolling swell, sin * cos
    pub large_primary: WaveBand,

    /// Long diagonal swell, pure sine
    pub large_secondary: WaveBand,

    /// Static positional irregularity height (meters)
    pub variation_amplitude: f32,

    /// Static positional irregularity frequency (radians per meter)
    pub variation_frequency: f32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            base_speed: 1.0,
            small: WaveBand {
                frequency: 0.8,
                amplitude: 0.3,
                speed: 1.0,
                weight: 1.0,
            },
            medium: WaveBand {
                frequency: 0.3,
                amplitude: 0.5,
                speed: 1.2,
                weight: 0.6,
            },
            large_primary: WaveBand {
                frequency: 0.1,
                amplitude: 1.0,
                speed: 0.6,
                weight: 0.5,
            },
            large_secondary: WaveBand {
                frequency: 0.07,
                amplitude: 1.0,
                speed: 0.4,
                weight: 0.4,
            },
            variation_amplitude: 0.1,
            variation_frequency: 0.5,
        }
    }
}

impl WaveParams {
    /// Upper bound on |elevation| for any (x, y, t)
    pub fn amplitude_bound(&self) -> f32 {
        self.bands().iter().map(WaveBand::peak).sum::<f32>() + self.variation_amplitude.abs()
    }

    /// All four bands in evaluation order
    pub fn bands(&self) -> [WaveBand; 4] {
        [
            self.small,
            self.medium,
            self.large_primary,
            self.large_secondary,
        ]
    }
}

/// How vertex normals are derived after displacement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalMode {
    /// Partial derivatives of the displacement function
    #[default]
    Analytic,

    /// Central differences against neighbouring grid heights
    FiniteDifference,
}

/// Planar grid layout
#[derive(Debug, Clone)]
pub struct GridParams {
    /// Side length of the square domain (meters)
    pub size_m: f32,

    /// Subdivisions per side (128 = 16,641 vertices)
    pub segments: usize,

    /// Normal derivation after each displacement pass
    pub normal_mode: NormalMode,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            size_m: DEFAULT_SIZE_M,
            segments: 128,
            normal_mode: NormalMode::Analytic,
        }
    }
}

/// Domain size used when the configured one is zero, negative or not finite
const DEFAULT_SIZE_M: f32 = 50.0;

impl GridParams {
    /// Side length actually meshed (meters, always finite and positive)
    pub fn effective_size_m(&self) -> f32 {
        if self.size_m.is_finite() && self.size_m > 0.0 {
            self.size_m
        } else {
            DEFAULT_SIZE_M
        }
    }

    /// Distance between neighbouring vertices (meters, always positive)
    pub fn spacing_m(&self) -> f32 {
        self.effective_size_m() / self.segments.max(1) as f32
    }
}
