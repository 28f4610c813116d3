use crate::error::Error;

/// Generation parameters for the base-shape texture: a Perlin-Worley
/// density channel plus three decreasing-frequency Worley fBm bands.
///
/// The defaults are the shipped texture parameters. Everything is plain
/// data; callers can shrink the volume or retune the bands without touching
/// the pipeline.
#[derive(Debug, Clone)]
pub struct BaseShapeConfig {
    /// Side length of the cubic lattice.
    pub size: usize,
    /// Base frequency of the Perlin fBm layer.
    pub perlin_frequency: f32,
    /// Octave count of the Perlin fBm layer.
    pub perlin_octaves: u32,
    /// Base Worley granularity; every band multiplies this.
    pub cell_count: f32,
    /// Cell-count multipliers for the Perlin-Worley fBm. Only the first
    /// three bands enter the combination.
    pub frequency_mul: [f32; 6],
    /// Cell-count multipliers for the three channel fBm bands.
    pub band_mul: [f32; 5],
}

impl Default for BaseShapeConfig {
    fn default() -> Self {
        Self {
            size: 128,
            perlin_frequency: 8.0,
            perlin_octaves: 3,
            cell_count: 4.0,
            frequency_mul: [2.0, 8.0, 14.0, 20.0, 26.0, 32.0],
            band_mul: [1.0, 2.0, 4.0, 8.0, 16.0],
        }
    }
}

impl BaseShapeConfig {
    pub(crate) fn validate(&self) -> Result<(), Error> {
        ensure_size(self.size)?;
        ensure_positive("cell_count", self.cell_count)?;
        ensure_positive("perlin_frequency", self.perlin_frequency)?;
        if self.perlin_octaves == 0 {
            return Err(Error::InvalidConfig(
                "perlin_octaves must be at least 1".into(),
            ));
        }
        for mul in self.frequency_mul.iter().chain(&self.band_mul) {
            ensure_positive("band multiplier", *mul)?;
        }
        Ok(())
    }
}

/// Generation parameters for the erosion/detail texture: three finer
/// Worley fBm bands at a coarser base granularity.
#[derive(Debug, Clone)]
pub struct ErosionConfig {
    /// Side length of the cubic lattice.
    pub size: usize,
    /// Base Worley granularity; every band multiplies this.
    pub cell_count: f32,
    /// Cell-count multipliers for the three channel fBm bands.
    pub band_mul: [f32; 4],
}

impl Default for ErosionConfig {
    fn default() -> Self {
        Self {
            size: 32,
            cell_count: 2.0,
            band_mul: [1.0, 2.0, 4.0, 8.0],
        }
    }
}

impl ErosionConfig {
    pub(crate) fn validate(&self) -> Result<(), Error> {
        ensure_size(self.size)?;
        ensure_positive("cell_count", self.cell_count)?;
        for mul in &self.band_mul {
            ensure_positive("band multiplier", *mul)?;
        }
        Ok(())
    }
}

fn ensure_size(size: usize) -> Result<(), Error> {
    if size == 0 {
        return Err(Error::InvalidConfig("size must be at least 1".into()));
    }
    Ok(())
}

fn ensure_positive(name: &str, value: f32) -> Result<(), Error> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidConfig(format!(
            "{name} must be positive and finite, got {value}"
        )))
    }
}
