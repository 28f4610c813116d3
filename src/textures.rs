//! The combination pipeline: merges Worley bands and Perlin fBm into
//! Perlin-Worley density channels and fills whole volumes in parallel.
//!
//! The channel construction follows the cloud shape/erosion recipe of
//! GPU Pro 7 chapter II-4 ("Real-Time Volumetric Cloudscapes").

use crate::config::{BaseShapeConfig, ErosionConfig};
use crate::error::Error;
use crate::noise::{perlin, remap, worley};
use crate::volume::Volume;
use glam::Vec3;
use rayon::prelude::*;

/// A generated texture pair: the per-channel volume and its packed
/// single-value variant, filled in the same pass over the lattice.
pub struct VolumePair {
    /// Full channel set, one noise layer per channel.
    pub texels: Volume,
    /// Channels pre-combined into one value broadcast to RGB, alpha 255,
    /// for direct sampling in a shader.
    pub packed: Volume,
}

/// Generate the base-shape volume: channel 0 is Perlin-Worley density,
/// channels 1-3 are Worley fBm bands of decreasing frequency.
pub fn base_shape(config: &BaseShapeConfig) -> Result<VolumePair, Error> {
    config.validate()?;
    Ok(fill(config.size, |coord| base_shape_texel(config, coord)))
}

/// Generate the erosion/detail volume: channels 0-2 are finer Worley fBm
/// bands, alpha is constant 255.
pub fn erosion(config: &ErosionConfig) -> Result<VolumePair, Error> {
    config.validate()?;
    Ok(fill(config.size, |coord| erosion_texel(config, coord)))
}

/// Populate both volumes of a pair in raster order.
///
/// Every texel is a pure function of its lattice coordinate, so the outer
/// slice index parallelizes freely: each worker owns a disjoint `size²·4`
/// byte range of the pre-allocated buffers and needs no synchronization.
fn fill<F>(size: usize, texel_fn: F) -> VolumePair
where
    F: Fn(Vec3) -> ([f32; 4], [f32; 4]) + Send + Sync,
{
    let norm_fact = 1.0 / size as f32;
    let mut texels = Volume::new(size);
    let mut packed = Volume::new(size);

    let slice_bytes = size * size * 4;
    texels
        .data_mut()
        .par_chunks_mut(slice_bytes)
        .zip(packed.data_mut().par_chunks_mut(slice_bytes))
        .enumerate()
        .for_each(|(r, (texel_slice, packed_slice))| {
            for t in 0..size {
                for s in 0..size {
                    let coord = Vec3::new(s as f32, t as f32, r as f32) * norm_fact;
                    let (channels, packed_channels) = texel_fn(coord);

                    let addr = (t * size + s) * 4;
                    texel_slice[addr..addr + 4].copy_from_slice(&quantize(channels));
                    packed_slice[addr..addr + 4].copy_from_slice(&quantize(packed_channels));
                }
            }
        });

    VolumePair { texels, packed }
}

// [0,1] channel values to RGBA8. Truncating cast, not rounding; the shipped
// textures are quantized this way.
fn quantize(channels: [f32; 4]) -> [u8; 4] {
    channels.map(|v| (255.0 * v) as u8)
}

fn base_shape_texel(config: &BaseShapeConfig, coord: Vec3) -> ([f32; 4], [f32; 4]) {
    let perlin_noise = perlin(coord, config.perlin_frequency, config.perlin_octaves);

    // Perlin-Worley maps the perlin value between a Worley fBm floor and
    // 1.0. Only the first three table bands enter the combination; the
    // higher frequencies approach the texel frequency and add nothing but
    // sampling noise.
    let freq_bands = config
        .frequency_mul
        .map(|mul| 1.0 - worley(coord, config.cell_count * mul));
    let worley_fbm = freq_bands[0] * 0.625 + freq_bands[1] * 0.25 + freq_bands[2] * 0.125;
    let perlin_worley = remap(perlin_noise, 0.0, 1.0, worley_fbm, 1.0).clamp(0.0, 1.0);

    // Three decreasing-frequency Worley fBm bands for the remaining
    // channels, skipping the lowest sample.
    let bands = config
        .band_mul
        .map(|mul| 1.0 - worley(coord, config.cell_count * mul));
    let worley_fbm0 = bands[1] * 0.625 + bands[2] * 0.25 + bands[3] * 0.125;
    let worley_fbm1 = bands[2] * 0.625 + bands[3] * 0.25 + bands[4] * 0.125;
    let worley_fbm2 = bands[3] * 0.75 + bands[4] * 0.25;

    // Packed variant folds all four channels into one density value.
    let low_freq_fbm = worley_fbm0 * 0.625 + worley_fbm1 * 0.25 + worley_fbm2 * 0.125;
    let density = remap(perlin_worley, -(1.0 - low_freq_fbm), 1.0, 0.0, 1.0).clamp(0.0, 1.0);

    (
        [perlin_worley, worley_fbm0, worley_fbm1, worley_fbm2],
        [density, density, density, 1.0],
    )
}

fn erosion_texel(config: &ErosionConfig, coord: Vec3) -> ([f32; 4], [f32; 4]) {
    let bands = config
        .band_mul
        .map(|mul| 1.0 - worley(coord, config.cell_count * mul));
    let worley_fbm0 = bands[0] * 0.625 + bands[1] * 0.25 + bands[2] * 0.125;
    let worley_fbm1 = bands[1] * 0.625 + bands[2] * 0.25 + bands[3] * 0.125;
    let worley_fbm2 = bands[2] * 0.75 + bands[3] * 0.25;

    let detail = worley_fbm0 * 0.625 + worley_fbm1 * 0.25 + worley_fbm2 * 0.125;

    (
        [worley_fbm0, worley_fbm1, worley_fbm2, 1.0],
        [detail, detail, detail, 1.0],
    )
}
