use crate::error::Error;
use crate::volume::Volume;
use std::path::Path;

/// A 3D volume flattened to a 2D tile strip for image emission.
///
/// Volume index `(s, t, r)` lands at atlas pixel `(x = r·size + s, y = t)`:
/// z-slices are tiled side by side along the x axis, giving an image of
/// width `size²` and height `size`. This mapping is the contract with the
/// renderer that un-tiles the strip back into a 3D texture; [`write_png`]
/// additionally flips rows so lattice row `t = 0` lands at the image's
/// visual bottom, matching the bottom-up storage convention the renderer
/// loads with.
///
/// [`write_png`]: Atlas::write_png
pub struct Atlas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

/// Flatten a volume into its tile-strip atlas.
pub fn pack(volume: &Volume) -> Atlas {
    let size = volume.size();
    let width = size * size;
    let mut data = vec![0u8; width * size * 4];

    for r in 0..size {
        for t in 0..size {
            for s in 0..size {
                let addr = (t * width + r * size + s) * 4;
                data[addr..addr + 4].copy_from_slice(&volume.texel(s, t, r));
            }
        }
    }

    Atlas {
        width: width as u32,
        height: size as u32,
        data,
    }
}

impl Atlas {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes in top-down row order, before the flip-on-write.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Encode the atlas as an RGBA8 PNG at `path`, flipping rows on the way
    /// out.
    pub fn write_png(&self, path: &Path) -> Result<(), Error> {
        let flipped = flip_rows(&self.data, self.width as usize * 4);
        image::save_buffer(
            path,
            &flipped,
            self.width,
            self.height,
            image::ExtendedColorType::Rgba8,
        )?;
        Ok(())
    }
}

// Reverse row order so row 0 ends up at the visual bottom of the image.
fn flip_rows(data: &[u8], row_bytes: usize) -> Vec<u8> {
    let mut flipped = Vec::with_capacity(data.len());
    for row in data.chunks_exact(row_bytes).rev() {
        flipped.extend_from_slice(row);
    }
    flipped
}
