/// Owned RGBA8 voxel buffer for one `size³` texture.
///
/// The flat texel address for volume index `(s, t, r)` is
/// `((r·size + t)·size + s) · 4`. The mapping is injective, so every lattice
/// point owns exactly one texel; the buffer lives for a single generation
/// call and is dropped once the atlas has been emitted.
pub struct Volume {
    size: usize,
    data: Vec<u8>,
}

impl Volume {
    pub(crate) fn new(size: usize) -> Self {
        Self {
            size,
            data: vec![0; size * size * size * 4],
        }
    }

    /// Side length of the cubic lattice.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Raw texel bytes in volume address order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// RGBA channels of the texel at volume index `(s, t, r)`.
    pub fn texel(&self, s: usize, t: usize, r: usize) -> [u8; 4] {
        let addr = ((r * self.size + t) * self.size + s) * 4;
        [
            self.data[addr],
            self.data[addr + 1],
            self.data[addr + 2],
            self.data[addr + 3],
        ]
    }
}
