use super::value::value_noise;
use glam::Vec3;

/// Tileable 3D Worley (cellular) noise in `[0, 1]`.
///
/// `p` is a point in the unit cube and `cell_count` the number of feature
/// cells per axis. The field repeats with period 1 along each axis because
/// feature-point jitter is taken modulo `cell_count`. Returns the clamped
/// squared distance to the nearest feature point; callers wanting bulges
/// instead of pits invert with `1.0 - d`.
pub fn worley(p: Vec3, cell_count: f32) -> f32 {
    let p_cell = p * cell_count;
    let base = p_cell.floor();

    // Search the 3x3x3 neighbour stencil
    let mut d = f32::MAX;
    for &(xo, yo, zo) in &NEIGHBOURS {
        let cell = base + Vec3::new(xo as f32, yo as f32, zo as f32);

        // One scalar jitter broadcast across all three axes; wrapping the
        // cell index keeps feature points identical across the tile seam.
        let to = p_cell - cell - Vec3::splat(value_noise(wrap(cell, cell_count)));
        d = d.min(to.dot(to));
    }

    d.clamp(0.0, 1.0)
}

// Floor-mod per component so negative stencil cells wrap into [0, m).
fn wrap(v: Vec3, m: f32) -> Vec3 {
    Vec3::new(v.x.rem_euclid(m), v.y.rem_euclid(m), v.z.rem_euclid(m))
}

const NEIGHBOURS: [(i32, i32, i32); 27] = {
    let mut arr = [(0, 0, 0); 27];
    let mut i = 0;
    let mut dz = -1;
    while dz <= 1 {
        let mut dy = -1;
        while dy <= 1 {
            let mut dx = -1;
            while dx <= 1 {
                arr[i] = (dx, dy, dz);
                i += 1;
                dx += 1;
            }
            dy += 1;
        }
        dz += 1;
    }
    arr
};
