/// Affine rescale of `v` from `[old_min, old_max]` to `[new_min, new_max]`.
///
/// Endpoints map exactly: `remap(a, a, b, c, d) == c` and
/// `remap(b, a, b, c, d) == d`. No clamping; callers clamp where the
/// channel math requires it.
pub fn remap(v: f32, old_min: f32, old_max: f32, new_min: f32, new_max: f32) -> f32 {
    new_min + (v - old_min) / (old_max - old_min) * (new_max - new_min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_map_exactly() {
        assert_eq!(remap(2.0, 2.0, 6.0, -1.0, 3.0), -1.0);
        assert_eq!(remap(6.0, 2.0, 6.0, -1.0, 3.0), 3.0);
    }

    #[test]
    fn unit_range_is_identity() {
        for i in 0..=10 {
            let v = i as f32 / 10.0;
            assert_eq!(remap(v, 0.0, 1.0, 0.0, 1.0), v);
        }
    }

    #[test]
    fn midpoint_maps_to_midpoint() {
        let v = remap(0.5, 0.0, 1.0, 4.0, 8.0);
        assert!((v - 6.0).abs() < 1e-6);
    }
}
