use glam::Vec3;

/// Scalar hash, uniform in `[0, 1)`.
///
/// The phase and multiplier constants are load-bearing: every noise layer
/// above this is visually tuned against this exact sequence.
#[inline(always)]
pub fn hash(n: f32) -> f32 {
    fract((n + 1.951).sin() * 43758.5453)
}

// GLSL fract, `x - floor(x)`. Rust's `f32::fract` truncates toward zero and
// goes negative for negative inputs, which would break the hash range.
#[inline(always)]
fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// Smoothed trilinear value noise over [`hash`], in `[0, 1]`.
///
/// Cell corners are addressed through the scalar encoding
/// `n = x + 57y + 113z`, placing the eight corners at offsets
/// 0/1/57/58/113/114/170/171 from the cell origin. The corner hashes, and
/// everything tuned on top of them, are only meaningful under this exact
/// encoding.
pub fn value_noise(x: Vec3) -> f32 {
    let p = x.floor();
    let f = x - p;

    // Per-axis smoothstep of the fractional offset
    let f = f * f * (Vec3::splat(3.0) - 2.0 * f);

    let n = p.x + p.y * 57.0 + p.z * 113.0;
    let lerp = |a: f32, b: f32, t: f32| a + (b - a) * t;
    lerp(
        lerp(
            lerp(hash(n), hash(n + 1.0), f.x),
            lerp(hash(n + 57.0), hash(n + 58.0), f.x),
            f.y,
        ),
        lerp(
            lerp(hash(n + 113.0), hash(n + 114.0), f.x),
            lerp(hash(n + 170.0), hash(n + 171.0), f.x),
            f.y,
        ),
        f.z,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_stays_in_unit_interval() {
        for i in -500..500 {
            let h = hash(i as f32 * 0.73);
            assert!((0.0..1.0).contains(&h), "hash({i}) = {h}");
        }
    }

    #[test]
    fn hash_is_deterministic() {
        assert_eq!(hash(42.0), hash(42.0));
        assert_eq!(hash(-3.25), hash(-3.25));
    }

    #[test]
    fn lattice_points_collapse_to_corner_hash() {
        // With zero fractional offset the trilinear blend returns the hash
        // of the cell origin itself.
        for (x, y, z) in [(0.0, 0.0, 0.0), (3.0, 1.0, 2.0), (7.0, 0.0, 5.0)] {
            let n = x + y * 57.0 + z * 113.0;
            let v = value_noise(Vec3::new(x, y, z));
            assert!((v - hash(n)).abs() < 1e-7);
        }
    }

    #[test]
    fn value_noise_stays_in_unit_interval() {
        for i in 0..20 {
            for j in 0..20 {
                let p = Vec3::new(i as f32 * 0.37, j as f32 * 0.91, (i + j) as f32 * 0.13);
                let v = value_noise(p);
                assert!((0.0..=1.0).contains(&v), "value_noise({p}) = {v}");
            }
        }
    }
}
