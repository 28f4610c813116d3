use cloudtex::noise::{perlin, remap, value_noise, worley};
use glam::Vec3;
use proptest::prelude::*;

fn arb_unit_vec3() -> impl Strategy<Value = Vec3> {
    (0.0f32..1.0, 0.0f32..1.0, 0.0f32..1.0).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn arb_cell_count() -> impl Strategy<Value = f32> {
    prop::sample::select(vec![1.0f32, 2.0, 4.0, 8.0, 13.0, 16.0, 32.0])
}

proptest! {
    #[test]
    fn worley_range_law(p in arb_unit_vec3(), cell_count in arb_cell_count()) {
        let d = worley(p, cell_count);
        prop_assert!((0.0..=1.0).contains(&d), "worley({}, {}) = {}", p, cell_count, d);
    }

    #[test]
    fn perlin_range_law(p in arb_unit_vec3(), octaves in 1u32..6) {
        let v = perlin(p, 8.0, octaves);
        prop_assert!((0.0..=1.0).contains(&v), "perlin({}, 8, {}) = {}", p, octaves, v);
    }

    #[test]
    fn value_noise_range_law(x in -16.0f32..16.0, y in -16.0f32..16.0, z in -16.0f32..16.0) {
        let v = value_noise(Vec3::new(x, y, z));
        prop_assert!((0.0..=1.0).contains(&v));
    }

    // Feature-point jitter is taken modulo cell_count, so translating by an
    // integer number of tile periods lands on the same feature field.
    #[test]
    fn worley_tileability_law(p in arb_unit_vec3(), k in 1i32..4) {
        let cell_count = 4.0;
        let here = worley(p, cell_count);
        for axis in [Vec3::X, Vec3::Y, Vec3::Z] {
            let there = worley(p + axis * k as f32, cell_count);
            prop_assert!((here - there).abs() < 1e-4, "seam at {} + {}*{}", p, axis, k);
        }
    }

    #[test]
    fn perlin_tileability_law(p in arb_unit_vec3()) {
        let here = perlin(p, 8.0, 3);
        for axis in [Vec3::X, Vec3::Y, Vec3::Z] {
            let there = perlin(p + axis, 8.0, 3);
            prop_assert!((here - there).abs() < 1e-4, "seam at {} + {}", p, axis);
        }
    }

    #[test]
    fn remap_endpoint_law(
        a in -10.0f32..10.0,
        span in 0.1f32..10.0,
        c in -10.0f32..10.0,
        out_span in 0.1f32..10.0,
    ) {
        let b = a + span;
        let d = c + out_span;
        // Lower endpoint is exact; upper endpoint is exact up to the one
        // rounding step in c + (d - c).
        prop_assert_eq!(remap(a, a, b, c, d), c);
        prop_assert!((remap(b, a, b, c, d) - d).abs() <= f32::EPSILON * d.abs().max(1.0));
    }

    #[test]
    fn remap_unit_identity(v in 0.0f32..1.0) {
        prop_assert_eq!(remap(v, 0.0, 1.0, 0.0, 1.0), v);
    }

    #[test]
    fn noise_is_deterministic(p in arb_unit_vec3(), cell_count in arb_cell_count()) {
        prop_assert_eq!(worley(p, cell_count), worley(p, cell_count));
        prop_assert_eq!(perlin(p, 8.0, 3), perlin(p, 8.0, 3));
    }
}
