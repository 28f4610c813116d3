//! Tileable noise primitives: a scalar hash, smoothed value noise over it,
//! cellular (Worley) distance noise, and periodic gradient (Perlin) fBm.
//!
//! All functions are pure and total over valid parameter domains
//! (`cell_count > 0`, `frequency > 0`, at least one octave); the noise
//! evaluators return values in `[0, 1]`, while [`remap`] rescales without
//! clamping.

mod perlin;
mod utils;
mod value;
mod worley;

pub use perlin::perlin;
pub use utils::remap;
pub use value::{hash, value_noise};
pub use worley::worley;
