//! # Seeded Simplex Noise
//!
//! The single noise primitive behind every climate channel.
//!
//! ## Determinism Guarantee
//!
//! Given the same [`Seed`], this implementation produces **exactly** the
//! same values on any platform, any time. The permutation table is shuffled
//! with a fixed splitmix64 stream derived from the seed; no platform RNG is
//! ever consulted.

use lodestone_shared::Seed;

/// Skewing factor for the 2D simplex grid: `(sqrt(3) - 1) / 2`.
const F2: f64 = 0.366_025_403_784_439;
/// Unskewing factor for the 2D simplex grid: `(3 - sqrt(3)) / 6`.
const G2: f64 = 0.211_324_865_405_187;

/// Gradient vectors for 2D simplex; vertices of a regular 12-gon.
const GRADIENTS: [[i8; 2]; 12] = [
    [1, 0],
    [1, 1],
    [0, 1],
    [-1, 1],
    [-1, 0],
    [-1, -1],
    [0, -1],
    [1, -1],
    [1, 0],
    [0, 1],
    [-1, 0],
    [0, -1],
];

/// A seeded 2D simplex noise channel.
///
/// Produces smooth, continuous values in `[-1, 1]`.
///
/// # Performance
///
/// - O(1) per sample
/// - No allocations after construction
pub struct SimplexField {
    /// 512-entry permutation table (256 entries, doubled so corner lookups
    /// never wrap mid-expression).
    perm: [u8; 512],
}

impl SimplexField {
    /// Creates a new noise channel from a seed.
    ///
    /// Independent channels should use [`Seed::derive`] with distinct
    /// purposes rather than sharing one field.
    #[must_use]
    pub fn new(seed: Seed) -> Self {
        let mut perm = [0u8; 512];
        for (i, slot) in perm.iter_mut().take(256).enumerate() {
            *slot = i as u8;
        }

        // Fisher-Yates with a splitmix64 stream: well-distributed even for
        // adjacent seeds like 0, 1, 2 from an incrementing seed scan.
        let mut state = seed.value();
        for i in (1..256).rev() {
            state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
            let mut mixed = state;
            mixed = (mixed ^ (mixed >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
            mixed = (mixed ^ (mixed >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
            mixed ^= mixed >> 31;

            let j = (mixed as usize) % (i + 1);
            perm.swap(i, j);
        }

        for i in 0..256 {
            perm[256 + i] = perm[i];
        }

        Self { perm }
    }

    /// Samples the channel at the given coordinates.
    ///
    /// # Returns
    ///
    /// A value in `[-1, 1]`.
    #[must_use]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        // Skew onto the simplex grid
        let skew = (x + y) * F2;
        let i = fast_floor(x + skew);
        let j = fast_floor(y + skew);

        // Unskew to find the cell origin
        let unskew = f64::from(i + j) * G2;
        let x0 = x - (f64::from(i) - unskew);
        let y0 = y - (f64::from(j) - unskew);

        // Which triangle of the cell are we in?
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - f64::from(i1) + G2;
        let y1 = y0 - f64::from(j1) + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;

        let gi0 = self.lookup(ii + usize::from(self.lookup(jj)));
        let gi1 = self.lookup(ii + i1 as usize + usize::from(self.lookup(jj + j1 as usize)));
        let gi2 = self.lookup(ii + 1 + usize::from(self.lookup(jj + 1)));

        let n = corner(x0, y0, gi0) + corner(x1, y1, gi1) + corner(x2, y2, gi2);

        // 70.0 normalizes the summed corner contributions into [-1, 1]
        70.0 * n
    }

    /// Generates octaved (fractal) noise.
    ///
    /// Combines layers at increasing frequency and decaying amplitude for
    /// natural-looking fields.
    ///
    /// # Arguments
    ///
    /// * `octaves` - number of layers (climate channels use 3-4)
    /// * `persistence` - amplitude decay per octave (typically 0.5)
    /// * `lacunarity` - frequency growth per octave (typically 2.0)
    #[must_use]
    pub fn octaved(&self, x: f64, y: f64, octaves: u32, persistence: f64, lacunarity: f64) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_amplitude = 0.0;

        for _ in 0..octaves {
            total += self.sample(x * frequency, y * frequency) * amplitude;
            max_amplitude += amplitude;
            amplitude *= persistence;
            frequency *= lacunarity;
        }

        total / max_amplitude
    }

    /// Permutation lookup with automatic wrapping.
    #[inline]
    fn lookup(&self, index: usize) -> u8 {
        self.perm[index & 511]
    }
}

/// Contribution from one corner of the simplex.
#[inline]
fn corner(x: f64, y: f64, gradient_index: u8) -> f64 {
    let t = 0.5 - x * x - y * y;
    if t < 0.0 {
        0.0
    } else {
        let grad = GRADIENTS[usize::from(gradient_index % 12)];
        let t2 = t * t;
        t2 * t2 * (x * f64::from(grad[0]) + y * f64::from(grad[1]))
    }
}

/// Floor to `i32`, faster than `f64::floor` for coordinate magnitudes.
#[inline]
fn fast_floor(x: f64) -> i32 {
    let xi = x as i32;
    if x < f64::from(xi) {
        xi - 1
    } else {
        xi
    }
}
