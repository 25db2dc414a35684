//! # Simplex Noise
//!
//! Seeded 2D simplex noise. Given the same `TextureSeed`, the output is
//! identical on every platform.

/// Seed for texture generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureSeed(u64);

impl TextureSeed {
    /// Creates a seed.
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Returns the raw seed value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Derives an independent seed for one noise channel.
    #[inline]
    #[must_use]
    pub const fn derive(self, channel: u64) -> Self {
        let mut hash = self.0 ^ channel;
        hash = hash.wrapping_mul(0x517c_c1b7_2722_0a95);
        hash ^= hash >> 32;
        Self(hash)
    }
}

impl Default for TextureSeed {
    fn default() -> Self {
        Self(0x0EA2_7400_51DE_BA11)
    }
}

/// Gradient directions for 2D simplex corners.
const GRADIENTS: [[f64; 2]; 12] = [
    [1.0, 0.0],
    [1.0, 1.0],
    [0.0, 1.0],
    [-1.0, 1.0],
    [-1.0, 0.0],
    [-1.0, -1.0],
    [0.0, -1.0],
    [1.0, -1.0],
    [1.0, 0.0],
    [0.0, 1.0],
    [-1.0, 0.0],
    [0.0, -1.0],
];

/// (sqrt(3) - 1) / 2
const SKEW: f64 = 0.366_025_403_784_439;
/// (3 - sqrt(3)) / 6
const UNSKEW: f64 = 0.211_324_865_405_187;

/// 2D simplex noise with values in `[-1, 1]`.
///
/// ```rust
/// use pixelate_procedural::{SimplexNoise, TextureSeed};
///
/// let noise = SimplexNoise::new(TextureSeed::new(42));
/// let v = noise.octaved(3.5, 1.25, 5, 0.5, 2.0);
/// assert!((-1.0..=1.0).contains(&v));
/// ```
pub struct SimplexNoise {
    /// 256-entry shuffle, stored twice so `perm[i + perm[j]]` never wraps.
    perm: [u8; 512],
}

impl SimplexNoise {
    /// Builds the permutation for `seed`.
    #[must_use]
    pub fn new(seed: TextureSeed) -> Self {
        let mut perm = [0u8; 512];
        for (i, p) in perm.iter_mut().take(256).enumerate() {
            *p = i as u8;
        }

        // Fisher-Yates driven by xorshift64. A zero state would stay zero.
        let mut state = seed.value() | 1;
        for i in (1..256usize).rev() {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let j = (state % (i as u64 + 1)) as usize;
            perm.swap(i, j);
        }
        perm.copy_within(0..256, 256);

        Self { perm }
    }

    #[inline]
    fn hash(&self, i: usize, j: usize) -> usize {
        usize::from(self.perm[i + usize::from(self.perm[j])]) % GRADIENTS.len()
    }

    /// Samples noise at `(x, y)`.
    #[must_use]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let s = (x + y) * SKEW;
        let i = (x + s).floor();
        let j = (y + s).floor();

        let t = (i + j) * UNSKEW;
        let x0 = x - (i - t);
        let y0 = y - (j - t);

        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - f64::from(i1) + UNSKEW;
        let y1 = y0 - f64::from(j1) + UNSKEW;
        let x2 = x0 - 1.0 + 2.0 * UNSKEW;
        let y2 = y0 - 1.0 + 2.0 * UNSKEW;

        let ii = (i as i64 & 255) as usize;
        let jj = (j as i64 & 255) as usize;

        let n0 = corner(x0, y0, self.hash(ii, jj));
        let n1 = corner(x1, y1, self.hash(ii + i1 as usize, jj + j1 as usize));
        let n2 = corner(x2, y2, self.hash(ii + 1, jj + 1));

        (70.0 * (n0 + n1 + n2)).clamp(-1.0, 1.0)
    }

    /// Fractal sum of `octaves` layers, normalized back to `[-1, 1]`.
    ///
    /// Each layer scales amplitude by `persistence` and frequency by
    /// `lacunarity`.
    #[must_use]
    pub fn octaved(&self, x: f64, y: f64, octaves: u32, persistence: f64, lacunarity: f64) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut norm = 0.0;

        for _ in 0..octaves.max(1) {
            total += self.sample(x * frequency, y * frequency) * amplitude;
            norm += amplitude;
            amplitude *= persistence;
            frequency *= lacunarity;
        }

        total / norm
    }

    /// Octaved noise that repeats every `period` along x.
    ///
    /// Blends the field at `x` with the field one period to the left, so the
    /// value at `x = period` equals the value at `x = 0`.
    #[must_use]
    pub fn octaved_wrapped(
        &self,
        x: f64,
        y: f64,
        period: f64,
        octaves: u32,
        persistence: f64,
        lacunarity: f64,
    ) -> f64 {
        let w = (x / period).rem_euclid(1.0);
        let x = w * period;
        let here = self.octaved(x, y, octaves, persistence, lacunarity);
        let left = self.octaved(x - period, y, octaves, persistence, lacunarity);
        here * (1.0 - w) + left * w
    }
}

#[inline]
fn corner(x: f64, y: f64, gradient: usize) -> f64 {
    let t = 0.5 - x * x - y * y;
    if t < 0.0 {
        return 0.0;
    }
    let [gx, gy] = GRADIENTS[gradient];
    let t2 = t * t;
    t2 * t2 * (x * gx + y * gy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let a = SimplexNoise::new(TextureSeed::new(12345));
        let b = SimplexNoise::new(TextureSeed::new(12345));
        for i in 0..100 {
            let (x, y) = (f64::from(i) * 0.1, f64::from(i) * 0.17);
            assert_eq!(a.sample(x, y), b.sample(x, y));
        }
    }

    #[test]
    fn test_seeds_differ() {
        let a = SimplexNoise::new(TextureSeed::new(1));
        let b = SimplexNoise::new(TextureSeed::new(2));
        let differs = (0..50).any(|i| {
            let x = f64::from(i) * 0.37 + 0.1;
            a.sample(x, x * 0.5) != b.sample(x, x * 0.5)
        });
        assert!(differs);
    }

    #[test]
    fn test_range() {
        let noise = SimplexNoise::new(TextureSeed::new(42));
        for i in 0..10_000 {
            let x = f64::from(i) * 0.1 - 500.0;
            let y = f64::from(i) * 0.13 - 650.0;
            let v = noise.sample(x, y);
            assert!((-1.0..=1.0).contains(&v), "{v} at ({x}, {y})");
            let o = noise.octaved(x, y, 3, 0.5, 2.0);
            assert!((-1.0..=1.0).contains(&o));
        }
    }

    #[test]
    fn test_continuity() {
        let noise = SimplexNoise::new(TextureSeed::new(42));
        let v = noise.sample(10.0, 10.0);
        assert!((v - noise.sample(10.001, 10.0)).abs() < 0.01);
        assert!((v - noise.sample(10.0, 10.001)).abs() < 0.01);
    }

    #[test]
    fn test_wrapped_edges_match() {
        let noise = SimplexNoise::new(TextureSeed::new(7));
        for i in 0..20 {
            let y = f64::from(i) * 0.3;
            let left = noise.octaved_wrapped(0.0, y, 8.0, 4, 0.5, 2.0);
            let right = noise.octaved_wrapped(8.0, y, 8.0, 4, 0.5, 2.0);
            assert_eq!(left, right);
        }
    }

    #[test]
    fn test_seed_derivation() {
        let base = TextureSeed::new(42);
        assert_ne!(base.derive(1), base.derive(2));
        assert_eq!(base.derive(1), base.derive(1));
        assert_ne!(base.derive(1), base);
    }
}
