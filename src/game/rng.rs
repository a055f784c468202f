use crate::config::RNG_FALLBACK_SEED;

/// xorshift32; seeded once from the hardware RNG at boot.
pub struct Rng(u32);

impl Rng {
    pub const fn new(seed: u32) -> Self {
        Self(if seed == 0 { RNG_FALLBACK_SEED } else { seed })
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        x
    }

    /// Uniform-ish value in `0..max`. `max` must be non-zero.
    pub fn below(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}
