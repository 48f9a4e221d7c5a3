use crate::random::Random;

/// Xoroshiro128++ generator.
pub struct Xoroshiro {
    seed_lo: u64,
    seed_hi: u64,
}

// Ratios used in the mix functions
const GOLDEN_RATIO_64: u64 = 0x9E37_79B9_7F4A_7C15;
const SILVER_RATIO_64: u64 = 0x6A09_E667_F3BC_C909;

impl Xoroshiro {
    /// Creates a generator from a 64 bit seed, mixing it into 128 bits of state.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        let (lo, hi) = Self::upgrade_seed_to_128_bit(seed);
        let lo = mix_stafford_13(lo);
        let hi = mix_stafford_13(hi);
        Self::new(lo, hi)
    }

    fn new(lo: u64, hi: u64) -> Self {
        let (lo, hi) = if (lo | hi) == 0 {
            (GOLDEN_RATIO_64, SILVER_RATIO_64)
        } else {
            (lo, hi)
        };
        Self {
            seed_lo: lo,
            seed_hi: hi,
        }
    }

    fn upgrade_seed_to_128_bit(seed: u64) -> (u64, u64) {
        let lo = seed ^ SILVER_RATIO_64;
        let hi = lo.wrapping_add(GOLDEN_RATIO_64);
        (lo, hi)
    }

    fn next_random(&mut self) -> u64 {
        let l = self.seed_lo;
        let m = self.seed_hi;
        let n = l.wrapping_add(m).rotate_left(17).wrapping_add(l);
        let m = m ^ l;
        self.seed_lo = l.rotate_left(49) ^ m ^ (m << 21);
        self.seed_hi = m.rotate_left(28);
        n
    }
}

fn mix_stafford_13(z: u64) -> u64 {
    let z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    let z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

impl Random for Xoroshiro {
    fn next_i32(&mut self) -> i32 {
        self.next_random() as i32
    }

    fn next_i32_bounded(&mut self, bound: i32) -> i32 {
        debug_assert!(bound > 0, "bound must be positive");
        let bound = u64::from(bound.max(1).unsigned_abs());
        let mut l = (self.next_i32() as u64) & 0xFFFF_FFFF;
        let mut m = l.wrapping_mul(bound);
        let mut n = m & 0xFFFF_FFFF;
        if n < bound {
            let i = (bound.wrapping_neg() & 0xFFFF_FFFF) % bound;
            while n < i {
                l = (self.next_i32() as u64) & 0xFFFF_FFFF;
                m = l.wrapping_mul(bound);
                n = m & 0xFFFF_FFFF;
            }
        }
        (m >> 32) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = Xoroshiro::from_seed(42);
        let mut b = Xoroshiro::from_seed(42);
        for _ in 0..64 {
            assert_eq!(a.next_i32(), b.next_i32());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = Xoroshiro::from_seed(1);
        let mut b = Xoroshiro::from_seed(2);
        let same = (0..16).filter(|_| a.next_i32() == b.next_i32()).count();
        assert!(same < 16);
    }

    #[test]
    fn test_bounded_stays_in_range() {
        let mut random = Xoroshiro::from_seed(7);
        for bound in [1, 2, 3, 10, 100, 1000] {
            for _ in 0..256 {
                let value = random.next_i32_bounded(bound);
                assert!((0..bound).contains(&value), "{value} not in 0..{bound}");
            }
        }
    }

    #[test]
    fn test_chance_extremes() {
        let mut random = Xoroshiro::from_seed(3);
        for _ in 0..64 {
            assert!(random.chance(10, 10));
            assert!(!random.chance(0, 10));
        }
    }

    #[test]
    fn test_chance_roughly_matches_odds() {
        let mut random = Xoroshiro::from_seed(1234);
        let hits = (0..10_000).filter(|_| random.chance(3, 10)).count();
        assert!((2_500..3_500).contains(&hits), "got {hits} hits");
    }
}
