// math/rng.rs
//
// Seedable pseudo-random number generator (xorshift64).
// Deterministic and injectable: callers construct and own the generator,
// so gameplay code stays reproducible under a fixed seed.

/// Seedable pseudo-random number generator (xorshift64).
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generate a random number in [0, upper_bound).
    pub fn next_int(&mut self, upper_bound: u32) -> u32 {
        (self.next_u64() % upper_bound as u64) as u32
    }

    /// Generate a random integer in min..=max, inclusive of both bounds.
    ///
    /// Panics if `min >= max`: empty and inverted ranges are precondition
    /// violations, never silently reordered.
    pub fn range_int(&mut self, min: i32, max: i32) -> i32 {
        assert!(min < max, "range_int requires min < max, got {min}..={max}");
        let span = (max as i64 - min as i64) as u64 + 1;
        (min as i64 + (self.next_u64() % span) as i64) as i32
    }

    /// Generate a random float in [0.0, 1.0], inclusive of both ends.
    pub fn unit(&mut self) -> f64 {
        // 53 significant bits, scaled so both endpoints are reachable.
        (self.next_u64() >> 11) as f64 / ((1u64 << 53) - 1) as f64
    }

    /// Generate a random float in min..=max, inclusive of both bounds.
    ///
    /// Panics if `min >= max`, same contract as [`Rng::range_int`].
    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        assert!(min < max, "range requires min < max, got {min}..={max}");
        self.unit() * (max - min) + min
    }

    /// Randomly returns either 1.0 or -1.0.
    pub fn sign(&mut self) -> f64 {
        if self.next_int(2) == 0 {
            1.0
        } else {
            -1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_deterministic() {
        let mut rng1 = Rng::new(42);
        let mut rng2 = Rng::new(42);
        for _ in 0..10 {
            assert_eq!(rng1.next_int(1000), rng2.next_int(1000));
        }
    }

    #[test]
    fn rng_zero_seed_handled() {
        let mut rng = Rng::new(0);
        // Should not panic or loop forever
        let _ = rng.next_int(100);
    }

    #[test]
    fn unit_stays_in_closed_interval() {
        let mut rng = Rng::new(7);
        for _ in 0..10_000 {
            let value = rng.unit();
            assert!((0.0..=1.0).contains(&value), "out of range: {value}");
        }
    }

    #[test]
    fn range_respects_inclusive_bounds() {
        let mut rng = Rng::new(99);
        for _ in 0..10_000 {
            let value = rng.range(-3.0, 3.0);
            assert!((-3.0..=3.0).contains(&value));
        }
    }

    #[test]
    fn range_int_covers_both_endpoints() {
        let mut rng = Rng::new(5);
        let mut saw_min = false;
        let mut saw_max = false;
        for _ in 0..10_000 {
            let value = rng.range_int(-2, 2);
            assert!((-2..=2).contains(&value));
            saw_min |= value == -2;
            saw_max |= value == 2;
        }
        assert!(saw_min && saw_max);
    }

    #[test]
    #[should_panic(expected = "min < max")]
    fn range_rejects_inverted_bounds() {
        let mut rng = Rng::new(1);
        let _ = rng.range(2.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "min < max")]
    fn range_int_rejects_empty_range() {
        let mut rng = Rng::new(1);
        let _ = rng.range_int(3, 3);
    }

    #[test]
    fn sign_returns_only_unit_values() {
        let mut rng = Rng::new(12);
        let mut positive = 0;
        let mut negative = 0;
        for _ in 0..1000 {
            match rng.sign() {
                s if s == 1.0 => positive += 1,
                s if s == -1.0 => negative += 1,
                s => panic!("unexpected sign value {s}"),
            }
        }
        // Roughly even split; generous margins keep this deterministic-safe.
        assert!(positive > 300 && negative > 300);
    }
}
