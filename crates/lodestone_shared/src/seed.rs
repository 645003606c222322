//! World seed representation.
//!
//! ## Determinism Guarantee
//!
//! A [`Seed`] fully determines the generated world for a given version.
//! Derived sub-seeds are pure functions of the base seed, so every noise
//! channel and placement stream is reproducible on any platform.

use serde::{Deserialize, Serialize};

/// A 64-bit world seed.
///
/// All procedural generation derives from this value. The total domain
/// `0..=u64::MAX` is valid; there are no reserved seeds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seed(u64);

impl Seed {
    /// Creates a new seed.
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

    /// Returns the seed reinterpreted as a signed 64-bit value.
    ///
    /// Region placement hashing works in signed arithmetic.
    #[inline]
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0 as i64
    }

    /// Derives a sub-seed for a specific purpose (e.g. the humidity
    /// noise channel).
    ///
    /// Uses multiplicative hash mixing to create independent streams
    /// from one seed.
    #[inline]
    #[must_use]
    pub const fn derive(self, purpose: u64) -> Self {
        let mut hash = self.0;
        hash ^= purpose;
        hash = hash.wrapping_mul(0x517c_c1b7_2722_0a95);
        hash ^= hash >> 32;
        Self(hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivation_is_stable() {
        let base = Seed::new(42);
        assert_eq!(base.derive(1), base.derive(1), "same purpose, same stream");
        assert_ne!(base.derive(1), base.derive(2), "purposes must not collide");
        assert_ne!(base.derive(1), base, "derived seed must differ from base");
    }

    #[test]
    fn test_full_domain_round_trip() {
        for value in [0, 1, u64::MAX, 0x8000_0000_0000_0000] {
            assert_eq!(Seed::new(value).value(), value);
        }
    }

    #[test]
    fn test_signed_view() {
        assert_eq!(Seed::new(u64::MAX).as_i64(), -1);
        assert_eq!(Seed::new(7).as_i64(), 7);
    }
}
