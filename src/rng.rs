use std::{
    cell::Cell,
    ops::{Bound, RangeBounds},
};

/// The increment used to update the state of the RNG. It is coprime to 2^64 and
/// `INCREMENT / 2^64` is approximately `phi - 1`, where `phi` is the golden ratio, so the Weyl
/// sequence has a period of 2^64.
pub(crate) const INCREMENT: u64 = 0x9E3779B97F4A7FFF;

// These constants, like the `INCREMENT` constant, are coprime to 2^64.
const ALPHA: u128 = 0x11F9ADBB8F8DA6FFF;
const BETA: u128 = 0x1E3DF208C6781EFFF;

#[derive(Debug)]
/// A random number generator that can be used in single-threaded contexts without a mutable
/// reference.
///
/// The implementation is based on hashing the Weyl sequence with `wyhash`, adapted from
/// https://github.com/lemire/testingRNG/blob/master/source/wyhash.h.
pub struct Rng {
    /// The current state of the RNG.
    pub(crate) state: Cell<u64>,
}

impl Rng {
    /// Returns a random value of type `T` in the given range.
    ///
    /// # Example
    /// ```
    /// # use usb_benchmark::Rng;
    /// let rng = Rng::new();
    /// let value: usize = rng.bounded(10..20);
    /// assert!((10..20).contains(&value));
    /// ```
    pub fn bounded<T, R>(&self, range: R) -> T
    where
        T: RandomRange<Self>,
        R: RangeBounds<T>,
    {
        T::random_range(self, range)
    }

    /// Initializes a new RNG seeded from `std::hash::RandomState`, so each process draws a
    /// different sequence.
    pub fn new() -> Self {
        let seed = {
            use std::hash::{BuildHasher, RandomState};
            RandomState::new().hash_one(std::process::id())
        };
        let state = Cell::new(seed);
        Self { state }
    }

    /// Returns the next `u64` value from the pseudorandom sequence.
    pub(crate) fn u64(&self) -> u64 {
        let old_state = self.state.get();
        self.state.set(old_state.wrapping_add(INCREMENT));
        wyhash(old_state)
    }
}

#[inline]
pub(crate) fn wyhash(value: u64) -> u64 {
    let mut tmp = (value as u128).wrapping_mul(ALPHA);
    tmp ^= tmp >> 64;
    tmp = tmp.wrapping_mul(BETA);
    ((tmp >> 64) ^ tmp) as _
}

/// A generator of values of type `T`.
pub trait Generator<T> {
    /// Generates a value of type `T`.
    fn generate(&self) -> T;
}

impl Default for Rng {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator<u64> for Rng {
    fn generate(&self) -> u64 {
        self.u64()
    }
}

pub trait RandomRange<G> {
    fn random_range<R>(generator: &G, range: R) -> Self
    where
        R: RangeBounds<Self>;
}

impl<G> RandomRange<G> for usize
where
    G: Generator<u64>,
{
    fn random_range<R>(generator: &G, range: R) -> Self
    where
        R: RangeBounds<Self>,
    {
        let low = match range.start_bound() {
            Bound::Included(&low) => low,
            Bound::Excluded(&low) => low.saturating_add(1),
            Bound::Unbounded => 0,
        };

        assert!(
            range.contains(&low),
            "cannot generate a value from an empty range"
        );
        let width = match range.end_bound() {
            Bound::Included(&high) if high - low < usize::MAX => high - low + 1,
            Bound::Excluded(&high) => high - low,
            Bound::Unbounded if low > 0 => usize::MAX - low + 1,
            // usize is at most 64 bits on every supported target
            _ => return generator.generate() as usize,
        };

        // Lemire's multiply-shift with rejection of the biased low products.
        let width = width as u64;
        let mut x: u64 = generator.generate();
        let mut m = (x as u128) * (width as u128);
        let mut l = m as u64;
        if l < width {
            let t = width.wrapping_neg() % width;
            while l < t {
                x = generator.generate();
                m = (x as u128) * (width as u128);
                l = m as u64;
            }
        }
        (m >> u64::BITS) as usize + low
    }
}
