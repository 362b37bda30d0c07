use rand::{distributions::Distribution, RngCore};

use crate::{alphabet, Rng};

impl RngCore for &Rng {
    fn next_u32(&mut self) -> u32 {
        (self.u64() >> 32) as _
    }

    fn next_u64(&mut self) -> u64 {
        self.u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.u64().to_ne_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Samples uniformly from [`alphabet::ALPHABET`] with any `rand` generator.
///
/// # Example
/// ```
/// use rand::Rng as _;
/// use usb_benchmark::Alphanumeric36;
///
/// let payload: Vec<u8> = rand::thread_rng()
///     .sample_iter::<u8, _>(Alphanumeric36)
///     .take(128)
///     .collect();
/// assert!(payload.iter().all(u8::is_ascii_alphanumeric));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Alphanumeric36;

impl Distribution<u8> for Alphanumeric36 {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        alphabet::ALPHABET[rng.gen_range(0..alphabet::ALPHABET.len())]
    }
}

impl Distribution<char> for Alphanumeric36 {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> char {
        char::from(<Self as Distribution<u8>>::sample(self, rng))
    }
}
