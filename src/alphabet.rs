//! The 36-symbol alphabet filler payloads are drawn from.

use crate::rng::Rng;

/// Uppercase ASCII letters followed by the decimal digits.
pub const ALPHABET: [u8; 36] = *b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Returns one symbol drawn uniformly from [`ALPHABET`].
///
/// # Example
/// ```
/// # use usb_benchmark::{alphabet, Rng};
/// let rng = Rng::new();
/// assert!(alphabet::contains(alphabet::sample(&rng)));
/// ```
#[inline]
pub fn sample(rng: &Rng) -> u8 {
    ALPHABET[rng.bounded(0..ALPHABET.len())]
}

/// Overwrites every byte of `data` with an independent draw from [`ALPHABET`].
pub fn fill(rng: &Rng, data: &mut [u8]) {
    for byte in data.iter_mut() {
        *byte = sample(rng);
    }
}

/// Returns `true` if `byte` is one of the symbols in [`ALPHABET`].
#[inline]
pub fn contains(byte: u8) -> bool {
    byte.is_ascii_uppercase() || byte.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_matches_membership_test() {
        assert_eq!(ALPHABET.len(), 36);
        assert!(ALPHABET.iter().all(|&b| contains(b)));
        let members = (0..=u8::MAX).filter(|&b| contains(b)).count();
        assert_eq!(members, ALPHABET.len());
        assert!(!contains(b';'));
        assert!(!contains(b'a'));
    }

    #[test]
    fn fill_uses_only_alphabet_symbols() {
        let rng = Rng::new();
        let mut buffer = [0u8; 4096];
        fill(&rng, &mut buffer);
        assert!(buffer.iter().all(|&b| contains(b)));
    }

    #[test]
    fn draws_are_roughly_uniform() {
        // 10_000 expected hits per symbol, standard deviation is about 98
        const DRAWS: usize = 360_000;
        let rng = Rng::new();
        let mut counts = [0usize; 36];
        for _ in 0..DRAWS {
            let symbol = sample(&rng);
            let index = ALPHABET.iter().position(|&b| b == symbol).unwrap();
            counts[index] += 1;
        }
        for (index, &count) in counts.iter().enumerate() {
            assert!(
                (9_000..=11_000).contains(&count),
                "symbol {} drawn {count} times",
                ALPHABET[index] as char
            );
        }
    }
}
