use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::baseball::models::{Digit, SecretNumber, NUMBER_LENGTH};

/// Source of uniformly random digits in 1..=9.
///
/// Injected into the controller so tests can script the secret.
pub trait DigitSource {
    fn next_digit(&mut self) -> Digit;
}

/// [`DigitSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomDigits<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomDigits<R> {
    pub fn new(rng: R) -> Self {
        RandomDigits { rng }
    }
}

impl RandomDigits<StdRng> {
    /// Seeded source when `seed` is given, OS entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        RandomDigits::new(rng)
    }
}

impl<R: Rng> DigitSource for RandomDigits<R> {
    fn next_digit(&mut self) -> Digit {
        let value = self.rng.gen_range(Digit::MIN..=Digit::MAX);
        // gen_range stays inside MIN..=MAX
        Digit::new(value).unwrap_or_else(|_| unreachable!("digit {value} out of range"))
    }
}

/// Draw digits until `length` distinct ones are collected, in draw order.
///
/// Duplicates are discarded and redrawn. With nine candidates and
/// `length <= 9` this always terminates for a uniform source.
pub fn draw_distinct<D: DigitSource + ?Sized>(source: &mut D, length: usize) -> Vec<Digit> {
    assert!(length <= usize::from(Digit::MAX), "cannot draw {length} distinct digits");
    let mut digits = Vec::with_capacity(length);
    while digits.len() < length {
        let digit = source.next_digit();
        if !digits.contains(&digit) {
            digits.push(digit);
        }
    }
    digits
}

/// Generate a fresh secret: three distinct digits, first drawn is most significant.
pub fn generate_secret<D: DigitSource + ?Sized>(source: &mut D) -> SecretNumber {
    let drawn = draw_distinct(source, NUMBER_LENGTH);
    let digits = [drawn[0], drawn[1], drawn[2]];
    SecretNumber::from_digits(digits)
        .unwrap_or_else(|_| unreachable!("draw_distinct returned repeated digits"))
}

/// Replays a fixed list of digits, cycling when exhausted.
#[cfg(test)]
#[derive(Debug)]
pub(crate) struct ScriptedDigits {
    values: Vec<u8>,
    cursor: usize,
}

#[cfg(test)]
impl ScriptedDigits {
    pub(crate) fn new(values: &[u8]) -> Self {
        assert!(!values.is_empty(), "script needs at least one digit");
        ScriptedDigits { values: values.to_vec(), cursor: 0 }
    }
}

#[cfg(test)]
impl DigitSource for ScriptedDigits {
    fn next_digit(&mut self) -> Digit {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        Digit::new(value).expect("scripted digit must be 1-9")
    }
}
