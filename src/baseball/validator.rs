//! Parsing of raw console text into guesses and restart choices.
//!
//! Both functions are pure and take the line exactly as typed, minus its line
//! terminator. Leading or trailing spaces count as characters.

use crate::baseball::error::{InvalidInputError, InvalidInputReason};
use crate::baseball::models::{first_duplicate, Digit, Guess, RestartOutcome, NUMBER_LENGTH};

/// Restart choice that starts a new round.
pub const RESTART_CHOICE: &str = "1";
/// Restart choice that ends the program.
pub const EXIT_CHOICE: &str = "2";

/// Parse a guess like `"386"`.
///
/// Rules are checked in order and the first broken one is reported: length,
/// then each character (non-digit, zero), then repeated digits.
pub fn validate_guess(raw: &str) -> Result<Guess, InvalidInputError> {
    let found = raw.chars().count();
    if found != NUMBER_LENGTH {
        return Err(InvalidInputReason::WrongLength { found }.into());
    }

    let mut digits = Vec::with_capacity(NUMBER_LENGTH);
    for ch in raw.chars() {
        digits.push(parse_digit(ch)?);
    }

    if let Some(digit) = first_duplicate(&digits) {
        return Err(InvalidInputReason::DuplicateDigit { digit: digit.value() }.into());
    }

    Ok(Guess::from_validated([digits[0], digits[1], digits[2]]))
}

fn parse_digit(ch: char) -> Result<Digit, InvalidInputError> {
    match ch.to_digit(10) {
        Some(0) => Err(InvalidInputReason::ContainsZero.into()),
        // to_digit(10) yields 0..=9, so the cast is lossless
        Some(value) => Digit::new(value as u8),
        None => Err(InvalidInputReason::NonDigit { ch }.into()),
    }
}

/// Parse the answer to the restart prompt: `"1"` restarts, `"2"` exits.
pub fn validate_restart_choice(raw: &str) -> Result<RestartOutcome, InvalidInputError> {
    match raw {
        RESTART_CHOICE => Ok(RestartOutcome::Restart),
        EXIT_CHOICE    => Ok(RestartOutcome::Exit),
        other => Err(InvalidInputReason::InvalidRestartChoice { input: other.to_string() }.into()),
    }
}
