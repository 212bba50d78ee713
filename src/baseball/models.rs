use std::fmt;
use serde::{Deserialize, Serialize};

use crate::baseball::error::{InvalidInputError, InvalidInputReason};

/// Number of digits in a secret and in every guess.
pub const NUMBER_LENGTH: usize = 3;

/// Strike count that ends a round.
pub const WINNING_STRIKES: u8 = NUMBER_LENGTH as u8;

// ---------------------------------------------------------------------------
// Digits
// ---------------------------------------------------------------------------

/// Single digit in 1..=9. Zero never appears in secrets or guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 9;

    pub fn new(value: u8) -> Result<Self, InvalidInputError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Digit(value))
        } else {
            Err(InvalidInputReason::DigitOutOfRange { value }.into())
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Digit {
    type Error = InvalidInputError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Digit::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Write digits side by side, e.g. "123".
fn write_digits(f: &mut fmt::Formatter<'_>, digits: &[Digit]) -> fmt::Result {
    for d in digits {
        write!(f, "{}", d)?;
    }
    Ok(())
}

/// Combine digits into one integer, first digit most significant.
fn digits_to_number(digits: &[Digit]) -> u32 {
    digits.iter().fold(0, |acc, d| acc * 10 + u32::from(d.value()))
}

// ---------------------------------------------------------------------------
// Secret / guess
// ---------------------------------------------------------------------------

/// The hidden target of one round: three distinct digits, fixed once drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SecretNumber {
    digits: [Digit; NUMBER_LENGTH],
}

impl SecretNumber {
    /// Build a secret from digits, rejecting repeats.
    pub fn from_digits(digits: [Digit; NUMBER_LENGTH]) -> Result<Self, InvalidInputError> {
        if let Some(digit) = first_duplicate(&digits) {
            return Err(InvalidInputReason::DuplicateDigit { digit: digit.value() }.into());
        }
        Ok(SecretNumber { digits })
    }

    pub fn digits(&self) -> &[Digit; NUMBER_LENGTH] {
        &self.digits
    }

    pub fn contains(&self, digit: Digit) -> bool {
        self.digits.contains(&digit)
    }

    /// Integer form, e.g. 123.
    pub fn as_number(&self) -> u32 {
        digits_to_number(&self.digits)
    }
}

impl fmt::Display for SecretNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_digits(f, &self.digits)
    }
}

/// A validated player guess. Only [`validate_guess`](crate::baseball::validator::validate_guess)
/// creates one, so every `Guess` holds three distinct digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Guess {
    digits: [Digit; NUMBER_LENGTH],
}

impl Guess {
    pub(crate) fn from_validated(digits: [Digit; NUMBER_LENGTH]) -> Self {
        Guess { digits }
    }

    pub fn digits(&self) -> &[Digit; NUMBER_LENGTH] {
        &self.digits
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_digits(f, &self.digits)
    }
}

/// A guess has the secret's shape, so it can stand in as one.
impl From<Guess> for SecretNumber {
    fn from(guess: Guess) -> Self {
        SecretNumber { digits: guess.digits }
    }
}

pub(crate) fn first_duplicate(digits: &[Digit]) -> Option<Digit> {
    digits
        .iter()
        .enumerate()
        .find(|&(i, d)| digits[..i].contains(d))
        .map(|(_, d)| *d)
}

// ---------------------------------------------------------------------------
// Round results and decisions
// ---------------------------------------------------------------------------

/// Strike/ball count for one guess. `strikes + balls` never exceeds 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreResult {
    pub strikes: u8,
    pub balls: u8,
}

impl ScoreResult {
    pub fn new(strikes: u8, balls: u8) -> Self {
        ScoreResult { strikes, balls }
    }

    /// Digits of the guess that appear in the secret at all.
    pub fn matched(self) -> u8 {
        self.strikes + self.balls
    }

    /// No strikes and no balls.
    pub fn is_nothing(self) -> bool {
        self.matched() == 0
    }

    pub fn is_solved(self) -> bool {
        self.strikes == WINNING_STRIKES
    }
}

/// What the player chose after solving a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RestartOutcome {
    Restart,
    Exit,
}

/// Controller state. `Terminated` is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameState {
    AwaitingGuess,
    Solved,
    AwaitingRestartDecision,
    Terminated,
}

impl GameState {
    /// States in which a restart choice ("1"/"2") is accepted.
    pub fn accepts_restart_choice(self) -> bool {
        matches!(self, GameState::Solved | GameState::AwaitingRestartDecision)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameState::AwaitingGuess           => "awaiting a guess",
            GameState::Solved                  => "solved",
            GameState::AwaitingRestartDecision => "awaiting a restart decision",
            GameState::Terminated              => "terminated",
        };
        write!(f, "{}", s)
    }
}
