//! Error types surfaced by the game core and the console driver.
//!
//! Every failure the core can produce is an [`InvalidInputError`]: the player
//! typed something the current state cannot accept. It is always recoverable;
//! the driver re-prompts and the controller state is left untouched.

use derive_more::{Display, Error, From};

use crate::baseball::models::GameState;

/// Which validation rule a piece of input broke.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InvalidInputReason {
    #[display("expected 3 characters, got {found}")]
    WrongLength { found: usize },
    #[display("'{ch}' is not a digit")]
    NonDigit { ch: char },
    #[display("0 is not allowed, use digits 1-9")]
    ContainsZero,
    #[display("digit {digit} is repeated")]
    DuplicateDigit { digit: u8 },
    #[display("digit {value} is outside 1-9")]
    DigitOutOfRange { value: u8 },
    #[display("'{input}' is not a restart choice, enter 1 or 2")]
    InvalidRestartChoice { input: String },
    #[display("input is not accepted while {state}")]
    UnexpectedInput { state: GameState },
}

/// Malformed guess or restart choice.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("{reason}")]
pub struct InvalidInputError {
    #[error(not(source))]
    pub reason: InvalidInputReason,
}

impl InvalidInputError {
    pub fn new(reason: InvalidInputReason) -> Self {
        Self { reason }
    }
}

impl From<InvalidInputReason> for InvalidInputError {
    fn from(reason: InvalidInputReason) -> Self {
        Self::new(reason)
    }
}

/// Failure of the console driver itself, as opposed to bad player input.
#[derive(Debug, Display, Error, From)]
pub enum ViewError {
    #[display("console I/O failed: {_0}")]
    #[from]
    Io(#[error(source)] std::io::Error),
    #[display("input closed before the game finished")]
    InputClosed,
}
