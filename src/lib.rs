//! # number_baseball
//!
//! Console "number baseball": the program hides a 3-digit number with
//! distinct digits 1-9 and the player guesses until every digit is a strike.
//!
//! ## How it works
//!
//! 1. A [`BaseballController`] draws a secret from a [`DigitSource`]
//!    (seeded or entropy-backed [`RandomDigits`]).
//! 2. Each raw guess goes through [`validate_guess`] and is scored by
//!    [`Scoring`]: same digit at the same position is a strike, a digit
//!    elsewhere in the secret is a ball.
//! 3. Three strikes move the controller to [`GameState::Solved`]; the player
//!    then restarts with `"1"` or exits with `"2"`.
//! 4. [`GameView`] runs the prompt/read/print loop over any `BufRead`/`Write`.
//!
//! ## Quick start
//!
//! ```rust
//! use number_baseball::{validate_guess, ScoreResult, Scoring};
//!
//! let secret = validate_guess("123").unwrap().into();
//! let scoring = Scoring::new(secret);
//!
//! let result = scoring.score(&validate_guess("213").unwrap());
//! assert_eq!(result, ScoreResult::new(1, 2));
//! assert_eq!(result.to_string(), "1스트라이크 2볼");
//! ```
//!
//! Driving a full game in memory:
//!
//! ```rust
//! use std::io::Cursor;
//! use number_baseball::{BaseballController, GameController, GameState, GameView};
//!
//! let controller = BaseballController::with_seed(Some(7));
//! let answer = controller.secret().to_string();
//! let input = format!("{answer}\n2\n");
//!
//! let mut view = GameView::new(controller, Cursor::new(input), Vec::new());
//! view.start().unwrap();
//! assert_eq!(view.controller().state(), GameState::Terminated);
//! ```

pub mod baseball;
pub mod config;

pub use baseball::{
    generate_secret, render_score, validate_guess, validate_restart_choice, BaseballController,
    Digit, DigitSource, GameController, GameState, GameView, Guess, InvalidInputError,
    InvalidInputReason, RandomDigits, RestartOutcome, ScoreResult, Scoring, SecretNumber,
    ViewError, NUMBER_LENGTH,
};
pub use config::{load_config, ConfigError, GameConfig};

#[cfg(test)]
mod tests;
