//! Game core: secret generation, scoring, validation and the game loop.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: digits, secret, guess, score, game state |
//! | `error`      | `InvalidInputError` and the console driver's `ViewError` |
//! | `generator`  | Digit sources and distinct-digit secret generation |
//! | `validator`  | Raw text → `Guess` / `RestartOutcome` |
//! | `scoring`    | Strike/ball counting against one secret |
//! | `controller` | `GameController` trait and the standard state machine |
//! | `format`     | Exact console wording |
//! | `view`       | Prompt/read/print loop over injected I/O |

pub mod controller;
pub mod error;
pub mod format;
pub mod generator;
pub mod models;
pub mod scoring;
pub mod validator;
pub mod view;

pub use controller::{BaseballController, GameController};
pub use error::{InvalidInputError, InvalidInputReason, ViewError};
pub use format::render_score;
pub use generator::{generate_secret, DigitSource, RandomDigits};
pub use models::{
    Digit, GameState, Guess, RestartOutcome, ScoreResult, SecretNumber, NUMBER_LENGTH,
};
pub use scoring::Scoring;
pub use validator::{validate_guess, validate_restart_choice};
pub use view::GameView;
