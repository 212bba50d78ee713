//! Game-loop state machine.
//!
//! ```text
//!                 guess (< 3 strikes)
//!                 ┌──────────┐
//!                 ▼          │
//! start ──▶ AwaitingGuess ───┘
//!              ▲      │ guess (3 strikes)
//!          "1" │      ▼
//!              ├── Solved ── begin_restart_decision ──▶ AwaitingRestartDecision
//!              │      │ "2"                                  │ "1" / "2"
//!              │      ▼                                      │
//!              │  Terminated ◀───────────────────────────────┘
//!              └─────────────────────────────────────────────┘
//! ```
//!
//! Invalid input in any state returns [`InvalidInputError`] and leaves the
//! state untouched; the caller re-prompts.

use rand::rngs::StdRng;
use tracing::{debug, info, instrument, trace};

use crate::baseball::error::{InvalidInputError, InvalidInputReason};
use crate::baseball::generator::{generate_secret, DigitSource, RandomDigits};
use crate::baseball::models::{GameState, RestartOutcome, ScoreResult, SecretNumber};
use crate::baseball::scoring::Scoring;
use crate::baseball::validator::{validate_guess, validate_restart_choice};

/// What the console driver needs from a game.
pub trait GameController {
    /// Current state.
    fn state(&self) -> GameState;

    /// True while the current round is still waiting for a correct guess.
    fn is_still_wrong(&self) -> bool {
        self.state() == GameState::AwaitingGuess
    }

    /// Validate and score one guess, advancing to `Solved` on three strikes.
    fn process_guess(&mut self, raw: &str) -> Result<ScoreResult, InvalidInputError>;

    /// Mark that the win was shown and the restart prompt is next.
    fn begin_restart_decision(&mut self);

    /// Apply the player's choice after solving: `"1"` restarts, `"2"` exits.
    fn process_restart_decision(&mut self, raw: &str) -> Result<RestartOutcome, InvalidInputError>;
}

/// Standard controller: one secret per round, drawn from `D`.
#[derive(Debug)]
pub struct BaseballController<D: DigitSource = RandomDigits<StdRng>> {
    source: D,
    scoring: Scoring,
    state: GameState,
    round: u32,
    attempts: u32,
}

impl BaseballController<RandomDigits<StdRng>> {
    /// Controller with a seeded RNG, or OS entropy when `seed` is `None`.
    pub fn with_seed(seed: Option<u64>) -> Self {
        Self::new(RandomDigits::from_seed(seed))
    }
}

impl<D: DigitSource> BaseballController<D> {
    /// Start the first round with a secret drawn from `source`.
    pub fn new(mut source: D) -> Self {
        let scoring = Scoring::new(generate_secret(&mut source));
        debug!(round = 1, "round started");
        trace!(secret = %scoring.secret(), "secret drawn");
        BaseballController {
            source,
            scoring,
            state: GameState::AwaitingGuess,
            round: 1,
            attempts: 0,
        }
    }

    pub fn secret(&self) -> &SecretNumber {
        self.scoring.secret()
    }

    /// 1-based round number; increments on every restart.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Valid guesses scored in the current round.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    fn reject_in_current_state(&self) -> InvalidInputError {
        InvalidInputReason::UnexpectedInput { state: self.state }.into()
    }

    fn restart(&mut self) {
        self.scoring = Scoring::new(generate_secret(&mut self.source));
        self.round += 1;
        self.attempts = 0;
        self.state = GameState::AwaitingGuess;
        debug!(round = self.round, "round started");
        trace!(secret = %self.scoring.secret(), "secret drawn");
    }
}

impl<D: DigitSource> GameController for BaseballController<D> {
    fn state(&self) -> GameState {
        self.state
    }

    #[instrument(skip(self), fields(round = self.round))]
    fn process_guess(&mut self, raw: &str) -> Result<ScoreResult, InvalidInputError> {
        if self.state != GameState::AwaitingGuess {
            return Err(self.reject_in_current_state());
        }
        let guess = validate_guess(raw)?;
        let result = self.scoring.score(&guess);
        self.attempts += 1;
        debug!(strikes = result.strikes, balls = result.balls, "guess scored");

        if result.is_solved() {
            self.state = GameState::Solved;
            info!(round = self.round, attempts = self.attempts, "secret solved");
        }
        Ok(result)
    }

    fn begin_restart_decision(&mut self) {
        if self.state == GameState::Solved {
            self.state = GameState::AwaitingRestartDecision;
        }
    }

    #[instrument(skip(self), fields(state = %self.state))]
    fn process_restart_decision(&mut self, raw: &str) -> Result<RestartOutcome, InvalidInputError> {
        if !self.state.accepts_restart_choice() {
            return Err(self.reject_in_current_state());
        }
        let outcome = validate_restart_choice(raw)?;
        match outcome {
            RestartOutcome::Restart => self.restart(),
            RestartOutcome::Exit => {
                self.state = GameState::Terminated;
                info!(rounds = self.round, "game terminated");
            }
        }
        Ok(outcome)
    }
}
