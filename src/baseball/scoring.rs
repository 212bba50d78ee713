use crate::baseball::models::{Guess, ScoreResult, SecretNumber};

/// Scores guesses against one secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoring {
    secret: SecretNumber,
}

impl Scoring {
    pub fn new(secret: SecretNumber) -> Self {
        Scoring { secret }
    }

    pub fn secret(&self) -> &SecretNumber {
        &self.secret
    }

    /// Position-then-membership scan: an equal digit at the same index is a
    /// strike, otherwise a digit present anywhere in the secret is a ball.
    pub fn score(&self, guess: &Guess) -> ScoreResult {
        let secret = self.secret.digits();
        let mut result = ScoreResult::default();
        for (i, &digit) in guess.digits().iter().enumerate() {
            if secret[i] == digit {
                result.strikes += 1;
            } else if self.secret.contains(digit) {
                result.balls += 1;
            }
        }
        result
    }

    /// True if every digit is a strike.
    pub fn is_solved(&self, guess: &Guess) -> bool {
        self.score(guess).is_solved()
    }
}
