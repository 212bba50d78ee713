//! Crate-level tests for `number_baseball`.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Scoring properties | Bounds, self-score, symmetric match count over every secret/guess pair |
//! | Validation | Rejected and accepted sample inputs |
//! | Controller | Solve, restart and exit transitions with a scripted secret |
//! | End-to-end | Full console sessions through `GameView` |
//! | Determinism | Seeded controllers replay the same secrets |

use std::io::Cursor;

use crate::baseball::generator::ScriptedDigits;
use crate::{
    validate_guess, BaseballController, GameController, GameState, GameView, Guess,
    InvalidInputReason, RestartOutcome, ScoreResult, Scoring, SecretNumber,
};

// ── helpers ──────────────────────────────────────────────────────────────────

/// Every valid 3-digit value with distinct digits 1-9 (504 of them).
fn all_numbers() -> Vec<Guess> {
    let mut out = Vec::with_capacity(504);
    for a in 1..=9u8 {
        for b in 1..=9u8 {
            for c in 1..=9u8 {
                if a != b && b != c && a != c {
                    out.push(validate_guess(&format!("{a}{b}{c}")).unwrap());
                }
            }
        }
    }
    out
}

fn score(secret: Guess, guess: &Guess) -> ScoreResult {
    Scoring::new(SecretNumber::from(secret)).score(guess)
}

/// Controller whose secrets are 123, then 456.
fn scripted_controller() -> BaseballController<ScriptedDigits> {
    BaseballController::new(ScriptedDigits::new(&[1, 2, 3, 4, 5, 6]))
}

/// Run a whole console session against `scripted_controller` and return its output.
fn play(input: &str) -> String {
    play_bytes(input.as_bytes())
}

fn play_bytes(input: &[u8]) -> String {
    let mut view = GameView::new(scripted_controller(), Cursor::new(input.to_vec()), Vec::new());
    view.start().unwrap();
    assert_eq!(view.controller().state(), GameState::Terminated);
    String::from_utf8(view.into_writer()).unwrap()
}

// ── scoring properties ───────────────────────────────────────────────────────

#[test]
fn strikes_plus_balls_never_exceed_three() {
    let numbers = all_numbers();
    assert_eq!(numbers.len(), 504);
    for &secret in &numbers {
        for guess in &numbers {
            let r = score(secret, guess);
            assert!(r.matched() <= 3, "{secret} vs {guess}: {r:?}");
        }
    }
}

#[test]
fn guessing_the_secret_is_all_strikes() {
    for secret in all_numbers() {
        assert_eq!(score(secret, &secret), ScoreResult::new(3, 0), "{secret}");
    }
}

#[test]
fn matched_digit_count_is_symmetric() {
    let numbers = all_numbers();
    for &s in &numbers {
        for &g in &numbers {
            assert_eq!(
                score(s, &g).matched(),
                score(g, &s).matched(),
                "{s} vs {g}",
            );
        }
    }
}

#[test]
fn only_the_secret_itself_solves() {
    let secret = validate_guess("369").unwrap();
    let scoring = Scoring::new(secret.into());
    let solving: Vec<Guess> = all_numbers().into_iter().filter(|g| scoring.is_solved(g)).collect();
    assert_eq!(solving, vec![secret]);
}

// ── validation ───────────────────────────────────────────────────────────────

#[test]
fn validator_rejects_sample_inputs() {
    let cases = [
        ("12", InvalidInputReason::WrongLength { found: 2 }),
        ("1234", InvalidInputReason::WrongLength { found: 4 }),
        ("1a3", InvalidInputReason::NonDigit { ch: 'a' }),
        ("120", InvalidInputReason::ContainsZero),
        ("112", InvalidInputReason::DuplicateDigit { digit: 1 }),
    ];
    for (raw, expected) in cases {
        assert_eq!(validate_guess(raw).unwrap_err().reason, expected, "input {raw:?}");
    }
}

#[test]
fn validator_accepts_sample_inputs() {
    for raw in ["123", "987"] {
        assert_eq!(validate_guess(raw).unwrap().to_string(), raw);
    }
}

// ── controller ───────────────────────────────────────────────────────────────

#[test]
fn fixed_secret_scenario() {
    let mut c = scripted_controller();
    assert_eq!(c.process_guess("456").unwrap(), ScoreResult::new(0, 0));
    assert_eq!(c.process_guess("213").unwrap(), ScoreResult::new(1, 2));
    assert!(c.is_still_wrong());
    assert_eq!(c.process_guess("123").unwrap(), ScoreResult::new(3, 0));
    assert_eq!(c.state(), GameState::Solved);
    assert!(!c.is_still_wrong());
    assert_eq!(c.attempts(), 3);
}

#[test]
fn restart_then_exit() {
    let mut c = scripted_controller();
    c.process_guess("123").unwrap();
    assert!(c.process_restart_decision("9").is_err());
    assert_eq!(c.state(), GameState::Solved);

    assert_eq!(c.process_restart_decision("1").unwrap(), RestartOutcome::Restart);
    assert_eq!(c.state(), GameState::AwaitingGuess);
    assert_eq!(c.process_guess("123").unwrap(), ScoreResult::new(0, 0));
    assert_eq!(c.process_guess("456").unwrap(), ScoreResult::new(3, 0));

    assert_eq!(c.process_restart_decision("2").unwrap(), RestartOutcome::Exit);
    assert_eq!(c.state(), GameState::Terminated);
    assert_eq!(c.round(), 2);
}

// ── end-to-end ───────────────────────────────────────────────────────────────

#[test]
fn console_session_single_round() {
    let output = play("456\n213\n123\n2\n");
    let expected = "\
숫자 야구 게임을 시작합니다.
숫자를 입력해주세요 : 낫싱
숫자를 입력해주세요 : 1스트라이크 2볼
숫자를 입력해주세요 : 3스트라이크
3개의 숫자를 모두 맞히셨습니다! 게임 종료
게임을 새로 시작하려면 1, 종료하려면 2를 입력하세요.
";
    assert_eq!(output, expected);
}

#[test]
fn console_session_with_bad_input_and_restart() {
    let output = play("12\n123\n3\n1\n465\n456\n2\n");
    let expected = "\
숫자 야구 게임을 시작합니다.
숫자를 입력해주세요 : 잘못된 입력입니다: expected 3 characters, got 2
숫자를 입력해주세요 : 3스트라이크
3개의 숫자를 모두 맞히셨습니다! 게임 종료
게임을 새로 시작하려면 1, 종료하려면 2를 입력하세요.
잘못된 입력입니다: '3' is not a restart choice, enter 1 or 2
게임을 새로 시작하려면 1, 종료하려면 2를 입력하세요.
숫자를 입력해주세요 : 1스트라이크 2볼
숫자를 입력해주세요 : 3스트라이크
3개의 숫자를 모두 맞히셨습니다! 게임 종료
게임을 새로 시작하려면 1, 종료하려면 2를 입력하세요.
";
    assert_eq!(output, expected);
}

#[test]
fn console_session_survives_non_utf8_guess() {
    let output = play_bytes(b"\xff\xfe\x01\n123\n2\n");
    let expected = "\
숫자 야구 게임을 시작합니다.
숫자를 입력해주세요 : 잘못된 입력입니다: '\u{FFFD}' is not a digit
숫자를 입력해주세요 : 3스트라이크
3개의 숫자를 모두 맞히셨습니다! 게임 종료
게임을 새로 시작하려면 1, 종료하려면 2를 입력하세요.
";
    assert_eq!(output, expected);
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_replays_same_secrets() {
    let secrets = |seed: u64| -> Vec<u32> {
        let mut c = BaseballController::with_seed(Some(seed));
        let mut out = Vec::new();
        for _ in 0..4 {
            out.push(c.secret().as_number());
            let answer = c.secret().to_string();
            c.process_guess(&answer).unwrap();
            c.process_restart_decision("1").unwrap();
        }
        out
    };
    assert_eq!(secrets(2024), secrets(2024));
}

#[test]
fn entropy_controller_produces_a_valid_secret() {
    let c = BaseballController::with_seed(None);
    let secret = c.secret().to_string();
    assert!(validate_guess(&secret).is_ok(), "secret {secret} must look like a valid guess");
}
