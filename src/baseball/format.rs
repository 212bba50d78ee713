//! Console wording for the game.
//!
//! The view prints only strings built here, so the exact output lives in one
//! place.

use std::fmt;

use crate::baseball::error::InvalidInputError;
use crate::baseball::models::ScoreResult;

pub const START_MESSAGE: &str = "숫자 야구 게임을 시작합니다.";
pub const GUESS_PROMPT: &str = "숫자를 입력해주세요 : ";
pub const WIN_MESSAGE: &str = "3개의 숫자를 모두 맞히셨습니다! 게임 종료";
pub const RESTART_PROMPT: &str = "게임을 새로 시작하려면 1, 종료하려면 2를 입력하세요.";
pub const NOTHING: &str = "낫싱";

/// Render feedback for one guess.
///
/// | strikes | balls | output |
/// |---------|-------|--------|
/// | > 0     | > 0   | `"2스트라이크 1볼"` |
/// | > 0     | 0     | `"1스트라이크"` |
/// | 0       | > 0   | `"3볼"` |
/// | 0       | 0     | `"낫싱"` |
pub fn render_score(result: ScoreResult) -> String {
    match (result.strikes, result.balls) {
        (0, 0) => NOTHING.to_string(),
        (s, 0) => format!("{s}스트라이크"),
        (0, b) => format!("{b}볼"),
        (s, b) => format!("{s}스트라이크 {b}볼"),
    }
}

/// Message shown before re-prompting after bad input.
pub fn render_invalid_input(err: &InvalidInputError) -> String {
    format!("잘못된 입력입니다: {err}")
}

impl fmt::Display for ScoreResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_score(*self))
    }
}
