//! Attribute score text and the extra-damage bonus table.
//!
//! Scores are kept as the text the player picked. The bonus is looked up
//! from that text, so the two can never disagree. Reading the text follows
//! a permissive policy: anything that does not start with an integer falls
//! to the lowest bonus tier instead of being rejected.

use serde::{Deserialize, Serialize};

/// Lowest score offered by the score picker.
pub const SCORE_OPTION_MIN: i64 = 6;

/// Highest score offered by the score picker.
pub const SCORE_OPTION_MAX: i64 = 25;

/// Label shown for the empty score choice.
pub const EMPTY_SCORE_LABEL: &str = "-";

/// Reads the leading integer of a score string.
///
/// Leading whitespace is skipped, an optional `+`/`-` sign is accepted, and
/// the longest run of ASCII digits is taken. Whatever follows is ignored.
/// Returns `None` when no digit is found. Runs of digits that overflow
/// saturate at the `i64` bounds.
pub fn parse_score(score: &str) -> Option<i64> {
    let rest = score.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit);
    let mut value: i64 = 0;
    let mut seen_digit = false;
    for digit in digits {
        seen_digit = true;
        let d = i64::from(digit - b'0');
        value = value.saturating_mul(10);
        value = if negative {
            value.saturating_sub(d)
        } else {
            value.saturating_add(d)
        };
    }

    seen_digit.then_some(value)
}

/// Derives the extra-damage bonus for a score.
///
/// An empty score has no bonus. Otherwise the first matching row wins:
///
/// | score    | bonus |
/// |----------|-------|
/// | < 8      | "0"   |
/// | 9        | "1"   |
/// | 10 - 11  | "2"   |
/// | 12 - 13  | "3"   |
/// | 14 - 15  | "4"   |
/// | >= 16    | "5"   |
///
/// Score 8 and text that is not a number match no row and take the
/// default `"0"`.
pub fn derive_extra(score: &str) -> &'static str {
    if score.is_empty() {
        return "";
    }
    let Some(n) = parse_score(score) else {
        return "0";
    };
    match n {
        i64::MIN..=7 => "0",
        9 => "1",
        10..=11 => "2",
        12..=13 => "3",
        14..=15 => "4",
        16..=i64::MAX => "5",
        _ => "0",
    }
}

/// One choice in the score picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreOption {
    /// Text shown to the player
    pub label: String,
    /// Score text stored when chosen
    pub value: String,
}

/// Choices offered by the score picker: empty, then 6 through 25.
pub fn score_options() -> Vec<ScoreOption> {
    let empty = ScoreOption {
        label: EMPTY_SCORE_LABEL.to_string(),
        value: String::new(),
    };
    std::iter::once(empty)
        .chain((SCORE_OPTION_MIN..=SCORE_OPTION_MAX).map(|n| ScoreOption {
            label: n.to_string(),
            value: n.to_string(),
        }))
        .collect()
}
