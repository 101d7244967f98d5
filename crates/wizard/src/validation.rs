use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Por favor, insira seu e-mail")]
    EmailRequired,
    #[error("Por favor, insira um e-mail válido")]
    InvalidEmailFormat,
    #[error("A data está incorreta. Você consegue!")]
    WrongDate,
}

/// Accepts `local@domain.tld`. The value is checked as typed; only the
/// emptiness check ignores surrounding whitespace.
pub fn validate_email(input: &str) -> Result<(), ValidationError> {
    if input.trim().is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if !EMAIL_PATTERN.is_match(input) {
        return Err(ValidationError::InvalidEmailFormat);
    }
    Ok(())
}

/// Input range suggested to the user. Never enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldHint {
    pub min: i32,
    pub max: i32,
}

pub const DAY_HINT: FieldHint = FieldHint { min: 1, max: 31 };
pub const MONTH_HINT: FieldHint = FieldHint { min: 1, max: 12 };
pub const YEAR_HINT: FieldHint = FieldHint {
    min: 2000,
    max: 2030,
};

/// Parses the leading integer of a field: optional whitespace, an optional
/// sign, then digits. Trailing garbage is ignored; no digits at all yields
/// `None`, the equivalent of a not-a-number reading.
pub fn parse_leading_int(raw: &str) -> Option<i32> {
    let s = raw.trim_start();
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    let value = rest[..end].parse::<i32>().ok()?;
    Some(if negative { -value } else { value })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChallengeInput {
    pub day: Option<i32>,
    pub month: Option<i32>,
    pub year: Option<i32>,
}

impl ChallengeInput {
    pub fn new(day: i32, month: i32, year: i32) -> Self {
        Self {
            day: Some(day),
            month: Some(month),
            year: Some(year),
        }
    }

    pub fn parse(day: &str, month: &str, year: &str) -> Self {
        Self {
            day: parse_leading_int(day),
            month: parse_leading_int(month),
            year: parse_leading_int(year),
        }
    }
}

/// The one calendar date that unlocks the revelation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChallengeAnswer(NaiveDate);

impl ChallengeAnswer {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn matches(&self, input: &ChallengeInput) -> bool {
        input.day == Some(self.0.day() as i32)
            && input.month == Some(self.0.month() as i32)
            && input.year == Some(self.0.year())
    }

    pub fn check(&self, input: &ChallengeInput) -> Result<(), ValidationError> {
        if self.matches(input) {
            Ok(())
        } else {
            Err(ValidationError::WrongDate)
        }
    }
}

impl Default for ChallengeAnswer {
    fn default() -> Self {
        Self::from_ymd(2022, 2, 14).expect("14/02/2022 is a calendar date")
    }
}

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod tests;
