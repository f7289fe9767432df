// Input coercion for the export form

use chrono::NaiveDate;

/// Limit used when the input cannot be read as a positive number
pub const DEFAULT_LIMIT: u32 = 200;

pub const MIN_LIMIT: u32 = 1;

pub const MAX_LIMIT: u32 = 10_000;

/// Days between the default start date and the submission date
pub const DEFAULT_LOOKBACK_DAYS: i64 = 7;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Limit input errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LimitError {
    #[error("limit is not a number: {0:?}")]
    NotANumber(String),

    #[error("limit must be at least 1: {0}")]
    NotPositive(i64),

    #[error("limit exceeds 10000")]
    TooLarge,
}

impl LimitError {
    /// Value the form falls back to for this error
    pub fn fallback(&self) -> u32 {
        match self {
            LimitError::NotANumber(_) | LimitError::NotPositive(_) => DEFAULT_LIMIT,
            LimitError::TooLarge => MAX_LIMIT,
        }
    }
}

/// Read the integer at the start of `input`
///
/// Leading whitespace and a sign are accepted; anything after the digits is
/// ignored, so `"12abc"` reads as 12 and `"3.9"` as 3.
pub fn validate_limit_input(input: &str) -> Result<u32, LimitError> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return Err(LimitError::NotANumber(input.to_string()));
    }

    let magnitude: i64 = match rest[..digits_len].parse() {
        Ok(n) => n,
        // Too many digits for i64
        Err(_) if negative => return Err(LimitError::NotPositive(i64::MIN)),
        Err(_) => return Err(LimitError::TooLarge),
    };
    let value = if negative { -magnitude } else { magnitude };

    if value < i64::from(MIN_LIMIT) {
        return Err(LimitError::NotPositive(value));
    }
    if value > i64::from(MAX_LIMIT) {
        return Err(LimitError::TooLarge);
    }

    Ok(value as u32)
}

/// Limit the form submits for the given raw input
pub fn coerce_limit(input: &str) -> u32 {
    validate_limit_input(input).unwrap_or_else(|e| e.fallback())
}

/// Parse a `YYYY-MM-DD` date input; empty or malformed input yields `None`
pub fn parse_iso_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), ISO_DATE_FORMAT).ok()
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Start date used when the user has not picked one
pub fn default_start_date(today: NaiveDate) -> NaiveDate {
    today - chrono::Duration::days(DEFAULT_LOOKBACK_DAYS)
}
