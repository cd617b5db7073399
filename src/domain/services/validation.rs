use crate::error::AppError;
use chrono::{DateTime, NaiveDateTime, Utc};

pub const PLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parses a play time in `YYYY-MM-DD HH:MM` (UTC) and requires it to lie
/// strictly in the future at the moment of the request.
pub fn parse_future_play_time(raw: &str) -> Result<DateTime<Utc>, AppError> {
    let naive = NaiveDateTime::parse_from_str(raw.trim(), PLAY_TIME_FORMAT)
        .map_err(|_| AppError::Validation(format!("invalid datetime '{}', expected YYYY-MM-DD HH:MM", raw)))?;

    let play_time = naive.and_utc();
    if play_time <= Utc::now() {
        return Err(AppError::Validation("play time must be in the future".to_string()));
    }

    Ok(play_time)
}

/// Mobile number shape: optional leading `+`, then 8 to 15 digits.
pub fn is_mobile_phone(raw: &str) -> bool {
    let digits = raw.strip_prefix('+').unwrap_or(raw);
    (8..=15).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit())
}
