use crate::config::{MAX_AGE, MAX_HOURS, MAX_WEIGHT_KG, MIN_AGE, MIN_WEIGHT_KG};
use once_cell::sync::Lazy;
use regex::Regex;

// Compiled regexes for elapsed-time parsing
static HOURS_MIN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)h\s*(\d+)m$").unwrap());
static HOURS_ONLY_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+(?:\.\d+)?)h$").unwrap());
static MINUTES_ONLY_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)m$").unwrap());
static COLON_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+):(\d{1,2})$").unwrap());

/// Elapsed-time parsing error types for better error handling
#[derive(Debug)]
pub enum HoursParseError {
    EmptyInput,
    InvalidFormat(String),
    InvalidHours,
    InvalidMinutes(u32),
}

impl std::fmt::Display for HoursParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HoursParseError::EmptyInput => write!(f, "Time cannot be empty"),
            HoursParseError::InvalidFormat(hint) => write!(f, "Invalid time format. {}", hint),
            HoursParseError::InvalidHours => write!(f, "Invalid hours value"),
            HoursParseError::InvalidMinutes(m) => {
                write!(f, "Invalid minutes: {} (must be 0-59)", m)
            }
        }
    }
}

impl std::error::Error for HoursParseError {}

/// Parse an elapsed-time string in various formats to fractional hours.
///
/// Supported formats:
/// - Plain number: "2" or "2.5" (hours)
/// - Hours and minutes: "2h 30m" or "2h30m"
/// - Hours only: "2h"
/// - Minutes only: "90m"
/// - Colon format: "2:30" (hours:minutes)
pub fn parse_hours(input: &str) -> Result<f64, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(HoursParseError::EmptyInput.to_string());
    }

    // Try parsing as a plain number of hours
    if let Ok(hours) = trimmed.parse::<f64>() {
        if !hours.is_finite() || hours < 0.0 {
            return Err(HoursParseError::InvalidHours.to_string());
        }
        return Ok(hours);
    }

    // Try parsing "XhYm" format
    if let Some(captures) = HOURS_MIN_REGEX.captures(trimmed) {
        let hours: u32 = captures[1]
            .parse()
            .map_err(|_| HoursParseError::InvalidHours.to_string())?;
        let minutes: u32 = captures[2]
            .parse()
            .map_err(|_| HoursParseError::InvalidMinutes(0).to_string())?;
        if minutes > 59 {
            return Err(HoursParseError::InvalidMinutes(minutes).to_string());
        }
        return Ok(f64::from(hours) + f64::from(minutes) / 60.0);
    }

    // Try parsing "Xh" format
    if let Some(captures) = HOURS_ONLY_REGEX.captures(trimmed) {
        let hours: f64 = captures[1]
            .parse()
            .map_err(|_| HoursParseError::InvalidHours.to_string())?;
        return Ok(hours);
    }

    // Try parsing "Xm" format (minutes)
    if let Some(captures) = MINUTES_ONLY_REGEX.captures(trimmed) {
        let minutes: u32 = captures[1]
            .parse()
            .map_err(|_| HoursParseError::InvalidMinutes(0).to_string())?;
        return Ok(f64::from(minutes) / 60.0);
    }

    // Try parsing "X:Y" format (hours:minutes)
    if let Some(captures) = COLON_REGEX.captures(trimmed) {
        let hours: u32 = captures[1]
            .parse()
            .map_err(|_| HoursParseError::InvalidHours.to_string())?;
        let minutes: u32 = captures[2]
            .parse()
            .map_err(|_| HoursParseError::InvalidMinutes(0).to_string())?;
        if minutes > 59 {
            return Err(HoursParseError::InvalidMinutes(minutes).to_string());
        }
        return Ok(f64::from(hours) + f64::from(minutes) / 60.0);
    }

    Err(HoursParseError::InvalidFormat("Use: 2.5, 2h30m, 90m, or 2:30".to_string()).to_string())
}

/// Generic numeric input validation
pub fn validate_numeric_input<T>(
    input: &str,
    min: Option<T>,
    max: Option<T>,
    field_name: &str,
) -> Result<T, String>
where
    T: std::str::FromStr + std::fmt::Display + PartialOrd,
{
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(format!("{} cannot be empty", field_name));
    }

    match trimmed.parse::<T>() {
        Ok(val) => {
            if let Some(min_val) = min {
                if val < min_val {
                    return Err(format!("{} must be at least {}", field_name, min_val));
                }
            }
            if let Some(max_val) = max {
                if val > max_val {
                    return Err(format!("{} cannot exceed {}", field_name, max_val));
                }
            }
            Ok(val)
        }
        Err(_) => Err(format!("{} must be a valid number", field_name)),
    }
}

/// Validate the elapsed-hours input
pub fn validate_hours(input: &str) -> Result<f64, String> {
    let hours = parse_hours(input)?;
    if hours > MAX_HOURS {
        return Err(format!("Time cannot exceed {} hours", MAX_HOURS));
    }
    Ok(hours)
}

/// Validate the body-weight input
pub fn validate_weight(input: &str) -> Result<f64, String> {
    validate_numeric_input(input, Some(MIN_WEIGHT_KG), Some(MAX_WEIGHT_KG), "Weight")
}

/// Validate the age input
pub fn validate_age(input: &str) -> Result<u32, String> {
    validate_numeric_input(input, Some(MIN_AGE), Some(MAX_AGE), "Age")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_fractional_hours() {
        assert_eq!(parse_hours("2"), Ok(2.0));
        assert_eq!(parse_hours("2.5"), Ok(2.5));
        assert_eq!(parse_hours(" 0 "), Ok(0.0));
    }

    #[test]
    fn parses_hour_minute_combinations() {
        assert_eq!(parse_hours("2h30m"), Ok(2.5));
        assert_eq!(parse_hours("2h 30m"), Ok(2.5));
        assert_eq!(parse_hours("2h"), Ok(2.0));
        assert_eq!(parse_hours("90m"), Ok(1.5));
        assert_eq!(parse_hours("2:30"), Ok(2.5));
    }

    #[test]
    fn rejects_nonsense() {
        assert!(parse_hours("").is_err());
        assert!(parse_hours("-1").is_err());
        assert!(parse_hours("2:75").is_err());
        assert!(parse_hours("soon").is_err());
    }

    #[test]
    fn hours_validation_applies_the_ceiling() {
        assert_eq!(validate_hours("24"), Ok(24.0));
        assert!(validate_hours("25").is_err());
    }

    #[test]
    fn weight_and_age_bounds() {
        assert_eq!(validate_weight("80"), Ok(80.0));
        assert!(validate_weight("0").is_err());
        assert!(validate_weight("900").is_err());
        assert_eq!(validate_age("30"), Ok(30));
        assert!(validate_age("0").is_err());
        assert!(validate_age("abc").is_err());
    }
}
