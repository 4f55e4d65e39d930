//! Relative post times
//!
//! Facebook renders post ages as relative strings ("3h", "2 days ago", "now").
//! These are turned into absolute times against a caller-supplied `now` so the
//! result is deterministic. Patterns match at the start of the string, the way
//! the scraper read them.

use chrono::{DateTime, Duration, Utc};
use regex::Regex;
use std::sync::LazyLock;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PostTimeError {
    #[error("time string does not conform to a known format: {0:?}")]
    UnrecognizedFormat(String),
}

#[derive(Debug, Clone, Copy)]
enum Unit {
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl Unit {
    fn duration(self, amount: i64) -> Duration {
        match self {
            Self::Days => Duration::days(amount),
            Self::Hours => Duration::hours(amount),
            Self::Minutes => Duration::minutes(amount),
            Self::Seconds => Duration::seconds(amount),
        }
    }
}

// Order matters: "12 days ago" must be tried before the bare "12..." forms.
static NUMERIC_PATTERNS: LazyLock<Vec<(Regex, Unit)>> = LazyLock::new(|| {
    [
        (r"^(\d{1,2}) days ago", Unit::Days),
        (r"^(\d{1,2})h", Unit::Hours),
        (r"^(\d{1,2}) hours ago", Unit::Hours),
        (r"^(\d{1,2})m", Unit::Minutes),
        (r"^(\d{1,2}) minutes ago", Unit::Minutes),
        (r"^(\d{1,2})s", Unit::Seconds),
        (r"^(\d{1,2}) seconds ago", Unit::Seconds),
    ]
    .into_iter()
    .filter_map(|(pattern, unit)| match Regex::new(pattern) {
        Ok(regex) => Some((regex, unit)),
        Err(e) => {
            log::error!("Invalid post time pattern {pattern}: {e}");
            None
        }
    })
    .collect()
});

fn offset_for(text: &str) -> Option<Duration> {
    match text {
        "a day ago" => return Some(Duration::days(1)),
        "about an hour ago" => return Some(Duration::hours(1)),
        "now" => return Some(Duration::zero()),
        _ => {}
    }

    NUMERIC_PATTERNS.iter().find_map(|(regex, unit)| {
        let amount = regex.captures(text)?.get(1)?.as_str().parse::<i64>().ok()?;
        Some(unit.duration(amount))
    })
}

/// Whether `text` is a relative time string this module understands
#[must_use]
pub fn is_relative_post_time(text: &str) -> bool {
    let conforms = offset_for(text).is_some();
    if conforms {
        log::debug!("Time string conforms to format: {text}");
    } else {
        log::warn!("Time string does not conform to format: {text}");
    }
    conforms
}

/// Resolve a relative time string against `now`
///
/// # Errors
///
/// Returns [`PostTimeError::UnrecognizedFormat`] for strings outside the known
/// formats (e.g. "1 day ago", "yesterday").
pub fn parse_relative_post_time(
    text: &str,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>, PostTimeError> {
    offset_for(text)
        .map(|offset| now - offset)
        .ok_or_else(|| PostTimeError::UnrecognizedFormat(text.to_string()))
}

/// `posted_at` value for a post time
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn epoch_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    fn ago(text: &str) -> Duration {
        now() - parse_relative_post_time(text, now()).unwrap()
    }

    #[test]
    fn test_fixed_phrases() {
        assert_eq!(ago("now"), Duration::zero());
        assert_eq!(ago("a day ago"), Duration::days(1));
        assert_eq!(ago("about an hour ago"), Duration::hours(1));
    }

    #[test]
    fn test_numeric_forms() {
        assert_eq!(ago("3 days ago"), Duration::days(3));
        assert_eq!(ago("12h"), Duration::hours(12));
        assert_eq!(ago("5 hours ago"), Duration::hours(5));
        assert_eq!(ago("45m"), Duration::minutes(45));
        assert_eq!(ago("10 minutes ago"), Duration::minutes(10));
        assert_eq!(ago("30s"), Duration::seconds(30));
        assert_eq!(ago("9 seconds ago"), Duration::seconds(9));
    }

    #[test]
    fn test_prefix_matching() {
        assert_eq!(ago("2hrs"), Duration::hours(2));
        assert_eq!(ago("5min"), Duration::minutes(5));
    }

    #[test]
    fn test_unrecognized_strings() {
        for text in ["1 day ago", "yesterday", "an hour ago", "123h", "", "h"] {
            assert_eq!(
                parse_relative_post_time(text, now()),
                Err(PostTimeError::UnrecognizedFormat(text.to_string())),
                "{text} should be rejected"
            );
            assert!(!is_relative_post_time(text));
        }
    }

    #[test]
    fn test_is_relative_post_time() {
        assert!(is_relative_post_time("now"));
        assert!(is_relative_post_time("7 days ago"));
    }

    #[test]
    fn test_epoch_seconds() {
        let time = Utc.timestamp_opt(1_700_000_000, 500_000_000).unwrap();
        assert!((epoch_seconds(time) - 1_700_000_000.5).abs() < 1e-6);
    }
}
