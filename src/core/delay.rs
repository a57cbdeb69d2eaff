//! Human-readable rendering of timer delays.
//!
//! Delays are carried in milliseconds. Labels collapse them into the
//! largest sensible units so that `1000` reads as `1s` and `90000` as
//! `1m 30s`.

use chrono::TimeDelta;

const MILLIS_PER_SECOND: f64 = 1000.0;

/// Format a delay given in milliseconds for display.
///
/// Delays under one second keep millisecond precision. Longer delays are
/// split into hour, minute and second components, omitting zero components.
/// Sub-second remainders appear as a decimal fraction of the seconds part.
///
/// # Example
///
/// ```rust
/// use transition_viz::core::format_delay;
///
/// assert_eq!(format_delay(250.0), "250ms");
/// assert_eq!(format_delay(1000.0), "1s");
/// assert_eq!(format_delay(1500.0), "1.5s");
/// assert_eq!(format_delay(90_000.0), "1m 30s");
/// ```
pub fn format_delay(ms: f64) -> String {
    if !ms.is_finite() {
        return ms.to_string();
    }

    // Round to display precision before choosing units.
    let rounded = (ms * MILLIS_PER_SECOND).round() / MILLIS_PER_SECOND;
    if rounded < MILLIS_PER_SECOND {
        return format!("{}ms", trim_number(rounded));
    }

    // Beyond what TimeDelta can hold the i64 cast would saturate.
    if rounded >= TimeDelta::MAX.num_milliseconds() as f64 {
        return format!("{}ms", trim_number(ms));
    }

    let Some(delta) = TimeDelta::try_milliseconds(rounded.round() as i64) else {
        return format!("{}ms", trim_number(ms));
    };

    let hours = delta.num_hours();
    let minutes = delta.num_minutes() % 60;
    let millis_in_minute = delta.num_milliseconds() % 60_000;

    let mut parts = Vec::with_capacity(3);
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 {
        parts.push(format!("{minutes}m"));
    }
    if millis_in_minute > 0 {
        parts.push(format!(
            "{}s",
            trim_number(millis_in_minute as f64 / MILLIS_PER_SECOND)
        ));
    }

    parts.join(" ")
}

/// Render a number with at most three decimals and no trailing zeros.
fn trim_number(value: f64) -> String {
    let fixed = format!("{value:.3}");
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
