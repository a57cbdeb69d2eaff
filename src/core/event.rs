//! Event identifiers and delayed-event classification.
//!
//! Timer-scheduled transitions are encoded as ordinary event types that
//! follow the `xstate.after(<delay>)#<suffix>` convention. Classification
//! decides which of the three shapes an identifier has and, for delayed
//! events, extracts the delay in milliseconds together with a display string.

use super::delay::format_delay;
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Prefix shared by every delayed-event identifier.
pub const DELAYED_EVENT_PREFIX: &str = "xstate.after";

const DELAY_OPEN: &str = "xstate.after(";
const DELAY_CLOSE: &str = ")#";

/// Identifier naming an event a machine can receive.
///
/// Event types are opaque strings. Delayed events are not a separate type;
/// they are recognised by pattern through [`EventType::classify`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventType(String);

impl EventType {
    pub fn new(event_type: impl Into<String>) -> Self {
        Self(event_type.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Eventless ("always") transitions carry an empty event type.
    pub fn is_always(&self) -> bool {
        self.0.is_empty()
    }

    /// Classify with the default (strict) classifier.
    pub fn classify(&self) -> DelayedTransitionMetadata {
        classify(&self.0)
    }

    /// Display label for the event, given its classification.
    ///
    /// # Example
    ///
    /// ```rust
    /// use transition_viz::core::EventType;
    ///
    /// let timer = EventType::new("xstate.after(1000)#light.green");
    /// assert_eq!(timer.label(&timer.classify()), "after 1s");
    ///
    /// let done = EventType::new("done.invoke.fetchUser");
    /// assert_eq!(done.label(&done.classify()), "done: fetchUser");
    /// ```
    pub fn label(&self, metadata: &DelayedTransitionMetadata) -> String {
        let raw = self.as_str();

        if raw.is_empty() {
            return "always".to_string();
        }
        if let DelayedTransitionMetadata::DelayedValid { formatted, .. } = metadata {
            return format!("after {formatted}");
        }
        if raw.starts_with("done.state.") {
            return "done.state".to_string();
        }
        if let Some(id) = raw.strip_prefix("done.invoke.") {
            return format!("done: {id}");
        }
        if let Some(id) = raw.strip_prefix("error.platform.") {
            return format!("error: {id}");
        }

        raw.to_string()
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for EventType {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EventType {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EventType {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Classification of an event type with respect to timer scheduling.
///
/// Exactly one variant holds for any identifier. Malformed delayed
/// identifiers are data ([`DelayedTransitionMetadata::DelayedInvalid`]),
/// never an error: callers degrade by disabling interaction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DelayedTransitionMetadata {
    /// The event type does not start with the delayed-event prefix.
    NotDelayed,

    /// The prefix is present but the identifier does not match the full
    /// delayed-event grammar, or its delay was rejected.
    DelayedInvalid,

    /// A well-formed delayed identifier.
    DelayedValid {
        /// Delay in milliseconds, used for proportional styling.
        ///
        /// JSON has no `NaN`: it is written as `null` and read back as `NaN`.
        /// Infinite delays take the same path and come back as `NaN`.
        #[serde(deserialize_with = "nan_from_null")]
        delay: f64,
        /// Human-readable duration, used for labels.
        formatted: String,
    },
}

impl DelayedTransitionMetadata {
    /// True for both delayed variants, valid or not.
    pub fn is_delayed(&self) -> bool {
        !matches!(self, Self::NotDelayed)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::DelayedInvalid)
    }

    pub fn delay_ms(&self) -> Option<f64> {
        match self {
            Self::DelayedValid { delay, .. } => Some(*delay),
            _ => None,
        }
    }
}

/// How the captured delay expression is turned into a number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DelayParsing {
    /// The capture must be a finite, non-negative number.
    #[default]
    Strict,

    /// Any capture is accepted, coerced the way JavaScript's unary `+` does:
    /// decimal, `0x`/`0o`/`0b` integers, and signed `Infinity`. Unparseable
    /// captures produce a `NaN` delay; non-finite delays are displayed
    /// verbatim. An empty capture counts as zero.
    Lenient,
}

/// Classifier for event identifiers.
///
/// Classification is pure and deterministic, so results may be cached by
/// event-type equality.
///
/// # Example
///
/// ```rust
/// use transition_viz::core::{Classifier, DelayParsing, DelayedTransitionMetadata};
///
/// let strict = Classifier::default();
/// assert_eq!(
///     strict.classify("xstate.after(bogus)#node"),
///     DelayedTransitionMetadata::DelayedInvalid
/// );
///
/// let lenient = Classifier::new(DelayParsing::Lenient);
/// let metadata = lenient.classify("xstate.after(bogus)#node");
/// assert!(metadata.delay_ms().is_some_and(f64::is_nan));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Classifier {
    parsing: DelayParsing,
    max_delay_ms: Option<f64>,
}

impl Classifier {
    pub fn new(parsing: DelayParsing) -> Self {
        Self {
            parsing,
            max_delay_ms: None,
        }
    }

    /// Reject delays longer than `max_delay_ms` as invalid.
    pub fn with_max_delay(mut self, max_delay_ms: f64) -> Self {
        self.max_delay_ms = Some(max_delay_ms);
        self
    }

    pub fn parsing(&self) -> DelayParsing {
        self.parsing
    }

    pub fn max_delay_ms(&self) -> Option<f64> {
        self.max_delay_ms
    }

    /// Classify a raw event type.
    pub fn classify(&self, event_type: &str) -> DelayedTransitionMetadata {
        if !event_type.starts_with(DELAYED_EVENT_PREFIX) {
            return DelayedTransitionMetadata::NotDelayed;
        }

        let Some(expr) = capture_delay(event_type) else {
            tracing::debug!("Malformed delayed event identifier: {:?}", event_type);
            return DelayedTransitionMetadata::DelayedInvalid;
        };

        let metadata = match self.parsing {
            DelayParsing::Strict => match parse_strict(expr) {
                Some(delay) => DelayedTransitionMetadata::DelayedValid {
                    delay,
                    formatted: format_delay(delay),
                },
                None => {
                    tracing::debug!(
                        "Delayed event {:?} has a non-numeric delay {:?}",
                        event_type,
                        expr
                    );
                    DelayedTransitionMetadata::DelayedInvalid
                }
            },
            DelayParsing::Lenient => {
                let delay = coerce_lenient(expr);
                let formatted = if delay.is_finite() {
                    format_delay(delay)
                } else {
                    expr.trim().to_string()
                };
                DelayedTransitionMetadata::DelayedValid { delay, formatted }
            }
        };

        match (self.max_delay_ms, metadata.delay_ms()) {
            (Some(max), Some(delay)) if delay > max => {
                tracing::debug!(
                    "Delayed event {:?} exceeds the maximum delay of {}ms",
                    event_type,
                    max
                );
                DelayedTransitionMetadata::DelayedInvalid
            }
            _ => metadata,
        }
    }
}

/// Classify an event type with the default (strict) classifier.
///
/// # Example
///
/// ```rust
/// use transition_viz::core::{classify, DelayedTransitionMetadata};
///
/// assert_eq!(classify("TIMER"), DelayedTransitionMetadata::NotDelayed);
/// assert_eq!(
///     classify("xstate.after(1000)#light.green"),
///     DelayedTransitionMetadata::DelayedValid {
///         delay: 1000.0,
///         formatted: "1s".to_string(),
///     }
/// );
/// assert_eq!(classify("xstate.after(500"), DelayedTransitionMetadata::DelayedInvalid);
/// ```
pub fn classify(event_type: &str) -> DelayedTransitionMetadata {
    Classifier::default().classify(event_type)
}

/// Extract the delay expression from `xstate.after(<expr>)#<suffix>`.
///
/// The expression extends to the last `)#`. Line breaks anywhere after the
/// prefix reject the identifier.
fn capture_delay(event_type: &str) -> Option<&str> {
    let rest = event_type.strip_prefix(DELAY_OPEN)?;
    if rest.contains(is_line_break) {
        return None;
    }
    let end = rest.rfind(DELAY_CLOSE)?;
    Some(&rest[..end])
}

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

fn parse_strict(expr: &str) -> Option<f64> {
    let trimmed = expr.trim();
    if !trimmed.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|delay| delay.is_finite() && *delay >= 0.0)
}

fn coerce_lenient(expr: &str) -> f64 {
    let trimmed = expr.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix_prefixes = [
        ("0x", 16),
        ("0X", 16),
        ("0o", 8),
        ("0O", 8),
        ("0b", 2),
        ("0B", 2),
    ];
    for (prefix, radix) in radix_prefixes {
        if let Some(digits) = trimmed.strip_prefix(prefix) {
            return parse_radix(digits, radix);
        }
    }

    if trimmed.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Unsigned integer in `radix`, accumulated in `f64` so long literals
/// lose precision instead of overflowing.
fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0, |acc: f64, c| {
            c.to_digit(radix)
                .map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}

fn nan_from_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid(delay: f64, formatted: &str) -> DelayedTransitionMetadata {
        DelayedTransitionMetadata::DelayedValid {
            delay,
            formatted: formatted.to_string(),
        }
    }

    #[test]
    fn plain_events_are_not_delayed() {
        assert_eq!(classify("TOGGLE"), DelayedTransitionMetadata::NotDelayed);
        assert_eq!(classify(""), DelayedTransitionMetadata::NotDelayed);
        assert_eq!(
            classify("done.invoke.fetch"),
            DelayedTransitionMetadata::NotDelayed
        );
        assert_eq!(
            classify(" xstate.after(1000)#a"),
            DelayedTransitionMetadata::NotDelayed
        );
    }

    #[test]
    fn well_formed_delay_is_valid() {
        assert_eq!(classify("xstate.after(1000)#node.id"), valid(1000.0, "1s"));
        assert_eq!(classify("xstate.after(250)#light"), valid(250.0, "250ms"));
        assert_eq!(classify("xstate.after( 1500 )#x"), valid(1500.0, "1.5s"));
    }

    #[test]
    fn suffix_may_be_empty() {
        assert_eq!(classify("xstate.after(100)#"), valid(100.0, "100ms"));
    }

    #[test]
    fn capture_extends_to_last_marker() {
        // Greedy capture leaves "1)#a" as the delay expression.
        assert_eq!(
            classify("xstate.after(1)#a)#b"),
            DelayedTransitionMetadata::DelayedInvalid
        );
        let lenient = Classifier::new(DelayParsing::Lenient);
        assert!(lenient
            .classify("xstate.after(1)#a)#b")
            .delay_ms()
            .is_some_and(f64::is_nan));
    }

    #[test]
    fn malformed_identifiers_are_invalid() {
        for input in [
            "xstate.after(500",
            "xstate.after",
            "xstate.after500)#a",
            "xstate.after(500)",
            "xstate.after(500)a",
            "xstate.afterwards",
            "xstate.after(500)#a\nb",
        ] {
            assert_eq!(
                classify(input),
                DelayedTransitionMetadata::DelayedInvalid,
                "input {input:?}"
            );
        }
    }

    #[test]
    fn strict_rejects_non_numeric_delays() {
        for input in [
            "xstate.after(bogus)#node.id",
            "xstate.after()#node.id",
            "xstate.after(-5)#node.id",
            "xstate.after(inf)#node.id",
            "xstate.after(NaN)#node.id",
        ] {
            assert_eq!(
                classify(input),
                DelayedTransitionMetadata::DelayedInvalid,
                "input {input:?}"
            );
        }
    }

    #[test]
    fn lenient_keeps_non_numeric_delays_as_nan() {
        let classifier = Classifier::new(DelayParsing::Lenient);

        match classifier.classify("xstate.after(bogus)#node.id") {
            DelayedTransitionMetadata::DelayedValid { delay, formatted } => {
                assert!(delay.is_nan());
                assert_eq!(formatted, "bogus");
            }
            other => panic!("Expected DelayedValid, got {other:?}"),
        }

        assert_eq!(
            classifier.classify("xstate.after()#node.id"),
            valid(0.0, "0ms")
        );
        assert_eq!(
            classifier.classify("xstate.after(1000)#node.id"),
            valid(1000.0, "1s")
        );
    }

    #[test]
    fn lenient_coerces_radix_literals_and_infinity() {
        let classifier = Classifier::new(DelayParsing::Lenient);

        assert_eq!(classifier.classify("xstate.after(0x10)#a"), valid(16.0, "16ms"));
        assert_eq!(classifier.classify("xstate.after(0o17)#a"), valid(15.0, "15ms"));
        assert_eq!(classifier.classify("xstate.after(0B101)#a"), valid(5.0, "5ms"));
        assert_eq!(
            classifier.classify("xstate.after(Infinity)#a"),
            valid(f64::INFINITY, "Infinity")
        );
        assert_eq!(
            classifier.classify("xstate.after(-Infinity)#a"),
            valid(f64::NEG_INFINITY, "-Infinity")
        );

        for input in ["xstate.after(0x)#a", "xstate.after(0x1g)#a", "xstate.after(inf)#a"] {
            assert!(
                classifier.classify(input).delay_ms().is_some_and(f64::is_nan),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn strict_ignores_radix_literals() {
        assert_eq!(
            classify("xstate.after(0x10)#a"),
            DelayedTransitionMetadata::DelayedInvalid
        );
    }

    #[test]
    fn nan_delay_survives_json() {
        let metadata = Classifier::new(DelayParsing::Lenient).classify("xstate.after(bogus)#a");
        let json = serde_json::to_string(&metadata).unwrap();
        assert!(json.contains(r#""delay":null"#));

        let restored: DelayedTransitionMetadata = serde_json::from_str(&json).unwrap();
        match restored {
            DelayedTransitionMetadata::DelayedValid { delay, formatted } => {
                assert!(delay.is_nan());
                assert_eq!(formatted, "bogus");
            }
            other => panic!("Expected DelayedValid, got {other:?}"),
        }

        let restored: DelayedTransitionMetadata =
            serde_json::from_str(r#"{ "status": "DELAYED_VALID", "delay": 250.0, "formatted": "250ms" }"#)
                .unwrap();
        assert_eq!(restored, valid(250.0, "250ms"));
    }

    #[test]
    fn lenient_still_rejects_malformed_identifiers() {
        let classifier = Classifier::new(DelayParsing::Lenient);
        assert_eq!(
            classifier.classify("xstate.after(500"),
            DelayedTransitionMetadata::DelayedInvalid
        );
    }

    #[test]
    fn max_delay_marks_long_timers_invalid() {
        let classifier = Classifier::default().with_max_delay(5_000.0);

        assert_eq!(classifier.classify("xstate.after(5000)#a"), valid(5000.0, "5s"));
        assert_eq!(
            classifier.classify("xstate.after(5001)#a"),
            DelayedTransitionMetadata::DelayedInvalid
        );
    }

    #[test]
    fn classification_is_idempotent() {
        let input = "xstate.after(1000)#node.id";
        assert_eq!(classify(input), classify(input));
    }

    #[test]
    fn metadata_helpers() {
        assert!(!DelayedTransitionMetadata::NotDelayed.is_delayed());
        assert!(DelayedTransitionMetadata::DelayedInvalid.is_delayed());
        assert!(DelayedTransitionMetadata::DelayedInvalid.is_invalid());
        assert_eq!(valid(10.0, "10ms").delay_ms(), Some(10.0));
        assert_eq!(DelayedTransitionMetadata::NotDelayed.delay_ms(), None);
    }

    #[test]
    fn metadata_serializes_with_status_tag() {
        let json = serde_json::to_value(valid(1000.0, "1s")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "status": "DELAYED_VALID", "delay": 1000.0, "formatted": "1s" })
        );

        let json = serde_json::to_value(DelayedTransitionMetadata::NotDelayed).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "NOT_DELAYED" }));
    }

    #[test]
    fn labels_follow_event_shape() {
        let cases = [
            ("", "always"),
            ("TOGGLE", "TOGGLE"),
            ("xstate.after(1000)#a", "after 1s"),
            ("xstate.after(oops", "xstate.after(oops"),
            ("done.state.machine.loading", "done.state"),
            ("done.invoke.fetchUser", "done: fetchUser"),
            ("error.platform.fetchUser", "error: fetchUser"),
        ];

        for (raw, expected) in cases {
            let event = EventType::new(raw);
            assert_eq!(event.label(&event.classify()), expected, "event {raw:?}");
        }
    }

    #[test]
    fn event_type_borrows_as_str() {
        let mut set = std::collections::HashSet::new();
        set.insert(EventType::new("GO"));
        assert!(set.contains("GO"));
        assert!(!set.contains("STOP"));
    }
}
