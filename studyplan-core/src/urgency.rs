//! Urgency classification from days remaining until the due date.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl UrgencyLevel {
    /// Bucket a day count. `None` (no due date) is treated as MEDIUM.
    pub fn from_days(days_until_due: Option<i64>) -> Self {
        match days_until_due {
            None => UrgencyLevel::Medium,
            Some(d) if d <= 1 => UrgencyLevel::Critical,
            Some(d) if d <= 3 => UrgencyLevel::High,
            Some(d) if d <= 7 => UrgencyLevel::Medium,
            Some(_) => UrgencyLevel::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyLevel::Low => "LOW",
            UrgencyLevel::Medium => "MEDIUM",
            UrgencyLevel::High => "HIGH",
            UrgencyLevel::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classified urgency together with the day count it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Urgency {
    pub level: UrgencyLevel,
    pub days_until_due: Option<i64>,
}

impl Urgency {
    /// Single-day emergency: CRITICAL with at most one day left.
    pub fn is_emergency(&self) -> bool {
        self.level == UrgencyLevel::Critical && self.days_until_due.is_some_and(|d| d <= 1)
    }

    /// Compressed schedule: HIGH with at most three days left.
    pub fn is_compressed(&self) -> bool {
        self.level == UrgencyLevel::High && self.days_until_due.is_some_and(|d| d <= 3)
    }
}

/// Whole days until `due`, rounded up. Negative when past due.
pub fn days_until(due: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (due - now).num_milliseconds() as f64;
    (millis / MILLIS_PER_DAY).ceil() as i64
}

/// Classify a due date relative to `now`.
pub fn classify(due_date: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Urgency {
    let days_until_due = due_date.map(|due| days_until(due, now));
    Urgency {
        level: UrgencyLevel::from_days(days_until_due),
        days_until_due,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 19, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_boundaries() {
        let n = now();
        let at = |days: i64| classify(Some(n + Duration::days(days)), n).level;
        assert_eq!(at(1), UrgencyLevel::Critical);
        assert_eq!(at(2), UrgencyLevel::High);
        assert_eq!(at(3), UrgencyLevel::High);
        assert_eq!(at(4), UrgencyLevel::Medium);
        assert_eq!(at(7), UrgencyLevel::Medium);
        assert_eq!(at(8), UrgencyLevel::Low);
    }

    #[test]
    fn test_no_due_date_is_medium() {
        let u = classify(None, now());
        assert_eq!(u.level, UrgencyLevel::Medium);
        assert_eq!(u.days_until_due, None);
        assert!(!u.is_emergency());
        assert!(!u.is_compressed());
    }

    #[test]
    fn test_partial_days_round_up() {
        let n = now();
        // 1 day and 1 hour counts as 2 days.
        let u = classify(Some(n + Duration::hours(25)), n);
        assert_eq!(u.days_until_due, Some(2));
        assert_eq!(u.level, UrgencyLevel::High);

        // A few hours away is still one day.
        assert_eq!(days_until(n + Duration::hours(3), n), 1);
    }

    #[test]
    fn test_past_due_is_critical() {
        let n = now();
        let u = classify(Some(n - Duration::days(4)), n);
        assert_eq!(u.days_until_due, Some(-4));
        assert_eq!(u.level, UrgencyLevel::Critical);
        assert!(u.is_emergency());
    }

    #[test]
    fn test_serializes_upper_case() {
        let json = serde_json::to_string(&UrgencyLevel::Critical).unwrap();
        assert_eq!(json, "\"CRITICAL\"");
    }
}
