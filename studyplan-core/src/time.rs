//! Time utilities: due-date parsing with timezone-aware local times.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use regex::{Captures, Regex};

use crate::error::PlanError;

/// Parse an IANA timezone name like "America/Chicago".
pub fn parse_timezone(tz: &str) -> Result<Tz, PlanError> {
    tz.parse::<Tz>()
        .map_err(|_| PlanError::invalid("timezone", tz, "not an IANA timezone name"))
}

/// Interpret a wall-clock time in `tz`, returning UTC.
pub fn local_to_utc(local: NaiveDateTime, tz: &str) -> Result<DateTime<Utc>, PlanError> {
    let zone = parse_timezone(tz)?;
    let local_dt = zone.from_local_datetime(&local).single().ok_or_else(|| {
        PlanError::invalid(
            "due_date",
            local.to_string(),
            format!("ambiguous or skipped local time in {tz} (DST?)"),
        )
    })?;
    Ok(local_dt.with_timezone(&Utc))
}

/// Parse a due date as typed into a task form.
///
/// Accepted shapes:
/// - `2026-03-10` and `03/10/2026`: midnight local time in `tz`
/// - `2026-03-10 23:59`, `2026-03-10T23:59[:SS[.fff]]`: local time in `tz`
/// - any of the above with `Z` or a `+HH:MM` offset: absolute
///
/// Blank input means "no due date".
pub fn parse_due_date(raw: &str, tz: &str) -> Result<Option<DateTime<Utc>>, PlanError> {
    let s = raw.trim();
    if s.is_empty() {
        return Ok(None);
    }

    let re = Regex::new(concat!(
        r"^(?:",
        r"(?P<year>\d{4})-(?P<month>\d{2})-(?P<day>\d{2})",
        r"(?:[ T](?P<hour>\d{2}):(?P<minute>\d{2})(?::(?P<second>\d{2})(?:\.\d+)?)?)?",
        r"(?P<offset>Z|[+-]\d{2}:?\d{2})?",
        r"|(?P<us_month>\d{1,2})/(?P<us_day>\d{1,2})/(?P<us_year>\d{4})",
        r")$"
    ))?;

    let caps = re
        .captures(s)
        .ok_or_else(|| PlanError::invalid("due_date", s, "unrecognized date format"))?;

    let date = if caps.name("year").is_some() {
        ymd(&caps, "year", "month", "day")
    } else {
        ymd(&caps, "us_year", "us_month", "us_day")
    }
    .ok_or_else(|| PlanError::invalid("due_date", s, "no such calendar date"))?;

    let hour = number(&caps, "hour").unwrap_or(0);
    let minute = number(&caps, "minute").unwrap_or(0);
    let second = number(&caps, "second").unwrap_or(0);
    let local = date
        .and_hms_opt(hour, minute, second)
        .ok_or_else(|| PlanError::invalid("due_date", s, "no such time of day"))?;

    match caps.name("offset") {
        Some(offset) => {
            let offset = parse_offset(offset.as_str())
                .ok_or_else(|| PlanError::invalid("due_date", s, "offset out of range"))?;
            let dt = offset
                .from_local_datetime(&local)
                .single()
                .ok_or_else(|| PlanError::invalid("due_date", s, "invalid offset time"))?;
            Ok(Some(dt.with_timezone(&Utc)))
        }
        None => local_to_utc(local, tz).map(Some),
    }
}

fn number(caps: &Captures<'_>, name: &str) -> Option<u32> {
    caps.name(name).and_then(|m| m.as_str().parse().ok())
}

fn ymd(caps: &Captures<'_>, year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    let y: i32 = caps.name(year)?.as_str().parse().ok()?;
    NaiveDate::from_ymd_opt(y, number(caps, month)?, number(caps, day)?)
}

/// `Z`, `+05:30` or `-0600`.
fn parse_offset(s: &str) -> Option<FixedOffset> {
    if s == "Z" {
        return FixedOffset::east_opt(0);
    }
    let sign = if s.starts_with('-') { -1 } else { 1 };
    let digits: String = s[1..].chars().filter(|c| c.is_ascii_digit()).collect();
    let hours: i32 = digits.get(..2)?.parse().ok()?;
    let minutes: i32 = digits.get(2..4)?.parse().ok()?;
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
