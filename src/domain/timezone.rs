use std::fmt;

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use chrono_tz::Tz;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimezoneError {
    #[error("expected a zone name like Europe/Berlin, UTC, Z or an offset like +02:00, got {0:?}")]
    Unrecognized(String),
}

/// Zone used to render timestamps in responses. Named zones follow their
/// daylight saving rules; fixed offsets never shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayTimezone {
    Named(Tz),
    Fixed(FixedOffset),
}

impl DisplayTimezone {
    pub fn utc() -> Self {
        Self::Named(Tz::UTC)
    }

    pub fn parse(raw: &str) -> Result<Self, TimezoneError> {
        let trimmed = raw.trim();
        let unrecognized = || TimezoneError::Unrecognized(raw.to_string());

        if trimmed.eq_ignore_ascii_case("z") || trimmed.eq_ignore_ascii_case("utc") {
            return Ok(Self::utc());
        }

        if trimmed.starts_with(['+', '-']) {
            return parse_fixed_offset(trimmed)
                .map(Self::Fixed)
                .ok_or_else(unrecognized);
        }

        trimmed
            .parse::<Tz>()
            .map(Self::Named)
            .map_err(|_| unrecognized())
    }

    /// Offset in effect at `timestamp`.
    pub fn offset_at(&self, timestamp: DateTime<Utc>) -> FixedOffset {
        *self.localize(timestamp).offset()
    }

    pub fn format(&self, timestamp: DateTime<Utc>) -> String {
        self.localize(timestamp)
            .to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    fn localize(&self, timestamp: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Self::Named(zone) => timestamp.with_timezone(zone).fixed_offset(),
            Self::Fixed(offset) => timestamp.with_timezone(offset),
        }
    }
}

fn parse_fixed_offset(raw: &str) -> Option<FixedOffset> {
    let (sign, rest) = match raw.split_at_checked(1)? {
        ("+", rest) => (1, rest),
        ("-", rest) => (-1, rest),
        _ => return None,
    };
    let (hours, minutes) = rest.split_once(':')?;
    if hours.len() != 2 || minutes.len() != 2 {
        return None;
    }
    if !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    if minutes >= 60 {
        return None;
    }

    let seconds = i32::try_from(hours * 3600 + minutes * 60).ok()?;
    FixedOffset::east_opt(sign * seconds)
}

impl Default for DisplayTimezone {
    fn default() -> Self {
        Self::utc()
    }
}

impl fmt::Display for DisplayTimezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(zone) => write!(f, "{}", zone.name()),
            Self::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use chrono_tz::Tz;

    use super::{DisplayTimezone, TimezoneError};

    fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
            .single()
            .expect("fixed timestamp should be valid")
    }

    #[test]
    fn parses_utc_aliases_zone_names_and_offsets() {
        let noon = at(2026, 1, 15, 12, 0, 0);

        for raw in ["UTC", "utc", "z", "Z"] {
            assert_eq!(
                DisplayTimezone::parse(raw).expect("utc alias should parse"),
                DisplayTimezone::utc(),
                "input {raw:?}"
            );
        }
        assert_eq!(
            DisplayTimezone::parse("Europe/Berlin").expect("zone name should parse"),
            DisplayTimezone::Named(Tz::Europe__Berlin)
        );
        assert_eq!(
            DisplayTimezone::parse("+02:00")
                .expect("positive offset should parse")
                .offset_at(noon)
                .local_minus_utc(),
            7200
        );
        assert_eq!(
            DisplayTimezone::parse("-05:30")
                .expect("negative offset should parse")
                .offset_at(noon)
                .local_minus_utc(),
            -(5 * 3600 + 30 * 60)
        );
    }

    #[test]
    fn rejects_unrecognized_values() {
        for raw in [
            "Mars/Olympus",
            "+2",
            "+02:75",
            "+-1:00",
            "-+1:00",
            "+1a:00",
            "0200",
            "",
        ] {
            assert_eq!(
                DisplayTimezone::parse(raw),
                Err(TimezoneError::Unrecognized(raw.to_string())),
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn formats_in_configured_offset() {
        let timestamp = at(2026, 2, 20, 18, 12, 3);

        assert_eq!(
            DisplayTimezone::utc().format(timestamp),
            "2026-02-20T18:12:03Z"
        );
        assert_eq!(
            DisplayTimezone::parse("+01:00")
                .expect("offset should parse")
                .format(timestamp),
            "2026-02-20T19:12:03+01:00"
        );
    }

    #[test]
    fn named_zone_follows_daylight_saving_time() {
        let berlin = DisplayTimezone::parse("Europe/Berlin").expect("zone name should parse");

        assert_eq!(
            berlin.format(at(2026, 1, 15, 12, 0, 0)),
            "2026-01-15T13:00:00+01:00"
        );
        assert_eq!(
            berlin.format(at(2026, 7, 15, 12, 0, 0)),
            "2026-07-15T14:00:00+02:00"
        );
    }

    #[test]
    fn displays_zone_name_or_offset() {
        assert_eq!(DisplayTimezone::utc().to_string(), "UTC");
        assert_eq!(
            DisplayTimezone::parse("Europe/Berlin")
                .expect("zone name should parse")
                .to_string(),
            "Europe/Berlin"
        );
        assert_eq!(
            DisplayTimezone::parse("-05:30")
                .expect("offset should parse")
                .to_string(),
            "-05:30"
        );
    }
}
