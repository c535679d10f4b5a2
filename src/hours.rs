use time::{macros::time, OffsetDateTime, Time, Weekday};
use time_tz::ToTimezone;

/// Weekly opening hours. One continuous service window per day.
fn window(day: Weekday) -> (Time, Time) {
    match day {
        Weekday::Friday | Weekday::Saturday => (time!(11:30), time!(23:00)),
        Weekday::Sunday => (time!(12:00), time!(21:30)),
        _ => (time!(11:30), time!(22:00)),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenStatus {
    Open { until: Time },
    Closed { opens_day: Weekday, opens_at: Time },
}

impl OpenStatus {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }
}

/// Current wall-clock time in the restaurant's timezone. Falls back to
/// UTC when the zone name is unknown (config validation normally rejects
/// that earlier).
pub fn local_now(timezone: &str) -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();
    match time_tz::timezones::get_by_name(timezone) {
        Some(tz) => now.to_timezone(tz),
        None => now,
    }
}

/// Open/closed state at `now` (already in restaurant local time). The
/// clock arrives as a parameter so banner logic stays testable.
pub fn status_at(now: OffsetDateTime) -> OpenStatus {
    let today = now.weekday();
    let (opens, closes) = window(today);

    if now.time() < opens {
        return OpenStatus::Closed {
            opens_day: today,
            opens_at: opens,
        };
    }

    if now.time() < closes {
        return OpenStatus::Open { until: closes };
    }

    let tomorrow = today.next();
    OpenStatus::Closed {
        opens_day: tomorrow,
        opens_at: window(tomorrow).0,
    }
}

/// schema.org `openingHoursSpecification` entries for the JSON-LD
/// builder.
pub fn weekly_spec() -> Vec<(Weekday, Time, Time)> {
    [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ]
    .into_iter()
    .map(|day| {
        let (opens, closes) = window(day);
        (day, opens, closes)
    })
    .collect()
}
