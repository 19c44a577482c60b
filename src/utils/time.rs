use chrono::{DateTime, Duration, NaiveTime, TimeZone};

/// This is the standard way reminder times are written in mymusictime.
pub const REMINDER_TIME_FORMAT: &str = "%H:%M";

pub fn parse_reminder_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, REMINDER_TIME_FORMAT).ok()
}

/// Returns the first moment strictly after `now` with time of day `at`. That's today if `at` is
/// still ahead, tomorrow otherwise. `None` only if the local time doesn't exist on both days.
pub fn next_occurrence<Tz: TimeZone>(now: DateTime<Tz>, at: NaiveTime) -> Option<DateTime<Tz>> {
    match now.clone().with_time(at).earliest() {
        Some(today) if today > now => Some(today),
        _ => (now + Duration::days(1)).with_time(at).earliest(),
    }
}
