// src/domain/audit/time_format.rs
use chrono::{DateTime, TimeZone, Timelike};

/// Render a point in time as `H:MM AM|PM` using the hour and minute of the
/// value's own time zone. The hour is not zero-padded, minutes always are.
pub fn format_12h<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    let hour = at.hour();
    let minute = at.minute();
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{display_hour}:{minute:02} {suffix}")
}
