use jiff::{Timestamp, Zoned, tz};

/// Schedules are published in Swedish time.
pub const SCHEDULE_TZ: &str = "Europe/Stockholm";

/// Localize a timestamp to the schedule's timezone, falling back to the
/// system timezone if the tz database doesn't know it.
pub fn localize_timestamp(timestamp: Timestamp) -> Zoned {
    match timestamp.in_tz(SCHEDULE_TZ) {
        Ok(zoned) => zoned,
        Err(_) => timestamp.to_zoned(tz::TimeZone::system()),
    }
}

/// Compact form for table rows, e.g. "2025-10-20 18:00".
pub fn format_start_time(timestamp: Timestamp) -> String {
    localize_timestamp(timestamp)
        .strftime("%Y-%m-%d %H:%M")
        .to_string()
}

/// Date and time shown in the workout details dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayDateTime {
    /// "Monday, 20 October"
    pub date: String,
    /// "18:00"
    pub time: String,
    /// Both combined for screen readers
    pub aria_label: String,
}

pub fn display_date_time(timestamp: Timestamp) -> DisplayDateTime {
    let zoned = localize_timestamp(timestamp);
    let date = zoned.strftime("%A, %-d %B").to_string();
    let time = zoned.strftime("%H:%M").to_string();
    let aria_label = format!("{date} at {time}");
    DisplayDateTime {
        date,
        time,
        aria_label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summer_time_is_two_hours_ahead() {
        let ts: Timestamp = "2025-10-20T16:00:00Z".parse().unwrap();
        assert_eq!(format_start_time(ts), "2025-10-20 18:00");
        assert_eq!(
            display_date_time(ts),
            DisplayDateTime {
                date: "Monday, 20 October".into(),
                time: "18:00".into(),
                aria_label: "Monday, 20 October at 18:00".into(),
            }
        );
    }

    #[test]
    fn winter_time_is_one_hour_ahead() {
        let ts: Timestamp = "2025-12-01T09:30:00Z".parse().unwrap();
        assert_eq!(format_start_time(ts), "2025-12-01 10:30");
        assert_eq!(display_date_time(ts).date, "Monday, 1 December");
    }
}
