use std::time::Duration;

use chrono::{DateTime, FixedOffset, Utc};

/// How often the header clock is re-rendered.
pub const TICK: Duration = Duration::from_secs(1);

pub fn offset_from_minutes(minutes: i32) -> Option<FixedOffset> {
    FixedOffset::east_opt(minutes.checked_mul(60)?)
}

/// 24h `HH:MM:SS`, zero-padded, as `en-GB` renders two-digit time parts.
pub fn format_time(now: DateTime<Utc>, offset: &FixedOffset) -> String {
    now.with_timezone(offset).format("%H:%M:%S").to_string()
}

pub fn now_in(offset: &FixedOffset) -> String {
    format_time(Utc::now(), offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, h, m, s).unwrap()
    }

    #[test]
    fn formats_in_the_given_offset() {
        let colombo = offset_from_minutes(330).unwrap();
        assert_eq!("05:30:00", format_time(instant(0, 0, 0), &colombo));
        assert_eq!("01:29:59", format_time(instant(19, 59, 59), &colombo));
    }

    #[test]
    fn pads_and_uses_a_24h_clock() {
        let utc = offset_from_minutes(0).unwrap();
        assert_eq!("07:04:09", format_time(instant(7, 4, 9), &utc));
        assert_eq!("23:00:00", format_time(instant(23, 0, 0), &utc));

        let west = offset_from_minutes(-5 * 60).unwrap();
        assert_eq!("19:15:00", format_time(instant(0, 15, 0), &west));
    }

    #[test]
    fn rejects_out_of_range_offsets() {
        assert!(offset_from_minutes(24 * 60).is_none());
        assert!(offset_from_minutes(i32::MAX).is_none());
    }
}
