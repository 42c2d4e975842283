//! Wall-clock formatting for the time and predicted-time readouts

use chrono::{Duration, NaiveDateTime, Timelike};

/// Format a time as `h:mm AM/PM`
///
/// Hour 0 renders as 12, the hour has no leading zero and minutes are
/// zero-padded: `00:05` is `"12:05 AM"`, `13:00` is `"1:00 PM"`.
pub fn format_clock<T: Timelike>(time: &T) -> String {
    let (is_pm, hour) = time.hour12();
    let meridiem = if is_pm { "PM" } else { "AM" };
    format!("{}:{:02} {}", hour, time.minute(), meridiem)
}

/// Wall time shifted by the predicted-time offset
///
/// An offset that leaves chrono's representable range yields `now`.
#[inline]
pub fn predicted_time(now: NaiveDateTime, offset: Duration) -> NaiveDateTime {
    now.checked_add_signed(offset).unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_midnight_and_noon() {
        assert_eq!(format_clock(&at(0, 5)), "12:05 AM");
        assert_eq!(format_clock(&at(12, 0)), "12:00 PM");
        assert_eq!(format_clock(&at(13, 0)), "1:00 PM");
        assert_eq!(format_clock(&at(15, 7)), "3:07 PM");
        assert_eq!(format_clock(&at(23, 59)), "11:59 PM");
    }

    #[test]
    fn test_all_hours_and_minutes() {
        for hour in 0..24 {
            for minute in 0..60 {
                let text = format_clock(&at(hour, minute));
                let (clock, meridiem) = text.split_once(' ').unwrap();
                let (h, m) = clock.split_once(':').unwrap();

                assert!(!h.starts_with('0'), "leading zero in {}", text);
                let h: u32 = h.parse().unwrap();
                assert!((1..=12).contains(&h), "hour out of range in {}", text);
                assert_eq!(m.len(), 2);
                assert_eq!(m.parse::<u32>().unwrap(), minute);
                assert_eq!(meridiem, if hour >= 12 { "PM" } else { "AM" });
            }
        }
    }

    #[test]
    fn test_predicted_time_wraps_midnight() {
        let now = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(23, 58, 30)
            .unwrap();
        let predicted = predicted_time(now, Duration::minutes(5));
        assert_eq!(format_clock(&predicted), "12:03 AM");
        assert_eq!(predicted.date(), NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
    }

    #[test]
    fn test_predicted_time_out_of_range_keeps_now() {
        let now = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(9, 41, 0)
            .unwrap();
        assert_eq!(predicted_time(now, Duration::MAX), now);
        assert_eq!(predicted_time(now, Duration::MIN), now);
    }
}
