//! Maps instants to `YYYY-MM-DD` calendar-day keys in the reference timezone.
//!
//! The key is assigned when an entry is written and is the sole criterion for
//! "today": there is no rollover job, a new key simply stops matching old
//! entries. Which zone counts as the reference is configuration
//! (`LOG_TIMEZONE`), resolved once at startup.

use time::OffsetDateTime;
use time_tz::{OffsetDateTimeExt, Tz};

/// Day key for the given instant as observed in `tz`.
pub fn day_key_at(instant: OffsetDateTime, tz: &Tz) -> String {
    let date = instant.to_timezone(tz).date();
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Day key for the current instant.
pub fn today(tz: &Tz) -> String {
    day_key_at(OffsetDateTime::now_utc(), tz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;
    use time_tz::timezones;

    fn new_york() -> &'static Tz {
        timezones::get_by_name("America/New_York").expect("known zone")
    }

    #[test]
    fn same_day_instants_share_a_key() {
        let tz = new_york();
        let morning = datetime!(2025-10-19 12:00 UTC);
        let evening = datetime!(2025-10-19 23:00 UTC);
        assert_eq!(day_key_at(morning, tz), day_key_at(evening, tz));
    }

    #[test]
    fn key_flips_at_reference_midnight_not_utc_midnight() {
        let tz = new_york();
        // EST is UTC-5, so the local day turns over at 05:00 UTC.
        assert_eq!(day_key_at(datetime!(2025-01-15 04:59 UTC), tz), "2025-01-14");
        assert_eq!(day_key_at(datetime!(2025-01-15 05:00 UTC), tz), "2025-01-15");
        // UTC midnight is still mid-evening locally.
        assert_eq!(day_key_at(datetime!(2025-01-15 00:30 UTC), tz), "2025-01-14");
    }

    #[test]
    fn dst_shifts_the_boundary() {
        let tz = new_york();
        // EDT is UTC-4 in summer; rollover moves to 04:00 UTC.
        assert_eq!(day_key_at(datetime!(2025-07-01 03:59 UTC), tz), "2025-06-30");
        assert_eq!(day_key_at(datetime!(2025-07-01 04:00 UTC), tz), "2025-07-01");
    }

    #[test]
    fn key_is_zero_padded() {
        let tz = new_york();
        assert_eq!(day_key_at(datetime!(2025-03-05 12:00 UTC), tz), "2025-03-05");
    }
}
