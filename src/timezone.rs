use time::{OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone, Tz};

/// Look up a canonical timezone name such as "Pacific/Auckland".
pub fn get_timezone(canonical_timezone: &str) -> Option<&'static Tz> {
    time_tz::timezones::get_by_name(canonical_timezone)
}

/// The offset `timezone` had at the instant `date_time`, so that dates on
/// either side of a daylight saving change land on the right day.
pub fn get_offset_at(timezone: &Tz, date_time: &OffsetDateTime) -> UtcOffset {
    timezone.get_offset_utc(date_time).to_utc()
}
