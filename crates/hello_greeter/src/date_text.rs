/* 📖 # How is the date in a greeting rendered?

Greetings show the calendar date as `Www Mmm DD YYYY`, for example `Mon Jan 01 2024`:
English weekday and month abbreviations, a zero padded day of month and a four digit year.
There is no time of day and no zone name. Years above 9999 are printed without a sign,
years before 1 get a leading minus, e.g. `Sat Jan 01 10000` and `Jan 01 -0001`.

The date is taken in the offset the timestamp carries. The same instant can fall on a
different day in another offset, and the greeting follows the caller's offset rather than UTC.
*/

use std::fmt::Display;

use chrono::{DateTime, Datelike, TimeZone};

/// chrono format string for the weekday, month and day part of a greeting date.
/// The year is appended by [`year_text`], since `%Y` signs years above 9999.
pub const DATE_FORMAT: &str = "%a %b %d";

/// Render the calendar date of `date` in its own offset, e.g. `Mon Jan 01 2024`.
pub fn render_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    format!("{} {}", date.format(DATE_FORMAT), year_text(date.year()))
}

/// At least four digits, a minus sign only for negative years.
fn year_text(year: i32) -> String {
    if year >= 0 {
        format!("{:04}", year)
    } else {
        format!("-{:04}", year.unsigned_abs())
    }
}
