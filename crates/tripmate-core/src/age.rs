//! Age derivation from a birthday.

use chrono::{Datelike, NaiveDate};

/// Travellers younger than this get the inline advisory.
pub const ADULT_AGE: i32 = 18;

/// Advisory shown next to the birthday field for under-age travellers.
pub const UNDER_AGE_ADVISORY: &str = "User should be 18";

/// Date format produced by `<input type="date">` and sent on the wire.
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// Whole years elapsed between `birthday` and `today`.
///
/// The year difference is reduced by one when today's month/day falls before
/// the birth month/day, so the age only increments on the birthday itself.
pub fn age_on(birthday: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birthday.year();
    if (today.month(), today.day()) < (birthday.month(), birthday.day()) {
        age -= 1;
    }
    age
}

/// Parse the birthday field value. Empty or malformed input yields `None`.
pub fn parse_birthday(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), BIRTHDAY_FORMAT).ok()
}

/// Inline advisory for the birthday field, recomputed on every change.
///
/// Returns `None` for adults and for values that do not parse; the advisory
/// never blocks submission.
pub fn age_advisory(value: &str, today: NaiveDate) -> Option<&'static str> {
    let birthday = parse_birthday(value)?;
    (age_on(birthday, today) < ADULT_AGE).then_some(UNDER_AGE_ADVISORY)
}
