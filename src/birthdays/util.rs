use super::LeapDayPolicy;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

pub(super) fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    let offset = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => return date,
    };
    date.checked_add_signed(Duration::days(offset))
        .unwrap_or(date)
}

/// Anniversaire `birthday` transposé à l'année `year`.
///
/// `None` seulement si l'année sort de la plage représentable.
pub(super) fn occurrence_in(
    birthday: NaiveDate,
    year: i32,
    policy: LeapDayPolicy,
) -> Option<NaiveDate> {
    if let Some(date) = birthday.with_year(year) {
        return Some(date);
    }
    if (birthday.month(), birthday.day()) != (2, 29) {
        return None;
    }
    match policy {
        LeapDayPolicy::MarchFirst => NaiveDate::from_ymd_opt(year, 3, 1),
        LeapDayPolicy::FebruaryTwentyEighth => NaiveDate::from_ymd_opt(year, 2, 28),
    }
}

pub(super) fn window_end(today: NaiveDate, days_ahead: u32) -> NaiveDate {
    today
        .checked_add_signed(Duration::days(i64::from(days_ahead)))
        .unwrap_or(NaiveDate::MAX)
}
