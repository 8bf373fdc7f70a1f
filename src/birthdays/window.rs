use super::{util, BirthdayOptions, UpcomingBirthday};
use crate::model::AddressBook;
use chrono::{Datelike, NaiveDate};

pub(super) fn collect_upcoming(
    book: &AddressBook,
    today: NaiveDate,
    opts: &BirthdayOptions,
) -> Vec<UpcomingBirthday> {
    let end = util::window_end(today, opts.days_ahead);
    let mut out = Vec::new();

    for record in book.records() {
        let Some(birthday) = record.birthday() else {
            continue;
        };
        let Some(occurrence) = next_occurrence(birthday.date(), today, opts) else {
            tracing::warn!(
                contact = record.name().as_str(),
                "birthday occurrence out of calendar range, skipped"
            );
            continue;
        };
        if occurrence > end {
            continue;
        }
        out.push(UpcomingBirthday {
            name: record.name().as_str().to_owned(),
            occurrence,
            congratulation_date: util::shift_off_weekend(occurrence),
        });
    }

    // tri stable : à date égale, l'ordre alphabétique du carnet est conservé
    out.sort_by_key(|b| b.congratulation_date);
    tracing::debug!(
        today = %today,
        days_ahead = opts.days_ahead,
        found = out.len(),
        "upcoming birthdays computed"
    );
    out
}

/// Prochaine occurrence à partir de `today` (inclus) : année courante, sinon suivante.
fn next_occurrence(birthday: NaiveDate, today: NaiveDate, opts: &BirthdayOptions) -> Option<NaiveDate> {
    let this_year = util::occurrence_in(birthday, today.year(), opts.leap_day)?;
    if this_year >= today {
        return Some(this_year);
    }
    util::occurrence_in(birthday, today.year().checked_add(1)?, opts.leap_day)
}
