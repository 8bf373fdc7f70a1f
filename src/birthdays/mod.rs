//! Calcul des anniversaires à venir, décalés hors week-end.
mod types;
mod util;
mod window;

pub use types::{BirthdayOptions, LeapDayPolicy, UpcomingBirthday, CONGRATULATION_FORMAT};

use crate::model::AddressBook;
use chrono::NaiveDate;

/// Liste triée (date de félicitation croissante) des contacts dont l'anniversaire
/// tombe dans `[today, today + opts.days_ahead]`.
pub fn upcoming(book: &AddressBook, today: NaiveDate, opts: &BirthdayOptions) -> Vec<UpcomingBirthday> {
    window::collect_upcoming(book, today, opts)
}

/// Date à laquelle féliciter : samedi et dimanche reportés au lundi suivant.
pub fn congratulation_date(occurrence: NaiveDate) -> NaiveDate {
    util::shift_off_weekend(occurrence)
}
