#![forbid(unsafe_code)]
use carnet::birthdays::congratulation_date;
use carnet::{AddressBook, BirthdayOptions, LeapDayPolicy, Record};
use chrono::{Datelike, NaiveDate};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn book_with(entries: &[(&str, &str)]) -> AddressBook {
    let mut book = AddressBook::new();
    for (name, bd) in entries {
        let mut r = Record::new(name).unwrap();
        r.add_birthday(bd).unwrap();
        book.add_record(r);
    }
    book
}

fn week() -> BirthdayOptions {
    BirthdayOptions::default()
}

#[test]
fn weekend_birthday_moves_to_monday() {
    // 2024-06-10 est un lundi
    let book = book_with(&[("A", "15.06.1990"), ("B", "20.06.1985"), ("C", "09.06.2000")]);
    let out = book.upcoming_birthdays_on(date(2024, 6, 10), &week());

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].name, "A");
    assert_eq!(out[0].occurrence, date(2024, 6, 15));
    assert_eq!(out[0].congratulation_date, date(2024, 6, 17));
    assert_eq!(out[0].formatted_date(), "2024.06.17");
}

#[test]
fn window_is_inclusive_on_both_ends() {
    let book = book_with(&[("Today", "10.06.1990"), ("Edge", "17.06.1990"), ("Late", "18.06.1990")]);
    let out = book.upcoming_birthdays_on(date(2024, 6, 10), &week());
    let names: Vec<&str> = out.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["Today", "Edge"]);
}

#[test]
fn passed_birthday_rolls_to_next_year() {
    let book = book_with(&[("C", "09.06.2000")]);
    let opts = BirthdayOptions { days_ahead: 365, ..week() };
    let out = book.upcoming_birthdays_on(date(2024, 6, 10), &opts);
    assert_eq!(out[0].occurrence, date(2025, 6, 9));
    assert_eq!(out[0].congratulation_date, date(2025, 6, 9));
}

#[test]
fn year_wraparound() {
    let book = book_with(&[("NewYear", "02.01.1990"), ("TooLate", "05.01.1990")]);
    let out = book.upcoming_birthdays_on(date(2024, 12, 28), &week());
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].name, "NewYear");
    assert_eq!(out[0].formatted_date(), "2025.01.02");
}

#[test]
fn birthday_today_on_saturday() {
    // 2024-12-28 est un samedi
    let book = book_with(&[("Sat", "28.12.1980")]);
    let out = book.upcoming_birthdays_on(date(2024, 12, 28), &week());
    assert_eq!(out[0].occurrence, date(2024, 12, 28));
    assert_eq!(out[0].formatted_date(), "2024.12.30");
}

#[test]
fn sorted_by_congratulation_date_then_name() {
    let book = book_with(&[
        ("Carol", "17.06.1990"),
        ("Bob", "16.06.1990"),
        ("Alice", "15.06.1990"),
        ("Dave", "12.06.1990"),
    ]);
    let out = book.upcoming_birthdays_on(date(2024, 6, 10), &week());
    let got: Vec<(String, String)> = out
        .iter()
        .map(|b| (b.formatted_date(), b.name.clone()))
        .collect();
    assert_eq!(
        got,
        [
            ("2024.06.12".to_string(), "Dave".to_string()),
            ("2024.06.17".to_string(), "Alice".to_string()),
            ("2024.06.17".to_string(), "Bob".to_string()),
            ("2024.06.17".to_string(), "Carol".to_string()),
        ]
    );
    for pair in out.windows(2) {
        assert!(pair[0].formatted_date() <= pair[1].formatted_date());
    }
}

#[test]
fn contacts_without_birthday_are_ignored() {
    let mut book = book_with(&[("A", "11.06.1990")]);
    book.add_record(Record::new("NoDate").unwrap());
    let out = book.upcoming_birthdays_on(date(2024, 6, 10), &week());
    assert_eq!(out.len(), 1);
}

#[test]
fn zero_day_window_only_today() {
    let book = book_with(&[("A", "10.06.1990"), ("B", "11.06.1990")]);
    let opts = BirthdayOptions { days_ahead: 0, ..week() };
    let out = book.upcoming_birthdays_on(date(2024, 6, 10), &opts);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].name, "A");
}

#[test]
fn leap_day_march_first_policy() {
    let book = book_with(&[("Leap", "29.02.2000")]);
    let out = book.upcoming_birthdays_on(date(2025, 2, 25), &week());
    assert_eq!(out[0].occurrence, date(2025, 3, 1));
    // 2025-03-01 est un samedi
    assert_eq!(out[0].formatted_date(), "2025.03.03");
}

#[test]
fn leap_day_february_28_policy() {
    let book = book_with(&[("Leap", "29.02.2000")]);
    let opts = BirthdayOptions {
        leap_day: LeapDayPolicy::FebruaryTwentyEighth,
        ..week()
    };
    let out = book.upcoming_birthdays_on(date(2025, 2, 25), &opts);
    assert_eq!(out[0].occurrence, date(2025, 2, 28));
    assert_eq!(out[0].formatted_date(), "2025.02.28");
}

#[test]
fn leap_day_kept_in_leap_year() {
    let book = book_with(&[("Leap", "29.02.2000")]);
    let out = book.upcoming_birthdays_on(date(2028, 2, 25), &week());
    assert_eq!(out[0].occurrence, date(2028, 2, 29));
}

#[test]
fn leap_day_after_adjusted_date_rolls_over() {
    // 1er mars 2025 déjà passé : occurrence suivante en 2026, toujours le 1er mars
    let book = book_with(&[("Leap", "29.02.2000")]);
    let opts = BirthdayOptions { days_ahead: 400, ..week() };
    let out = book.upcoming_birthdays_on(date(2025, 3, 2), &opts);
    assert_eq!(out[0].occurrence, date(2026, 3, 1));
}

#[test]
fn congratulation_date_weekdays() {
    assert_eq!(congratulation_date(date(2024, 6, 14)), date(2024, 6, 14));
    assert_eq!(congratulation_date(date(2024, 6, 15)), date(2024, 6, 17));
    assert_eq!(congratulation_date(date(2024, 6, 16)), date(2024, 6, 17));
}

#[test]
fn calendar_end_is_handled_without_panic() {
    let last_year = NaiveDate::MAX.year();
    let today = date(last_year, 12, 20);
    // "Jan" est passé et l'année suivante n'est pas représentable : ignoré
    let book = book_with(&[("Dec", "25.12.1990"), ("Jan", "02.01.1990")]);
    let opts = BirthdayOptions { days_ahead: 10_000, ..week() };

    let first = book.upcoming_birthdays_on(today, &opts);
    let second = book.upcoming_birthdays_on(today, &opts);
    assert_eq!(first, second);
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].name, "Dec");
    assert_eq!(first[0].occurrence, date(last_year, 12, 25));
    assert!(first[0].congratulation_date <= NaiveDate::MAX);
}
