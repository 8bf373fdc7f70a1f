#![forbid(unsafe_code)]
use carnet::{prepare_report, AddressBook, BirthdayOptions, Record, ReportRenderer, TextReport, UpcomingBirthday};
use chrono::NaiveDate;

struct CountOnly;

impl ReportRenderer for CountOnly {
    fn render(&self, entries: &[UpcomingBirthday], days_ahead: u32) -> String {
        format!("{} in {days_ahead}", entries.len())
    }
}

fn book() -> AddressBook {
    let mut book = AddressBook::new();
    for (name, bd) in [("Zoe", "16.06.1990"), ("Max", "15.06.1990"), ("Ann", "11.06.1990")] {
        let mut r = Record::new(name).unwrap();
        r.add_birthday(bd).unwrap();
        book.add_record(r);
    }
    book
}

#[test]
fn text_report_groups_by_date() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    let report = prepare_report(&book(), today, &BirthdayOptions::default(), &TextReport);
    assert_eq!(report.generated_on, today);
    assert_eq!(report.days_ahead, 7);
    assert_eq!(report.entries.len(), 3);
    insta::assert_snapshot!(report.content, @r"
    2024.06.11: Ann
    2024.06.17: Max, Zoe
    ");
}

#[test]
fn empty_report_mentions_window() {
    let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let opts = BirthdayOptions { days_ahead: 3, ..BirthdayOptions::default() };
    let report = prepare_report(&book(), today, &opts, &TextReport);
    assert!(report.entries.is_empty());
    assert_eq!(report.content, "No birthdays in the next 3 days.");
}

#[test]
fn custom_renderer() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    let report = prepare_report(&book(), today, &BirthdayOptions::default(), &CountOnly);
    assert_eq!(report.content, "3 in 7");
}
