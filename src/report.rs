use crate::birthdays::{BirthdayOptions, UpcomingBirthday};
use crate::model::AddressBook;
use chrono::NaiveDate;

/// Rapport des anniversaires à venir, prêt à afficher.
#[derive(Debug, Clone)]
pub struct BirthdayReport {
    pub generated_on: NaiveDate,
    pub days_ahead: u32,
    pub entries: Vec<UpcomingBirthday>,
    pub content: String,
}

/// Permet de customiser le rendu du rapport (texte, mail, etc.).
pub trait ReportRenderer {
    fn render(&self, entries: &[UpcomingBirthday], days_ahead: u32) -> String;
}

/// Une ligne par date de félicitation : `YYYY.MM.DD: Alice, Bob`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReport;

impl ReportRenderer for TextReport {
    fn render(&self, entries: &[UpcomingBirthday], days_ahead: u32) -> String {
        if entries.is_empty() {
            return format!("No birthdays in the next {days_ahead} days.");
        }

        let mut groups: Vec<(String, Vec<&str>)> = Vec::new();
        for entry in entries {
            let day = entry.formatted_date();
            if let Some((last, names)) = groups.last_mut() {
                if *last == day {
                    names.push(entry.name.as_str());
                    continue;
                }
            }
            groups.push((day, vec![entry.name.as_str()]));
        }

        groups
            .iter()
            .map(|(day, names)| format!("{day}: {}", names.join(", ")))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Calcule la fenêtre et produit le rapport.
pub fn prepare_report(
    book: &AddressBook,
    today: NaiveDate,
    opts: &BirthdayOptions,
    renderer: &dyn ReportRenderer,
) -> BirthdayReport {
    let entries = book.upcoming_birthdays_on(today, opts);
    let content = renderer.render(&entries, opts.days_ahead);
    BirthdayReport {
        generated_on: today,
        days_ahead: opts.days_ahead,
        entries,
        content,
    }
}
