use chrono::NaiveDate;
use clap::ValueEnum;

/// Format des dates de félicitation (`YYYY.MM.DD`).
pub const CONGRATULATION_FORMAT: &str = "%Y.%m.%d";

/// Traitement d'un anniversaire au 29 février une année non bissextile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LeapDayPolicy {
    /// Fêté le 1er mars.
    #[default]
    MarchFirst,
    /// Fêté le 28 février.
    #[value(name = "february-28")]
    FebruaryTwentyEighth,
}

/// Options de la fenêtre d'anniversaires
#[derive(Debug, Clone, Copy)]
pub struct BirthdayOptions {
    pub days_ahead: u32,
    pub leap_day: LeapDayPolicy,
}

impl Default for BirthdayOptions {
    fn default() -> Self {
        Self {
            days_ahead: 7,
            leap_day: LeapDayPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    /// Anniversaire dans l'année retenue (courante ou suivante).
    pub occurrence: NaiveDate,
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    pub fn formatted_date(&self) -> String {
        self.congratulation_date
            .format(CONGRATULATION_FORMAT)
            .to_string()
    }
}
