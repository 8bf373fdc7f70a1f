#![forbid(unsafe_code)]
use anyhow::Result;
use carnet::{
    io,
    report::{prepare_report, TextReport},
    shell::Session,
    storage::{JsonStorage, Storage},
    BirthdayOptions, LeapDayPolicy,
};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// Carnet de contacts en ligne de commande (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON du carnet
    #[arg(long, global = true, env = "CARNET_BOOK", default_value = "addressbook.json")]
    book: PathBuf,

    /// Fenêtre des anniversaires à venir, en jours
    #[arg(long, global = true, default_value_t = 7)]
    days: u32,

    /// Date du jour (YYYY-MM-DD), par défaut la date locale
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Anniversaires du 29 février les années non bissextiles
    #[arg(long, global = true, value_enum, default_value_t = LeapDayPolicy::MarchFirst)]
    leap_day: LeapDayPolicy,

    /// Sans sous-commande : shell interactif
    #[command(subcommand)]
    cmd: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Afficher les anniversaires à venir
    Birthdays,

    /// Importer des contacts depuis un CSV (`name,phones,birthday`)
    Import {
        #[arg(long)]
        csv: PathBuf,
    },

    /// Exporter le carnet
    Export {
        #[arg(long)]
        json: Option<PathBuf>,
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .try_init();
    }

    let opts = BirthdayOptions {
        days_ahead: cli.days,
        leap_day: cli.leap_day,
    };
    let storage = JsonStorage::open(&cli.book)?;

    match cli.cmd {
        None => {
            let mut session = Session::open(storage, opts)?;
            if let Some(today) = cli.today {
                session = session.with_today(today);
            }
            let stdin = std::io::stdin();
            session.run(stdin.lock(), std::io::stdout())?;
        }
        Some(Commands::Birthdays) => {
            let book = storage.load()?;
            let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
            let report = prepare_report(&book, today, &opts, &TextReport);
            println!("{}", report.content);
        }
        Some(Commands::Import { csv }) => {
            let mut book = storage.load()?;
            let records = io::import_contacts_csv(&csv)?;
            let count = records.len();
            for record in records {
                book.add_record(record);
            }
            storage.save(&book)?;
            println!("Imported {count} contact(s), {} in total", book.len());
        }
        Some(Commands::Export { json, csv }) => {
            let book = storage.load()?;
            if let Some(path) = json {
                io::export_book_json(path, &book)?;
            }
            if let Some(path) = csv {
                io::export_contacts_csv(path, &book)?;
            }
            println!("Exported {} contact(s)", book.len());
        }
    }

    Ok(())
}
