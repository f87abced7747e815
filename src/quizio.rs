use colored::Colorize;
use env_logger::Env;
use log::{error, info};
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use libquiz::db;
use libquiz::transfer::default_export_file_name;
use libquiz::{Error, QuizStore};
use rusqlite::Connection;

#[derive(Parser, Debug)]
#[command(name = "QuickQuiz Import/Export")]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, default_value = "info")]
    log_level: String,
    #[arg(short, long, value_name = "FILE", default_value = "quickquiz.db")]
    db: PathBuf,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replace the quiz with the questions in a JSON file (`-` for stdin)
    Import { json: PathBuf },
    /// Write the quiz as JSON (`-` for stdout, a timestamped file if omitted)
    Export { json: Option<PathBuf> },
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level.as_str()))
        .init();

    let conn = match db::create_or_open(&args.db) {
        Ok(d) => d,
        Err(e) => {
            error!("{}{}", "Unable to open Database: ".red(), e);
            std::process::exit(1);
        }
    };
    let mut store = QuizStore::with_questions(db::load_quiz(&conn));

    let status = match args.command {
        Commands::Import { json } => import(&conn, &mut store, json),
        Commands::Export { json } => export(&store, json),
    };

    if let Err(e) = db::close_db(conn) {
        error!("{}{}", "Unable to close Database: ".red(), e);
    }
    if let Err(e) = status {
        error!("{}", format!("✘ {}", e).red());
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn read_input(from: &Path) -> std::io::Result<String> {
    if from.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(from)
    }
}

fn import(conn: &Connection, store: &mut QuizStore, from: PathBuf) -> Result<(), Error> {
    info!("{}", format!("Importing from {:?}", from).cyan());
    let text = read_input(&from)?;
    let count = store.import_quiz(&text)?;
    for (idx, question) in store.questions().iter().enumerate() {
        info!(
            "{} {}",
            "├".blue(),
            format!("{} ({} choices)", question.headline(idx), question.choices.len()).green()
        );
    }
    db::save_quiz(conn, store.questions())?;
    println!("{}", format!("Imported quiz successfully ({count} questions).").green());
    Ok(())
}

fn export(store: &QuizStore, to: Option<PathBuf>) -> Result<(), Error> {
    let json = store.export_quiz()?;

    let to = to.unwrap_or_else(|| PathBuf::from(default_export_file_name()));
    if to.as_os_str() == "-" {
        println!("{json}");
        return Ok(());
    }
    std::fs::write(&to, json)?;
    info!(
        "{}",
        format!("Exported {} questions to {:?}", store.len(), to).cyan()
    );
    println!("{}", to.display());
    Ok(())
}
