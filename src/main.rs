use clap::{Parser, Subcommand};
use colored::Colorize;
use env_logger::Env;
use libquiz::db;
use libquiz::QuizStore;
use log::{debug, error};
use rusqlite::Connection;
use std::path::PathBuf;

mod cli;

#[derive(Parser, Debug)]
#[command(name = "QuickQuiz")]
#[command(version, about = "Rapid multiple-choice quizzes: build them, take them.", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, value_name = "FILE", default_value = "quickquiz.db")]
    db: PathBuf,
    #[arg(short, long, default_value = "error")]
    log_level: String,
    /// Answer yes to every confirmation
    #[arg(short, long, default_value = "false")]
    yes: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the questions in the quiz
    List,
    /// Write a new question
    Add,
    /// Rewrite an existing question
    Edit { id: String },
    /// Delete a question
    Delete { id: String },
    /// Delete every question
    Clear,
    /// Take the quiz as a student
    Take,
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level.as_str()))
        .init();

    let conn = match db::create_or_open(&args.db) {
        Ok(conn) => conn,
        Err(e) => {
            error!("{}{}", "Unable to open Database: ".red(), e);
            std::process::exit(1);
        }
    };
    debug!("[DB] Database Connection Successful!");

    let mut store = QuizStore::with_questions(db::load_quiz(&conn));
    debug!("[Setup] Loaded {} questions", store.len());

    let assume_yes = args.yes;
    let confirm = |prompt: &str| assume_yes || cli::confirm(prompt);

    let changed = match args.command {
        Commands::List => {
            cli::print_questions(&store);
            false
        }
        Commands::Add => cli::author(&mut store),
        Commands::Edit { id } => {
            if store.edit_question(&id) {
                if !cli::author(&mut store) {
                    println!(
                        "{}",
                        "The original question was removed and has not been re-added.".yellow()
                    );
                }
                true
            } else {
                println!("{}", format!("No question with id {id}.").yellow());
                false
            }
        }
        Commands::Delete { id } => {
            let deleted = store.delete_question(&id, confirm);
            if deleted {
                println!("{}", "Question deleted.".green());
            }
            deleted
        }
        Commands::Clear => {
            let cleared = store.clear_quiz(confirm);
            if cleared {
                println!("{}", "Quiz cleared.".green());
            }
            cleared
        }
        Commands::Take => {
            cli::take(&mut store);
            false
        }
    };

    if changed {
        save(&conn, &store);
    }
    finish(conn);
}

fn save(conn: &Connection, store: &QuizStore) {
    if let Err(e) = db::save_quiz(conn, store.questions()) {
        error!("{}{}", "Unable to save quiz: ".red(), e);
    }
}

fn finish(conn: Connection) {
    if let Err(e) = db::close_db(conn) {
        error!("{}{}", "Unable to close Database: ".red(), e);
    }
}
