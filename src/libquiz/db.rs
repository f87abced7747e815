use log::{debug, error, info, warn};
use rusqlite::{params, Connection, DatabaseName, OptionalExtension, Result};
use std::path::Path;
use std::time::Instant;

use crate::question::Question;

/// Key under which the JSON-encoded question list is stored.
pub const QUIZ_KEY: &str = "quiz-data";

pub fn get_value(connection: &Connection, key: &str) -> Result<Option<String>> {
    let mut statement = connection.prepare("SELECT value FROM KeyValue WHERE key = :key LIMIT 1")?;
    let value = statement
        .query_row(&[(":key", &key)], |row| row.get(0))
        .optional()?;
    Ok(value)
}

pub fn set_value(connection: &Connection, key: &str, value: &str) -> Result<()> {
    match connection.execute(
        "INSERT INTO KeyValue(key, value) VALUES (?1, ?2) \
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, value],
    ) {
        Ok(_) => {
            debug!("[DB] Stored {} bytes under '{}'", value.len(), key);
            Ok(())
        }
        Err(err) => {
            error!("[DB] Error while storing '{}': {:?}", key, err);
            Err(err)
        }
    }
}

/// Reads the persisted quiz. A missing or undecodable entry is an empty quiz.
pub fn load_quiz(connection: &Connection) -> Vec<Question> {
    let raw = match get_value(connection, QUIZ_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("[DB] No saved quiz yet");
            return Vec::new();
        }
        Err(err) => {
            warn!("[DB] Cannot read saved quiz: {}", err);
            return Vec::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(quiz) => quiz,
        Err(err) => {
            warn!("[DB] Saved quiz is corrupt, starting empty: {}", err);
            Vec::new()
        }
    }
}

pub fn save_quiz(connection: &Connection, quiz: &[Question]) -> crate::error::Result<()> {
    let encoded = serde_json::to_string(quiz)?;
    set_value(connection, QUIZ_KEY, &encoded)?;
    debug!("[DB] Saved {} questions", quiz.len());
    Ok(())
}

pub fn create_or_open(src: &Path) -> Result<Connection> {
    if src.exists() {
        info!("[DB] Opening existing Database");
        open_db(src)
    } else {
        info!("[DB] Creating new Database");
        create_db(src)
    }
}

pub fn create_db(dest: &Path) -> Result<Connection> {
    let now = Instant::now();
    let db = init_db(Connection::open_in_memory()?)?;
    match db.backup(DatabaseName::Main, dest, None) {
        Ok(_) => {
            debug!(
                "[DB] Creating and Saving took {} ms.",
                now.elapsed().as_millis()
            );
            // Keep working against the file, not the in-memory copy.
            close_db(db)?;
            open_db(dest)
        }
        Err(err) => {
            warn!("Failed to create database file: {}", err);
            close_db(db)?;
            Err(err)
        }
    }
}

pub fn open_db(src: &Path) -> Result<Connection> {
    let now = Instant::now();
    let db = Connection::open(src)?;
    db.execute(CREATE_KEY_VALUE, ())?;
    debug!("[DB] Opening took {} ms.", now.elapsed().as_millis());
    Ok(db)
}

pub fn close_db(connection: Connection) -> Result<()> {
    info!("[DB] Closing Database");
    match connection.close() {
        Ok(_) => Ok(()),
        Err((conn, _)) => {
            error!("[DB] Cannot close connection. Retrying...");
            conn.close().map_err(|(_, err)| {
                error!("[DB] Cannot close connection! Giving up.");
                err
            })
        }
    }
}

const CREATE_KEY_VALUE: &str = "CREATE TABLE IF NOT EXISTS KeyValue (
      key TEXT NOT NULL PRIMARY KEY,
      value TEXT NOT NULL
    )";

fn init_db(conn: Connection) -> Result<Connection> {
    info!("[DB INIT] Creating tables");
    conn.execute(CREATE_KEY_VALUE, ())?;
    info!("[DB INIT] Created table KeyValue");
    info!("[DB INIT] Database Creation Successful!");

    Ok(conn)
}
