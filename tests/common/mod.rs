// Shared fixtures; included by each integration test via `mod common;`.
#![allow(dead_code)]

use rusqlite::{params, Connection};
use std::{fs, path::Path};

/// Create `path` with `table(localtime INTEGER, payload TEXT)` holding one
/// row per timestamp, inserted in the order given.
pub fn make_log_db(path: &Path, table: &str, timestamps: &[i64]) {
    make_log_db_with_payload(path, table, timestamps, 16);
}

pub fn make_log_db_with_payload(path: &Path, table: &str, timestamps: &[i64], payload_len: usize) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut conn = Connection::open(path).unwrap();
    conn.execute_batch(&format!(
        "CREATE TABLE {table} (localtime INTEGER NOT NULL, payload TEXT NOT NULL);"
    ))
    .unwrap();
    let tx = conn.transaction().unwrap();
    {
        let mut stmt = tx
            .prepare(&format!("INSERT INTO {table} (localtime, payload) VALUES (?1, ?2)"))
            .unwrap();
        for ts in timestamps {
            stmt.execute(params![ts, "x".repeat(payload_len)]).unwrap();
        }
    }
    tx.commit().unwrap();
}

/// Sorted timestamps still present in `table`.
pub fn timestamps(path: &Path, table: &str) -> Vec<i64> {
    let conn = Connection::open(path).unwrap();
    let mut stmt = conn
        .prepare(&format!("SELECT localtime FROM {table} ORDER BY localtime, rowid"))
        .unwrap();
    let rows = stmt
        .query_map([], |r| r.get(0))
        .unwrap()
        .collect::<Result<Vec<i64>, _>>()
        .unwrap();
    rows
}

pub fn row_count(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |r| r.get(0))
        .unwrap()
}

pub fn pragma_i64(conn: &Connection, name: &str) -> i64 {
    conn.query_row(&format!("PRAGMA {name}"), [], |r| r.get(0)).unwrap()
}
