//! SQLite persistence for todo items.
//!
//! # Design
//! `Db` is a cheap-to-clone handle around one `rusqlite::Connection`. It is
//! built once at startup and handed to every request through axum state.
//! Each operation locks the connection inside `spawn_blocking`, so handlers
//! never block a runtime worker on SQLite I/O.
//!
//! Schema setup and seeding live in [`Db::migrate`], which is keyed on
//! `PRAGMA user_version`: the sample item is only inserted the first time a
//! database file is migrated.

use std::path::Path;
use std::sync::{Arc, Mutex};

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::StoreError;
use crate::types::TodoItem;

/// Current schema version stored in `PRAGMA user_version`.
const SCHEMA_VERSION: i64 = 1;

/// Text of the item inserted into an empty store on first migration.
pub const SEED_TEXT: &str = "Item1";

#[derive(Clone)]
pub struct Db {
    conn: Arc<Mutex<Connection>>,
}

impl Db {
    /// Open (or create) a database file. `":memory:"` opens a private
    /// in-memory database.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        Ok(Self::from_connection(conn))
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Ok(Self::from_connection(conn))
    }

    fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Create the table and seed it if this database has never been
    /// migrated. Returns whether the sample item was inserted.
    pub async fn migrate(&self) -> Result<bool, StoreError> {
        self.call(|conn| {
            let tx = conn.transaction()?;
            let version: i64 = tx.query_row("PRAGMA user_version", [], |row| row.get(0))?;
            if version >= SCHEMA_VERSION {
                tx.commit()?;
                return Ok(false);
            }

            tx.execute_batch(
                "CREATE TABLE IF NOT EXISTS todo_items (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    text TEXT NOT NULL,
                    is_complete INTEGER NOT NULL DEFAULT 0
                );",
            )?;

            let count: i64 = tx.query_row("SELECT COUNT(*) FROM todo_items", [], |row| row.get(0))?;
            let seeded = count == 0;
            if seeded {
                tx.execute(
                    "INSERT INTO todo_items (text, is_complete) VALUES (?1, ?2)",
                    params![SEED_TEXT, false],
                )?;
            }

            tx.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION}"))?;
            tx.commit()?;
            Ok(seeded)
        })
        .await
    }

    pub async fn list(&self) -> Result<Vec<TodoItem>, StoreError> {
        self.call(|conn| {
            let mut stmt = conn.prepare("SELECT id, text, is_complete FROM todo_items ORDER BY id")?;
            let items = stmt
                .query_map([], row_to_item)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(items)
        })
        .await
    }

    pub async fn get(&self, id: i64) -> Result<TodoItem, StoreError> {
        self.call(move |conn| {
            conn.query_row(
                "SELECT id, text, is_complete FROM todo_items WHERE id = ?1",
                params![id],
                row_to_item,
            )
            .optional()?
            .ok_or(StoreError::NotFound)
        })
        .await
    }

    /// Insert a new row and return it with the id SQLite assigned.
    pub async fn insert(&self, text: String, is_complete: bool) -> Result<TodoItem, StoreError> {
        self.call(move |conn| {
            conn.execute(
                "INSERT INTO todo_items (text, is_complete) VALUES (?1, ?2)",
                params![text, is_complete],
            )?;
            Ok(TodoItem {
                id: conn.last_insert_rowid(),
                text,
                is_complete,
            })
        })
        .await
    }

    /// Overwrite every mutable column of an existing row.
    pub async fn replace(&self, item: TodoItem) -> Result<(), StoreError> {
        self.call(move |conn| {
            let changed = conn.execute(
                "UPDATE todo_items SET text = ?1, is_complete = ?2 WHERE id = ?3",
                params![item.text, item.is_complete, item.id],
            )?;
            if changed == 0 {
                return Err(StoreError::NotFound);
            }
            Ok(())
        })
        .await
    }

    pub async fn delete(&self, id: i64) -> Result<(), StoreError> {
        self.call(move |conn| {
            let changed = conn.execute("DELETE FROM todo_items WHERE id = ?1", params![id])?;
            if changed == 0 {
                return Err(StoreError::NotFound);
            }
            Ok(())
        })
        .await
    }

    /// Run `f` against the locked connection on the blocking pool.
    async fn call<F, T>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut Connection) -> Result<T, StoreError> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut guard = conn.lock().map_err(|_| StoreError::Poisoned)?;
            f(&mut *guard)
        })
        .await?
    }
}

fn row_to_item(row: &Row<'_>) -> rusqlite::Result<TodoItem> {
    Ok(TodoItem {
        id: row.get(0)?,
        text: row.get(1)?,
        is_complete: row.get(2)?,
    })
}
