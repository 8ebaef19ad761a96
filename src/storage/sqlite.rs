//! SQLite storage implementation

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension, Row};

use super::{schema, RecordStore, Result};
use crate::domain::{Entry, EntryKind, Goal};

/// SQLite-backed store owning the single connection for the program run.
///
/// The connection stays in autocommit mode, so each statement commits on its own.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "opening record store");
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Creates any missing table; existing tables and rows are left untouched.
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    // ========== Entry Operations ==========

    fn insert_entry(
        &self,
        kind: EntryKind,
        name: &str,
        category: &str,
        amount: f64,
    ) -> Result<()> {
        let sql = format!(
            "INSERT INTO {} ({}, category, amount) VALUES (?1, ?2, ?3)",
            kind.table(),
            kind.name_column()
        );
        self.conn.execute(&sql, params![name, category, amount])?;
        tracing::debug!(%kind, id = self.conn.last_insert_rowid(), "entry inserted");
        Ok(())
    }

    fn list_entries(&self, kind: EntryKind, category: Option<&str>) -> Result<Vec<Entry>> {
        let base = format!(
            "SELECT id, {}, category, amount FROM {}",
            kind.name_column(),
            kind.table()
        );
        let entries = match category {
            Some(category) => {
                let mut stmt = self
                    .conn
                    .prepare(&format!("{base} WHERE category = ?1 ORDER BY id"))?;
                let rows = stmt.query_map([category], |row| row_to_entry(kind, row))?;
                rows.collect::<rusqlite::Result<Vec<_>>>()?
            }
            None => {
                let mut stmt = self.conn.prepare(&format!("{base} ORDER BY id"))?;
                let rows = stmt.query_map([], |row| row_to_entry(kind, row))?;
                rows.collect::<rusqlite::Result<Vec<_>>>()?
            }
        };
        Ok(entries)
    }
}

impl RecordStore for SqliteStore {
    fn insert_expense(&self, name: &str, category: &str, amount: f64) -> Result<()> {
        self.insert_entry(EntryKind::Expense, name, category, amount)
    }

    fn list_expenses(&self) -> Result<Vec<Entry>> {
        self.list_entries(EntryKind::Expense, None)
    }

    fn list_expenses_by_category(&self, category: &str) -> Result<Vec<Entry>> {
        self.list_entries(EntryKind::Expense, Some(category))
    }

    fn insert_income(&self, name: &str, category: &str, amount: f64) -> Result<()> {
        self.insert_entry(EntryKind::Income, name, category, amount)
    }

    fn list_income(&self) -> Result<Vec<Entry>> {
        self.list_entries(EntryKind::Income, None)
    }

    fn list_income_by_category(&self, category: &str) -> Result<Vec<Entry>> {
        self.list_entries(EntryKind::Income, Some(category))
    }

    // ========== Budget Operations ==========

    fn upsert_budget(&self, category: &str, limit: f64) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO budgets (category, budget_limit) VALUES (?1, ?2)",
            params![category, limit],
        )?;
        tracing::debug!(category, limit, "budget stored");
        Ok(())
    }

    fn get_budget(&self, category: &str) -> Result<Option<f64>> {
        let limit = self
            .conn
            .query_row(
                "SELECT budget_limit FROM budgets WHERE category = ?1",
                [category],
                |row| row.get::<_, f64>(0),
            )
            .optional()?;
        Ok(limit)
    }

    // ========== Goal Operations ==========

    fn insert_goal(&self, description: &str, target: f64) -> Result<()> {
        self.conn.execute(
            "INSERT INTO goals (description, target) VALUES (?1, ?2)",
            params![description, target],
        )?;
        tracing::debug!(id = self.conn.last_insert_rowid(), "goal inserted");
        Ok(())
    }

    fn list_goals(&self) -> Result<Vec<Goal>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, description, target, progress FROM goals ORDER BY id")?;
        let goals = stmt
            .query_map([], |row| {
                Ok(Goal {
                    id: row.get(0)?,
                    description: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                    target: row.get(2)?,
                    progress: row.get(3)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(goals)
    }

    fn update_goal_progress(&self, id: i64, progress: f64) -> Result<()> {
        let changed = self.conn.execute(
            "UPDATE goals SET progress = ?1 WHERE id = ?2",
            params![progress, id],
        )?;
        if changed == 0 {
            tracing::debug!(id, "goal progress update matched no goal");
        }
        Ok(())
    }

    fn close(self: Box<Self>) -> Result<()> {
        self.conn.close().map_err(|(_, err)| err.into())
    }
}

fn row_to_entry(kind: EntryKind, row: &Row<'_>) -> rusqlite::Result<Entry> {
    Ok(Entry {
        id: row.get(0)?,
        kind,
        name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        category: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        amount: row.get(3)?,
    })
}
