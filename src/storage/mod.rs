//! Storage layer: one SQLite table per record type.
//!
//! - expenses(id, expense_name, category, amount)
//! - income(id, income_name, category, amount)
//! - budgets(category, budget_limit)
//! - goals(id, description, target, progress)

pub mod schema;
pub mod sqlite;

use crate::domain::{Entry, Goal};

pub use crate::core::errors::Result;
pub use sqlite::SqliteStore;

/// Abstraction over the persistent record store used by the menu controller.
///
/// Every mutating call is committed before it returns.
pub trait RecordStore {
    fn insert_expense(&self, name: &str, category: &str, amount: f64) -> Result<()>;
    fn list_expenses(&self) -> Result<Vec<Entry>>;
    /// Exact, case-sensitive category match. No match yields an empty list.
    fn list_expenses_by_category(&self, category: &str) -> Result<Vec<Entry>>;

    fn insert_income(&self, name: &str, category: &str, amount: f64) -> Result<()>;
    fn list_income(&self) -> Result<Vec<Entry>>;
    fn list_income_by_category(&self, category: &str) -> Result<Vec<Entry>>;

    /// Replaces any existing limit for `category`.
    fn upsert_budget(&self, category: &str, limit: f64) -> Result<()>;
    /// `None` when no budget was ever set, which is distinct from a zero limit.
    fn get_budget(&self, category: &str) -> Result<Option<f64>>;

    /// Creates a goal with progress 0.
    fn insert_goal(&self, description: &str, target: f64) -> Result<()>;
    fn list_goals(&self) -> Result<Vec<Goal>>;
    /// Updating an id that does not exist affects no rows and is not an error.
    fn update_goal_progress(&self, id: i64, progress: f64) -> Result<()>;

    /// Releases the underlying connection.
    fn close(self: Box<Self>) -> Result<()>;
}
