//! Database schema definitions

pub const CREATE_EXPENSES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS expenses (
    id INTEGER PRIMARY KEY,
    expense_name TEXT,
    category TEXT,
    amount REAL
)
"#;

pub const CREATE_INCOME_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS income (
    id INTEGER PRIMARY KEY,
    income_name TEXT,
    category TEXT,
    amount REAL
)
"#;

/// One row per category; `INSERT OR REPLACE` on this key gives upsert semantics.
pub const CREATE_BUDGETS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS budgets (
    category TEXT PRIMARY KEY,
    budget_limit REAL
)
"#;

pub const CREATE_GOALS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS goals (
    id INTEGER PRIMARY KEY,
    description TEXT,
    target REAL,
    progress REAL DEFAULT 0
)
"#;

/// All schema creation statements
pub fn all_schema_statements() -> [&'static str; 4] {
    [
        CREATE_EXPENSES_TABLE,
        CREATE_INCOME_TABLE,
        CREATE_BUDGETS_TABLE,
        CREATE_GOALS_TABLE,
    ]
}
