//! Expense and income records.
//!
//! Both live in their own table with an identical shape, so they share one
//! record type and are told apart by [`EntryKind`].

use std::fmt;

/// Which table an [`Entry`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Expense,
    Income,
}

impl EntryKind {
    pub fn table(self) -> &'static str {
        match self {
            EntryKind::Expense => "expenses",
            EntryKind::Income => "income",
        }
    }

    /// Column holding the free-text name of the entry.
    pub fn name_column(self) -> &'static str {
        match self {
            EntryKind::Expense => "expense_name",
            EntryKind::Income => "income_name",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EntryKind::Expense => "expense",
            EntryKind::Income => "income",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single expense or income row.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: i64,
    pub kind: EntryKind,
    pub name: String,
    pub category: String,
    pub amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_distinct_tables() {
        assert_eq!(EntryKind::Expense.table(), "expenses");
        assert_eq!(EntryKind::Income.table(), "income");
        assert_eq!(EntryKind::Income.name_column(), "income_name");
        assert_eq!(EntryKind::Expense.to_string(), "expense");
    }
}
