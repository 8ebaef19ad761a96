//! Record types read back from the store. Budgets are plain
//! `(category, limit)` pairs and need no type of their own.

pub mod entry;
pub mod goal;

pub use entry::{Entry, EntryKind};
pub use goal::Goal;
