#![doc(test(attr(deny(warnings))))]

//! Finance Tracker is a single-user record keeper for expenses, income,
//! per-category budgets and savings goals, persisted in a local SQLite file
//! and driven from a numbered text menu.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance Tracker tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
