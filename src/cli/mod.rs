pub mod commands;
pub mod formatters;
pub mod io;
pub mod menu;
pub mod output;
pub mod registry;
pub mod shell;
pub mod shell_context;

pub use shell::run_cli;
