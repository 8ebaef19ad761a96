//! Shared runtime state for the menu loop and command execution.

use std::io::IsTerminal;

use crate::core::errors::{CliError, CommandError};
use crate::storage::RecordStore;

use super::{
    commands,
    formatters::CliFormatters,
    io::{self as cli_io, LineReader},
    output,
    registry::CommandRegistry,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

impl CliMode {
    /// Interactive when stdin is a terminal, script mode when it is piped.
    pub fn detect() -> Self {
        if std::io::stdin().is_terminal() {
            CliMode::Interactive
        } else {
            CliMode::Script
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// Owns the record store for the whole session.
///
/// The store is released by [`ShellContext::shutdown`] on Quit, or by drop on
/// any other exit path.
pub struct ShellContext {
    pub registry: CommandRegistry,
    pub formatters: CliFormatters,
    pub running: bool,
    store: Box<dyn RecordStore>,
    input: Box<dyn LineReader>,
}

impl ShellContext {
    pub fn new(
        store: Box<dyn RecordStore>,
        input: Box<dyn LineReader>,
        formatters: CliFormatters,
    ) -> Self {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);
        Self {
            registry,
            formatters,
            running: true,
            store,
            input,
        }
    }

    pub fn store(&self) -> &dyn RecordStore {
        self.store.as_ref()
    }

    pub fn prompt_text(&mut self, prompt: &str) -> Result<String, CommandError> {
        cli_io::prompt_text(self.input.as_mut(), prompt)
    }

    pub fn prompt_decimal(&mut self, prompt: &str, field: &str) -> Result<f64, CommandError> {
        cli_io::prompt_decimal(self.input.as_mut(), prompt, field)
    }

    pub fn prompt_id(&mut self, prompt: &str, field: &str) -> Result<i64, CommandError> {
        cli_io::prompt_id(self.input.as_mut(), prompt, field)
    }

    /// Reads the menu choice. `None` once input has ended.
    pub(crate) fn read_choice(&mut self) -> Result<Option<String>, CliError> {
        Ok(self.input.read_line("Choose an option: ")?)
    }

    pub(crate) fn dispatch(&mut self, choice: &str) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.handler(choice) else {
            output::warning("Invalid choice. Please try again.");
            return Ok(LoopControl::Continue);
        };
        tracing::debug!(choice, "dispatching menu option");
        match handler(self) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            Err(err) => Err(err),
        }
    }

    /// Reports a failed operation. Validation and storage errors are printed and
    /// the session goes on; only a broken input stream ends it.
    pub(crate) fn report_error(&mut self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::Core(err) => {
                tracing::debug!(error = %err, "operation failed");
                output::error(err);
                Ok(())
            }
            CommandError::ExitRequested => {
                self.running = false;
                Ok(())
            }
            CommandError::Io(err) => Err(CliError::Io(err)),
        }
    }

    /// Closes the record store.
    pub fn shutdown(self) -> Result<(), CliError> {
        self.store.close()?;
        tracing::info!("record store closed");
        Ok(())
    }
}
