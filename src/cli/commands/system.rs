use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandResult};
use crate::cli::shell_context::ShellContext;
use crate::core::errors::CommandError;

pub(crate) const QUIT_KEY: &str = "12";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(QUIT_KEY, "Quit", cmd_quit)]
}

fn cmd_quit(_context: &mut ShellContext) -> CommandResult {
    output::plain("Goodbye!");
    Err(CommandError::ExitRequested)
}
