use crate::cli::shell_context::ShellContext;
use crate::core::errors::CommandError;

pub type CommandResult = Result<(), CommandError>;

pub type CommandHandler = fn(&mut ShellContext) -> CommandResult;

/// A numbered menu option and the operation it runs.
pub struct CommandEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(key: &'static str, label: &'static str, handler: CommandHandler) -> Self {
        Self {
            key,
            label,
            handler,
        }
    }
}

/// Menu options in display order.
///
/// Registering a key that already exists replaces that option in place.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<CommandEntry>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: CommandEntry) {
        match self.commands.iter_mut().find(|existing| existing.key == entry.key) {
            Some(existing) => *existing = entry,
            None => self.commands.push(entry),
        }
    }

    pub fn get(&self, key: &str) -> Option<&CommandEntry> {
        self.commands.iter().find(|entry| entry.key == key)
    }

    pub fn list(&self) -> &[CommandEntry] {
        &self.commands
    }

    pub fn handler(&self, key: &str) -> Option<CommandHandler> {
        self.get(key).map(|entry| entry.handler)
    }
}
