use colored::Colorize;
use std::fmt;
use std::io::IsTerminal;
use std::sync::{OnceLock, RwLock};

use crate::config::Config;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    /// Record lines and menu text, printed as-is.
    Plain,
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Copy, Debug)]
pub struct OutputPreferences {
    pub color_enabled: bool,
}

impl Default for OutputPreferences {
    fn default() -> Self {
        Self {
            color_enabled: true,
        }
    }
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
    colored::control::set_override(prefs.color_enabled);
}

/// Derives output preferences from the loaded config and the terminal.
///
/// Color stays off when stdout is not a terminal or `NO_COLOR` is set.
pub fn apply_config(config: &Config) {
    let stdout_tty = std::io::stdout().is_terminal();
    let no_color = std::env::var_os("NO_COLOR").is_some();
    set_preferences(OutputPreferences {
        color_enabled: config.color_enabled && stdout_tty && !no_color,
    });
}

fn preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

pub(crate) fn format_message(
    kind: MessageKind,
    message: impl fmt::Display,
    prefs: &OutputPreferences,
) -> String {
    let text = message.to_string();
    let base = match kind {
        MessageKind::Error => format!("Error: {text}"),
        MessageKind::Warning => format!("Warning: {text}"),
        _ => text,
    };

    if !prefs.color_enabled {
        return base;
    }

    match kind {
        MessageKind::Success => base.bright_green().to_string(),
        MessageKind::Warning => base.bright_yellow().to_string(),
        MessageKind::Error => base.bright_red().to_string(),
        MessageKind::Info => base.bright_cyan().to_string(),
        MessageKind::Plain => base,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let prefs = preferences();
    println!("{}", format_message(kind, message, &prefs));
}

pub fn plain(message: impl fmt::Display) {
    print(MessageKind::Plain, message);
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: OutputPreferences = OutputPreferences {
        color_enabled: false,
    };

    #[test]
    fn errors_are_prefixed() {
        assert_eq!(
            format_message(MessageKind::Error, "boom", &PLAIN),
            "Error: boom"
        );
    }

    #[test]
    fn plain_and_success_text_is_unchanged_without_color() {
        assert_eq!(
            format_message(MessageKind::Plain, "1. Add expense", &PLAIN),
            "1. Add expense"
        );
        assert_eq!(
            format_message(MessageKind::Success, "Expense added.", &PLAIN),
            "Expense added."
        );
    }
}
