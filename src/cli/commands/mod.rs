pub mod budgets;
pub mod entries;
pub mod goals;
pub mod system;

use crate::cli::registry::{CommandEntry, CommandRegistry};

pub(crate) fn all_entries() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(entries::definitions());
    commands.extend(budgets::definitions());
    commands.extend(goals::definitions());
    commands.extend(system::definitions());
    commands
}

/// Registers every menu option, ordered by its number.
pub(crate) fn register_all(registry: &mut CommandRegistry) {
    let mut entries = all_entries();
    entries.sort_by_key(|entry| entry.key.parse::<u32>().unwrap_or(u32::MAX));
    for entry in entries {
        registry.register(entry);
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_has_twelve_numbered_options_in_order() {
        let mut registry = CommandRegistry::new();
        register_all(&mut registry);
        let keys: Vec<_> = registry.list().iter().map(|entry| entry.key).collect();
        let expected: Vec<String> = (1..=12).map(|n| n.to_string()).collect();
        assert_eq!(keys, expected);
        assert_eq!(registry.get("12").map(|entry| entry.label), Some("Quit"));
        assert!(registry.get("13").is_none());
    }
}
