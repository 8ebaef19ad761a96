use crate::cli::output;
use crate::cli::registry::CommandRegistry;

/// Menu text, one `N. Label` line per registered option.
pub fn main_menu_lines(registry: &CommandRegistry) -> Vec<String> {
    registry
        .list()
        .iter()
        .map(|entry| format!("{}. {}", entry.key, entry.label))
        .collect()
}

pub fn render(registry: &CommandRegistry) {
    output::plain("");
    for line in main_menu_lines(registry) {
        output::plain(line);
    }
    output::plain("");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;

    #[test]
    fn menu_lists_options_one_through_twelve() {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);
        let lines = main_menu_lines(&registry);

        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "1. Add expense");
        assert_eq!(lines[7], "8. View budget for a category");
        assert_eq!(lines[9], "10. View progress towards financial goals");
        assert_eq!(lines[11], "12. Quit");
    }
}
