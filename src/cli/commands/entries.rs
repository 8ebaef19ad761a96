//! Expense and income menu options (1-6).

use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandResult};
use crate::cli::shell_context::ShellContext;
use crate::domain::{Entry, EntryKind};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("1", "Add expense", cmd_add_expense),
        CommandEntry::new("2", "View expenses", cmd_view_expenses),
        CommandEntry::new("3", "View expenses by category", cmd_view_expenses_by_category),
        CommandEntry::new("4", "Add income", cmd_add_income),
        CommandEntry::new("5", "View income", cmd_view_income),
        CommandEntry::new("6", "View income by category", cmd_view_income_by_category),
    ]
}

fn cmd_add_expense(context: &mut ShellContext) -> CommandResult {
    add_entry(context, EntryKind::Expense)
}

fn cmd_view_expenses(context: &mut ShellContext) -> CommandResult {
    let expenses = context.store().list_expenses()?;
    print_entries(context, EntryKind::Expense, &expenses);
    Ok(())
}

fn cmd_view_expenses_by_category(context: &mut ShellContext) -> CommandResult {
    let category = context.prompt_text("Enter category: ")?;
    let expenses = context.store().list_expenses_by_category(&category)?;
    print_category_entries(context, &category, &expenses);
    Ok(())
}

fn cmd_add_income(context: &mut ShellContext) -> CommandResult {
    add_entry(context, EntryKind::Income)
}

fn cmd_view_income(context: &mut ShellContext) -> CommandResult {
    let income = context.store().list_income()?;
    print_entries(context, EntryKind::Income, &income);
    Ok(())
}

fn cmd_view_income_by_category(context: &mut ShellContext) -> CommandResult {
    let category = context.prompt_text("Enter category: ")?;
    let income = context.store().list_income_by_category(&category)?;
    print_category_entries(context, &category, &income);
    Ok(())
}

/// Collects every field before touching the store, so a bad amount leaves no row behind.
fn add_entry(context: &mut ShellContext, kind: EntryKind) -> CommandResult {
    let name = context.prompt_text(&format!("Enter {kind} name: "))?;
    let category = context.prompt_text(&format!("Enter {kind} category: "))?;
    let amount = context.prompt_decimal("Enter amount: ", "amount")?;

    let store = context.store();
    match kind {
        EntryKind::Expense => store.insert_expense(&name, &category, amount)?,
        EntryKind::Income => store.insert_income(&name, &category, amount)?,
    }
    match kind {
        EntryKind::Expense => output::success("Expense added."),
        EntryKind::Income => output::success("Income added."),
    }
    Ok(())
}

fn print_entries(context: &ShellContext, kind: EntryKind, entries: &[Entry]) {
    if entries.is_empty() {
        output::info(format!("No {kind} recorded."));
        return;
    }
    for entry in entries {
        output::plain(context.formatters.entry(entry));
    }
}

fn print_category_entries(context: &ShellContext, category: &str, entries: &[Entry]) {
    if entries.is_empty() {
        output::info(format!("No records found in category `{category}`."));
        return;
    }
    for entry in entries {
        output::plain(context.formatters.entry_in_category(entry));
    }
}

#[cfg(test)]
mod tests {
    use crate::cli::commands::test_support::context_with_input;
    use crate::cli::shell_context::LoopControl;
    use crate::core::errors::{CommandError, TrackerError};

    #[test]
    fn add_expense_stores_all_fields() {
        let mut context = context_with_input("Coffee\nFood\n4.50\n");
        context.dispatch("1").unwrap();

        let expenses = context.store().list_expenses().unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(
            (expenses[0].name.as_str(), expenses[0].category.as_str(), expenses[0].amount),
            ("Coffee", "Food", 4.50)
        );
    }

    #[test]
    fn non_numeric_amount_leaves_store_unchanged() {
        let mut context = context_with_input("Coffee\nFood\nabc\n");
        let err = context.dispatch("1").unwrap_err();

        assert!(matches!(
            err,
            CommandError::Core(TrackerError::InvalidInput(_))
        ));
        assert!(context.store().list_expenses().unwrap().is_empty());
    }

    #[test]
    fn add_income_accepts_empty_text_fields() {
        let mut context = context_with_input("\n\n100\n");
        context.dispatch("4").unwrap();

        let income = context.store().list_income().unwrap();
        assert_eq!(income.len(), 1);
        assert_eq!(income[0].name, "");
        assert_eq!(income[0].category, "");
        assert!(context.store().list_expenses().unwrap().is_empty());
    }

    #[test]
    fn non_finite_amount_leaves_store_unchanged() {
        let mut context = context_with_input("Coffee\nFood\nnan\nSalary\nWork\ninf\n");
        let err = context.dispatch("1").unwrap_err();
        assert!(matches!(
            err,
            CommandError::Core(TrackerError::InvalidInput(_))
        ));
        assert!(context.dispatch("4").is_err());

        assert!(context.store().list_expenses().unwrap().is_empty());
        assert!(context.store().list_income().unwrap().is_empty());
    }

    #[test]
    fn category_listings_consume_the_category_prompt() {
        let mut context = context_with_input("Food\nMissing\nLunch\nFood\n8\n");
        context.store().insert_expense("Coffee", "Food", 4.5).unwrap();

        assert_eq!(context.dispatch("3").unwrap(), LoopControl::Continue);
        assert_eq!(context.dispatch("6").unwrap(), LoopControl::Continue);
        assert_eq!(context.dispatch("2").unwrap(), LoopControl::Continue);
        assert_eq!(context.dispatch("5").unwrap(), LoopControl::Continue);

        // The next option must read the line after the two categories.
        context.dispatch("1").unwrap();
        let food = context.store().list_expenses_by_category("Food").unwrap();
        let names: Vec<_> = food.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Coffee", "Lunch"]);
        assert!(context.running);
    }

    #[test]
    fn input_ending_mid_form_requests_exit() {
        let mut context = context_with_input("Coffee\n");
        context.dispatch("1").unwrap();

        assert!(!context.running);
        assert!(context.store().list_expenses().unwrap().is_empty());
    }
}
