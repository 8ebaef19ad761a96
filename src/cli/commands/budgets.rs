use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandResult};
use crate::cli::shell_context::ShellContext;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("7", "Set budget for a category", cmd_set_budget),
        CommandEntry::new("8", "View budget for a category", cmd_view_budget),
    ]
}

fn cmd_set_budget(context: &mut ShellContext) -> CommandResult {
    let category = context.prompt_text("Enter category: ")?;
    let limit = context.prompt_decimal("Enter budget limit: ", "budget limit")?;
    context.store().upsert_budget(&category, limit)?;
    output::success("Budget set.");
    Ok(())
}

fn cmd_view_budget(context: &mut ShellContext) -> CommandResult {
    let category = context.prompt_text("Enter category: ")?;
    match context.store().get_budget(&category)? {
        Some(limit) => output::plain(format!(
            "Budget for {category}: {}",
            context.formatters.amount(limit)
        )),
        None => output::info("No budget set for this category."),
    }
    Ok(())
}
