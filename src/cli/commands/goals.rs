use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandResult};
use crate::cli::shell_context::ShellContext;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("9", "Set financial goals", cmd_set_goal),
        CommandEntry::new(
            "10",
            "View progress towards financial goals",
            cmd_view_goals,
        ),
        CommandEntry::new("11", "Update goal progress", cmd_update_progress),
    ]
}

fn cmd_set_goal(context: &mut ShellContext) -> CommandResult {
    let description = context.prompt_text("Enter goal description: ")?;
    let target = context.prompt_decimal("Enter goal amount: ", "goal amount")?;
    context.store().insert_goal(&description, target)?;
    output::success("Goal set.");
    Ok(())
}

fn cmd_view_goals(context: &mut ShellContext) -> CommandResult {
    let goals = context.store().list_goals()?;
    if goals.is_empty() {
        output::info("No goals recorded.");
        return Ok(());
    }
    for goal in &goals {
        output::plain(context.formatters.goal(goal));
    }
    Ok(())
}

// An id with no matching goal still reports success: the update touches zero rows.
fn cmd_update_progress(context: &mut ShellContext) -> CommandResult {
    let id = context.prompt_id("Enter goal ID to update progress: ", "goal ID")?;
    let progress = context.prompt_decimal("Enter new progress amount: ", "progress")?;
    context.store().update_goal_progress(id, progress)?;
    output::success("Goal progress updated.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::cli::commands::test_support::context_with_input;

    #[test]
    fn goal_lifecycle_through_menu() {
        let mut context = context_with_input("House deposit\n20000\n1\n1500\n");
        context.dispatch("9").unwrap();
        context.dispatch("11").unwrap();
        context.dispatch("10").unwrap();

        let goals = context.store().list_goals().unwrap();
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].description, "House deposit");
        assert_eq!(goals[0].target, 20000.0);
        assert_eq!(goals[0].progress, 1500.0);
    }

    #[test]
    fn unknown_goal_id_is_not_an_error() {
        let mut context = context_with_input("42\n10\n");
        context.dispatch("11").unwrap();
        assert!(context.store().list_goals().unwrap().is_empty());
    }

    #[test]
    fn non_numeric_goal_id_stops_before_progress_prompt() {
        let mut context = context_with_input("first\n99\n");
        context.store().insert_goal("Bike", 500.0).unwrap();

        assert!(context.dispatch("11").is_err());
        assert_eq!(context.store().list_goals().unwrap()[0].progress, 0.0);
        // The unread progress line is what the next prompt sees.
        assert_eq!(context.prompt_text("").unwrap(), "99");
    }
}
