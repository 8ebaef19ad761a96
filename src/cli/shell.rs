use std::io;

use crate::config::ConfigManager;
use crate::core::errors::CliError;
use crate::storage::SqliteStore;
use crate::utils::build_info;

use super::commands::system::QUIT_KEY;
use super::formatters::CliFormatters;
use super::io::{EditorReader, LineReader, ScriptReader};
use super::menu;
use super::output;
use super::shell_context::{CliMode, LoopControl, ShellContext};

/// Opens the store named by the working-directory config and runs the menu
/// until the user quits or input ends.
pub fn run_cli() -> Result<(), CliError> {
    let config_manager = ConfigManager::from_working_dir()?;
    let config = config_manager.load()?;
    output::apply_config(&config);

    let database_path = config_manager.database_path(&config);
    let store = SqliteStore::open(&database_path)?;
    tracing::info!(path = %database_path.display(), "record store ready");

    let mode = CliMode::detect();
    let input: Box<dyn LineReader> = match mode {
        CliMode::Interactive => Box::new(EditorReader::new()?),
        CliMode::Script => Box::new(ScriptReader::new(io::stdin().lock())),
    };

    let mut context = ShellContext::new(
        Box::new(store),
        input,
        CliFormatters::from_config(&config),
    );

    if mode == CliMode::Interactive {
        output::info(build_info::current().banner_line());
    }

    run_loop(&mut context)?;
    context.shutdown()
}

/// Displays the menu and runs one operation per choice.
///
/// Ending input at the menu prompt behaves like choosing Quit.
pub fn run_loop(context: &mut ShellContext) -> Result<(), CliError> {
    while context.running {
        menu::render(&context.registry);
        let choice = match context.read_choice()? {
            Some(choice) => choice,
            None => QUIT_KEY.to_string(),
        };

        match context.dispatch(choice.trim()) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err)?,
        }
    }
    Ok(())
}
