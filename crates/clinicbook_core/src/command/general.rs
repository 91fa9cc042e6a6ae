//! Clear, help and exit.

use crate::command::messages::{
    MESSAGE_CLEAR_SUCCESS, MESSAGE_EXIT_ACKNOWLEDGEMENT, MESSAGE_SHOW_HELP,
};
use crate::command::{Command, CommandOutcome, CommandResult};
use crate::roster::model::Model;
use log::info;

/// Empties the roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearCommand;

impl ClearCommand {
    pub const COMMAND_WORD: &'static str = "clear";
}

impl Command for ClearCommand {
    fn execute(&self, model: &mut dyn Model) -> CommandOutcome {
        let removed = model.persons().len();
        model.clear()?;
        info!("event=roster_clear module=command status=ok removed={removed}");
        Ok(CommandResult::new(MESSAGE_CLEAR_SUCCESS))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HelpCommand;

impl HelpCommand {
    pub const COMMAND_WORD: &'static str = "help";
}

impl Command for HelpCommand {
    fn execute(&self, _model: &mut dyn Model) -> CommandOutcome {
        Ok(CommandResult::help(MESSAGE_SHOW_HELP))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExitCommand;

impl ExitCommand {
    pub const COMMAND_WORD: &'static str = "exit";
}

impl Command for ExitCommand {
    fn execute(&self, _model: &mut dyn Model) -> CommandOutcome {
        Ok(CommandResult::exit(MESSAGE_EXIT_ACKNOWLEDGEMENT))
    }
}
