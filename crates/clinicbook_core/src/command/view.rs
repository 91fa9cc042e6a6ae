//! Commands that only change the filtered view.

use crate::command::messages::{
    fill, MESSAGE_LIST_ALL_SUCCESS, MESSAGE_LIST_DOCTORS_SUCCESS, MESSAGE_LIST_PATIENTS_SUCCESS,
    MESSAGE_PERSONS_LISTED_OVERVIEW,
};
use crate::command::{Command, CommandOutcome, CommandResult};
use crate::model::person::Role;
use crate::roster::filter::{role_predicate, NameContainsKeywordsPredicate};
use crate::roster::model::Model;

/// Shows people whose name contains any of the keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    predicate: NameContainsKeywordsPredicate,
}

impl FindCommand {
    pub const COMMAND_WORD: &'static str = "find";

    pub fn new(predicate: NameContainsKeywordsPredicate) -> Self {
        Self { predicate }
    }
}

impl Command for FindCommand {
    fn execute(&self, model: &mut dyn Model) -> CommandOutcome {
        model.update_filtered_person_list(Some(self.predicate.clone().into_predicate()));
        let listed = model.filtered_persons().len();
        Ok(CommandResult::new(fill(MESSAGE_PERSONS_LISTED_OVERVIEW, listed)))
    }
}

/// Shows everyone, or only one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCommand {
    role: Option<Role>,
}

impl ListCommand {
    pub const COMMAND_WORD: &'static str = "list";

    pub fn all() -> Self {
        Self { role: None }
    }

    pub fn patients() -> Self {
        Self {
            role: Some(Role::Patient),
        }
    }

    pub fn doctors() -> Self {
        Self {
            role: Some(Role::Doctor),
        }
    }
}

impl Command for ListCommand {
    fn execute(&self, model: &mut dyn Model) -> CommandOutcome {
        model.update_filtered_person_list(self.role.map(role_predicate));
        let message = match self.role {
            None => MESSAGE_LIST_ALL_SUCCESS,
            Some(Role::Patient) => MESSAGE_LIST_PATIENTS_SUCCESS,
            Some(Role::Doctor) => MESSAGE_LIST_DOCTORS_SUCCESS,
        };
        Ok(CommandResult::new(message))
    }
}
