//! Command layer: validated, synchronous operations over the roster.
//!
//! # Responsibility
//! - Define the `Command` contract and its result/failure types.
//! - Host the concrete command family built on the `Model` store.
//!
//! # Invariants
//! - Every command validates through model lookups before it mutates.
//! - A failing command leaves the model exactly as it found it.
//! - Failures carry one user-facing message, rendered verbatim.

use crate::model::person::{Person, PersonId, Role};
use crate::roster::model::{Model, ModelError};
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

pub mod appointment;
pub mod general;
pub mod messages;
pub mod person;
pub mod remark;
pub mod view;

use messages::{
    MESSAGE_APPOINTMENT_NOT_FOUND, MESSAGE_DUPLICATE_PERSON, MESSAGE_INVALID_DOCTOR_ID,
    MESSAGE_INVALID_PATIENT_ID, MESSAGE_INVALID_PERSON_DISPLAYED_INDEX,
    MESSAGE_PERSON_IDS_EXHAUSTED,
};

pub type CommandOutcome = Result<CommandResult, CommandError>;

/// One validated mutation-or-query unit.
pub trait Command: Debug {
    /// Runs against `model` to completion or fails without mutating it.
    fn execute(&self, model: &mut dyn Model) -> CommandOutcome;
}

/// Text to surface to the user plus presentation flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback_to_user: String,
    /// The presentation layer should open its help view.
    pub show_help: bool,
    /// The host application should shut down.
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback_to_user: impl Into<String>) -> Self {
        Self {
            feedback_to_user: feedback_to_user.into(),
            show_help: false,
            exit: false,
        }
    }

    pub fn help(feedback_to_user: impl Into<String>) -> Self {
        Self {
            show_help: true,
            ..Self::new(feedback_to_user)
        }
    }

    pub fn exit(feedback_to_user: impl Into<String>) -> Self {
        Self {
            exit: true,
            ..Self::new(feedback_to_user)
        }
    }

    pub fn feedback_to_user(&self) -> &str {
        &self.feedback_to_user
    }
}

/// The single failure type raised by `Command::execute`.
///
/// Carries the user-facing message; when the failure came from the store,
/// the underlying `ModelError` is kept as `source()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandError {
    message: String,
    source: Option<ModelError>,
}

impl CommandError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn model_error(&self) -> Option<&ModelError> {
        self.source.as_ref()
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_ref().map(|err| err as &(dyn Error + 'static))
    }
}

impl From<ModelError> for CommandError {
    fn from(value: ModelError) -> Self {
        let message = match &value {
            ModelError::PersonNotFound(_) => MESSAGE_INVALID_PERSON_DISPLAYED_INDEX,
            ModelError::DuplicatePerson(_) => MESSAGE_DUPLICATE_PERSON,
            ModelError::RoleMismatch {
                expected: Role::Patient,
                ..
            } => MESSAGE_INVALID_PATIENT_ID,
            ModelError::RoleMismatch {
                expected: Role::Doctor,
                ..
            } => MESSAGE_INVALID_DOCTOR_ID,
            ModelError::AppointmentNotFound(_) => MESSAGE_APPOINTMENT_NOT_FOUND,
            ModelError::PersonIdsExhausted => MESSAGE_PERSON_IDS_EXHAUSTED,
        };
        Self {
            message: message.to_string(),
            source: Some(value),
        }
    }
}

/// Resolves `id` in the full roster through the role-qualified lookup.
///
/// Returns an owned copy so the caller can go on to mutate the model.
pub(crate) fn lookup_in_roster(model: &dyn Model, id: PersonId, role: Role) -> Option<Person> {
    let persons = model.persons();
    let found = match role {
        Role::Patient => model.filtered_patient_by_id(persons, id),
        Role::Doctor => model.filtered_doctor_by_id(persons, id),
    };
    found.cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_errors_map_to_user_messages_and_keep_source() {
        let err = CommandError::from(ModelError::DuplicatePerson(PersonId(3)));
        assert_eq!(err.message(), MESSAGE_DUPLICATE_PERSON);
        assert_eq!(
            err.model_error(),
            Some(&ModelError::DuplicatePerson(PersonId(3)))
        );
        assert!(err.source().is_some());

        let err = CommandError::from(ModelError::RoleMismatch {
            id: PersonId(1),
            expected: Role::Doctor,
        });
        assert_eq!(err.to_string(), MESSAGE_INVALID_DOCTOR_ID);
    }

    #[test]
    fn plain_errors_have_no_source() {
        let err = CommandError::new("nope");
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "nope");
    }

    #[test]
    fn result_flags() {
        assert!(!CommandResult::new("x").exit);
        assert!(CommandResult::exit("x").exit);
        assert!(CommandResult::help("x").show_help);
        assert_eq!(CommandResult::help("x").feedback_to_user(), "x");
    }
}
