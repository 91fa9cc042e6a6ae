//! Core domain logic for ClinicBook.
//! This crate is the single source of truth for roster invariants.

pub mod command;
pub mod logging;
pub mod model;
pub mod roster;

pub use command::appointment::{AddAppointmentCommand, DeleteAppointmentCommand};
pub use command::general::{ClearCommand, ExitCommand, HelpCommand};
pub use command::person::{
    AddPersonCommand, DeletePersonCommand, EditPersonCommand, EditPersonDescriptor,
};
pub use command::remark::RemarkCommand;
pub use command::view::{FindCommand, ListCommand};
pub use command::{Command, CommandError, CommandOutcome, CommandResult};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::appointment::{Appointment, AppointmentId, APPOINTMENT_TIME_FORMAT};
pub use model::fields::{Address, Email, Name, PersonValidationError, Phone, Tag};
pub use model::person::{Person, PersonBuilder, PersonId, PersonIdAllocator, Role};
pub use model::remark::Remark;
pub use roster::filter::{role_predicate, NameContainsKeywordsPredicate};
pub use roster::model::{find_person_by_id, Model, ModelError, ModelResult, PersonPredicate};
pub use roster::model_manager::ModelManager;
pub use roster::prefs::UserPrefs;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
