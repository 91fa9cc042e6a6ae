//! Sets or clears the remark on one patient or doctor.
//!
//! # Contract
//! - Target is resolved by exact id within the command's role.
//! - A non-empty remark replaces the current one; an empty remark deletes it.
//! - The only failure is an id with no person of that role.

use crate::command::messages::{
    fill, MESSAGE_ADD_REMARK_SUCCESS, MESSAGE_DELETE_REMARK_SUCCESS,
    MESSAGE_INVALID_PERSON_DISPLAYED_INDEX,
};
use crate::command::{lookup_in_roster, Command, CommandError, CommandOutcome, CommandResult};
use crate::model::person::{Person, PersonId, Role};
use crate::model::remark::Remark;
use crate::roster::model::Model;
use log::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemarkCommand {
    id: PersonId,
    remark: Remark,
    role: Role,
}

impl RemarkCommand {
    pub const COMMAND_WORD: &'static str = "remark";

    pub fn new(id: PersonId, remark: Remark, role: Role) -> Self {
        Self { id, remark, role }
    }

    pub fn for_patient(id: PersonId, remark: Remark) -> Self {
        Self::new(id, remark, Role::Patient)
    }

    pub fn for_doctor(id: PersonId, remark: Remark) -> Self {
        Self::new(id, remark, Role::Doctor)
    }

    fn success_message(&self, edited: &Person) -> String {
        let template = if self.remark.is_empty() {
            MESSAGE_DELETE_REMARK_SUCCESS
        } else {
            MESSAGE_ADD_REMARK_SUCCESS
        };
        fill(template, edited)
    }
}

impl Command for RemarkCommand {
    fn execute(&self, model: &mut dyn Model) -> CommandOutcome {
        let Some(target) = lookup_in_roster(model, self.id, self.role) else {
            warn!(
                "event=remark module=command status=rejected reason=unknown_id id={} role={}",
                self.id, self.role
            );
            return Err(CommandError::new(MESSAGE_INVALID_PERSON_DISPLAYED_INDEX));
        };

        let edited = target.clone().with_remark(self.remark.clone());
        model.set_person(&target, edited.clone())?;

        info!(
            "event=remark module=command status=ok id={} role={} cleared={}",
            self.id,
            self.role,
            self.remark.is_empty()
        );
        Ok(CommandResult::new(self.success_message(&edited)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::person::PersonBuilder;
    use crate::roster::model_manager::ModelManager;

    #[test]
    fn doctor_remark_does_not_resolve_patient_ids() {
        let mut model = ModelManager::new();
        let patient = PersonBuilder::new(PersonId(1)).build_patient().unwrap();
        model.add_person(patient.clone());

        let err = RemarkCommand::for_doctor(PersonId(1), Remark::new("On leave"))
            .execute(&mut model)
            .unwrap_err();

        assert_eq!(err.message(), MESSAGE_INVALID_PERSON_DISPLAYED_INDEX);
        assert_eq!(model.persons(), [patient]);
    }

    #[test]
    fn doctor_remark_updates_doctor() {
        let mut model = ModelManager::new();
        let doctor = PersonBuilder::new(PersonId(4)).name("Dr Tan").build_doctor().unwrap();
        model.add_person(doctor.clone());

        let result = RemarkCommand::for_doctor(PersonId(4), Remark::new("On leave"))
            .execute(&mut model)
            .unwrap();

        let expected = doctor.with_remark(Remark::new("On leave"));
        assert_eq!(
            result.feedback_to_user,
            fill(MESSAGE_ADD_REMARK_SUCCESS, &expected)
        );
        assert_eq!(model.persons(), [expected]);
    }
}
