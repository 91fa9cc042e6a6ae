//! Add, edit and delete people.

use crate::command::messages::{
    fill, MESSAGE_ADD_PERSON_SUCCESS, MESSAGE_DELETE_PERSON_SUCCESS, MESSAGE_DUPLICATE_PERSON,
    MESSAGE_EDIT_PERSON_SUCCESS, MESSAGE_INVALID_PERSON_DISPLAYED_INDEX, MESSAGE_NOT_EDITED,
};
use crate::command::{lookup_in_roster, Command, CommandError, CommandOutcome, CommandResult};
use crate::model::fields::{Address, Email, Name, Phone, Tag};
use crate::model::person::{Person, PersonId, Role};
use crate::roster::model::Model;
use log::{debug, info, warn};
use std::collections::BTreeSet;

/// Adds a fully built person to the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddPersonCommand {
    person: Person,
}

impl AddPersonCommand {
    pub const COMMAND_WORD: &'static str = "add";

    pub fn new(person: Person) -> Self {
        Self { person }
    }
}

impl Command for AddPersonCommand {
    fn execute(&self, model: &mut dyn Model) -> CommandOutcome {
        if model.is_person_id_used(self.person.id()) || model.has_person(&self.person) {
            warn!(
                "event=person_add module=command status=rejected reason=duplicate id={}",
                self.person.id()
            );
            return Err(CommandError::new(MESSAGE_DUPLICATE_PERSON));
        }

        model.add_person(self.person.clone());
        Ok(CommandResult::new(fill(
            MESSAGE_ADD_PERSON_SUCCESS,
            &self.person,
        )))
    }
}

/// Removes one person and strips their appointments from every counterpart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePersonCommand {
    id: PersonId,
    role: Role,
}

impl DeletePersonCommand {
    pub const COMMAND_WORD: &'static str = "delete";

    pub fn new(id: PersonId, role: Role) -> Self {
        Self { id, role }
    }
}

impl Command for DeletePersonCommand {
    fn execute(&self, model: &mut dyn Model) -> CommandOutcome {
        let Some(target) = lookup_in_roster(model, self.id, self.role) else {
            warn!(
                "event=person_delete module=command status=rejected reason=unknown_id id={} role={}",
                self.id, self.role
            );
            return Err(CommandError::new(MESSAGE_INVALID_PERSON_DISPLAYED_INDEX));
        };

        model.delete_person(&target)?;
        for appointment in target.appointments() {
            // Counterpart copy is missing when the roster was loaded unpaired.
            if let Err(err) = model.delete_appointment(appointment.id) {
                debug!(
                    "event=person_delete module=command status=skipped appointment={} counterpart={} reason={err}",
                    appointment.id,
                    appointment.counterpart_id(target.role())
                );
            }
        }

        Ok(CommandResult::new(fill(
            MESSAGE_DELETE_PERSON_SUCCESS,
            &target,
        )))
    }
}

/// Optional replacement values for an edit. Unset fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPersonDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditPersonDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.tags.is_some()
    }

    /// Applies the set fields to a copy of `person`; id, role, remark and
    /// appointments always carry over.
    pub fn apply_to(&self, person: &Person) -> Person {
        let mut edited = person.clone();
        if let Some(name) = &self.name {
            edited = edited.with_name(name.clone());
        }
        if let Some(phone) = &self.phone {
            edited = edited.with_phone(phone.clone());
        }
        if let Some(email) = &self.email {
            edited = edited.with_email(email.clone());
        }
        if let Some(address) = &self.address {
            edited = edited.with_address(address.clone());
        }
        if let Some(tags) = &self.tags {
            edited = edited.with_tags(tags.clone());
        }
        edited
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditPersonCommand {
    id: PersonId,
    role: Role,
    descriptor: EditPersonDescriptor,
}

impl EditPersonCommand {
    pub const COMMAND_WORD: &'static str = "edit";

    pub fn new(id: PersonId, role: Role, descriptor: EditPersonDescriptor) -> Self {
        Self {
            id,
            role,
            descriptor,
        }
    }
}

impl Command for EditPersonCommand {
    fn execute(&self, model: &mut dyn Model) -> CommandOutcome {
        if !self.descriptor.is_any_field_edited() {
            return Err(CommandError::new(MESSAGE_NOT_EDITED));
        }

        let Some(target) = lookup_in_roster(model, self.id, self.role) else {
            return Err(CommandError::new(MESSAGE_INVALID_PERSON_DISPLAYED_INDEX));
        };

        let edited = self.descriptor.apply_to(&target);
        model.set_person(&target, edited.clone())?;

        info!(
            "event=person_edit module=command status=ok id={} role={}",
            self.id, self.role
        );
        Ok(CommandResult::new(fill(MESSAGE_EDIT_PERSON_SUCCESS, &edited)))
    }
}
