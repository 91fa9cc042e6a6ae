//! Book and cancel appointments between a patient and a doctor.
//!
//! # Contract
//! - Both ids are resolved in their own role before anything is written.
//! - Booking writes one copy to each side; cancelling removes both copies.
//! - Overlapping appointments are allowed.

use crate::command::messages::{
    fill, MESSAGE_ADD_APPOINTMENT_SUCCESS, MESSAGE_APPOINTMENT_NOT_FOUND,
    MESSAGE_DELETE_APPOINTMENT_SUCCESS, MESSAGE_INVALID_DOCTOR_ID, MESSAGE_INVALID_PATIENT_ID,
};
use crate::command::{lookup_in_roster, Command, CommandError, CommandOutcome, CommandResult};
use crate::model::person::{PersonId, Role};
use crate::model::remark::Remark;
use crate::roster::model::Model;
use chrono::NaiveDateTime;
use log::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddAppointmentCommand {
    time: NaiveDateTime,
    patient_id: PersonId,
    doctor_id: PersonId,
    remark: Remark,
}

impl AddAppointmentCommand {
    pub const COMMAND_WORD: &'static str = "addappt";

    pub fn new(
        time: NaiveDateTime,
        patient_id: PersonId,
        doctor_id: PersonId,
        remark: Remark,
    ) -> Self {
        Self {
            time,
            patient_id,
            doctor_id,
            remark,
        }
    }
}

impl Command for AddAppointmentCommand {
    fn execute(&self, model: &mut dyn Model) -> CommandOutcome {
        let Some(patient) = lookup_in_roster(model, self.patient_id, Role::Patient) else {
            warn!(
                "event=appointment_add module=command status=rejected reason=unknown_patient id={}",
                self.patient_id
            );
            return Err(CommandError::new(MESSAGE_INVALID_PATIENT_ID));
        };
        let Some(doctor) = lookup_in_roster(model, self.doctor_id, Role::Doctor) else {
            warn!(
                "event=appointment_add module=command status=rejected reason=unknown_doctor id={}",
                self.doctor_id
            );
            return Err(CommandError::new(MESSAGE_INVALID_DOCTOR_ID));
        };

        let appointment = model.add_appointment(self.time, &patient, &doctor, self.remark.clone())?;
        Ok(CommandResult::new(fill(
            MESSAGE_ADD_APPOINTMENT_SUCCESS,
            &appointment,
        )))
    }
}

/// Cancels the appointment a patient holds with a doctor at an exact time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteAppointmentCommand {
    patient_id: PersonId,
    doctor_id: PersonId,
    time: NaiveDateTime,
}

impl DeleteAppointmentCommand {
    pub const COMMAND_WORD: &'static str = "deleteappt";

    pub fn new(patient_id: PersonId, doctor_id: PersonId, time: NaiveDateTime) -> Self {
        Self {
            patient_id,
            doctor_id,
            time,
        }
    }
}

impl Command for DeleteAppointmentCommand {
    fn execute(&self, model: &mut dyn Model) -> CommandOutcome {
        let Some(patient) = lookup_in_roster(model, self.patient_id, Role::Patient) else {
            return Err(CommandError::new(MESSAGE_INVALID_PATIENT_ID));
        };

        let Some(appointment_id) = patient
            .appointments()
            .iter()
            .find(|appointment| {
                appointment.involves(self.doctor_id, Role::Doctor) && appointment.time == self.time
            })
            .map(|appointment| appointment.id)
        else {
            return Err(CommandError::new(MESSAGE_APPOINTMENT_NOT_FOUND));
        };

        let removed = model.delete_appointment(appointment_id)?;
        Ok(CommandResult::new(fill(
            MESSAGE_DELETE_APPOINTMENT_SUCCESS,
            &removed,
        )))
    }
}
