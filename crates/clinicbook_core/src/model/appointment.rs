//! Appointment record linking one patient and one doctor.
//!
//! # Invariants
//! - A logical appointment exists as two copies: one in the patient's list and
//!   one in the doctor's list. Both carry the same `id`, time, ids and remark.
//! - `patient_id` names a `Role::Patient` and `doctor_id` a `Role::Doctor` at
//!   creation time.
//! - No overlap/conflict detection is performed.

use crate::model::person::{PersonId, Role};
use crate::model::remark::Remark;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Identifier shared by both copies of one logical appointment.
pub type AppointmentId = Uuid;

/// Display/parse format for appointment times.
pub const APPOINTMENT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,
    pub time: NaiveDateTime,
    pub patient_id: PersonId,
    pub doctor_id: PersonId,
    pub remark: Remark,
}

impl Appointment {
    /// Creates a new logical appointment with a fresh id.
    pub fn new(
        time: NaiveDateTime,
        patient_id: PersonId,
        doctor_id: PersonId,
        remark: Remark,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            time,
            patient_id,
            doctor_id,
            remark,
        }
    }

    /// Returns the id of the other party, seen from a person holding `role`.
    pub fn counterpart_id(&self, role: Role) -> PersonId {
        match role {
            Role::Patient => self.doctor_id,
            Role::Doctor => self.patient_id,
        }
    }

    /// Whether this record belongs to `id`'s list when that person has `role`.
    pub fn involves(&self, id: PersonId, role: Role) -> bool {
        match role {
            Role::Patient => self.patient_id == id,
            Role::Doctor => self.doctor_id == id,
        }
    }
}

impl Display for Appointment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} patient #{} with doctor #{}",
            self.time.format(APPOINTMENT_TIME_FORMAT),
            self.patient_id,
            self.doctor_id
        )?;
        if !self.remark.is_empty() {
            write!(f, " ({})", self.remark)?;
        }
        Ok(())
    }
}
