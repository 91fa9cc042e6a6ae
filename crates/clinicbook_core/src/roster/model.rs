//! Store contract over the roster of people.
//!
//! # Responsibility
//! - Define the operations commands are allowed to use against the roster.
//! - Provide the single id lookup shared by every role-qualified variant.
//!
//! # Invariants
//! - `add_person` does not check uniqueness; callers pre-check `has_person`
//!   and `is_person_id_used`.
//! - A roster given to `set_roster` holds unique ids and no two same persons.
//! - `set_person` never lets an edit collide with a different stored person.
//! - The filtered view is a materialized projection of the full list under the
//!   last predicate given to `update_filtered_person_list`.

use crate::model::appointment::{Appointment, AppointmentId};
use crate::model::person::{Person, PersonId, Role};
use crate::model::remark::Remark;
use crate::roster::prefs::UserPrefs;
use chrono::NaiveDateTime;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ModelResult<T> = Result<T, ModelError>;

/// Filter applied to produce the visible person list.
pub type PersonPredicate = Box<dyn Fn(&Person) -> bool>;

/// Store-level failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The target person is not in the roster.
    PersonNotFound(PersonId),
    /// The edited person collides with a different stored person.
    DuplicatePerson(PersonId),
    /// A person was used in a role it does not have.
    RoleMismatch { id: PersonId, expected: Role },
    /// Neither side holds an appointment with this id.
    AppointmentNotFound(AppointmentId),
    /// Every representable person id has been used.
    PersonIdsExhausted,
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PersonNotFound(id) => write!(f, "person not found: {id}"),
            Self::DuplicatePerson(id) => {
                write!(f, "person {id} would duplicate an existing person")
            }
            Self::RoleMismatch { id, expected } => {
                write!(f, "person {id} is not a {}", expected.as_str().to_lowercase())
            }
            Self::AppointmentNotFound(id) => write!(f, "appointment not found: {id}"),
            Self::PersonIdsExhausted => f.write_str("no person ids left to allocate"),
        }
    }
}

impl Error for ModelError {}

/// Linear scan of `persons` for `id`, optionally restricted to one role.
///
/// Every role-qualified lookup goes through here so the matching rule
/// (exact id equality plus role tag) lives in one place.
pub fn find_person_by_id(persons: &[Person], id: PersonId, role: Option<Role>) -> Option<&Person> {
    persons
        .iter()
        .find(|person| person.id() == id && role.map_or(true, |role| person.role() == role))
}

/// Roster store used by commands.
///
/// Commands receive `&mut dyn Model`, so one command runs to completion
/// before the next can touch the store.
pub trait Model {
    fn user_prefs(&self) -> &UserPrefs;

    fn set_user_prefs(&mut self, prefs: UserPrefs);

    /// Appends `person`. No uniqueness check at this layer.
    fn add_person(&mut self, person: Person);

    /// Returns true if a stored person is the same person as `person`.
    fn has_person(&self, person: &Person) -> bool;

    /// Removes the stored person equal to `target`.
    fn delete_person(&mut self, target: &Person) -> ModelResult<()>;

    /// Replaces `target` with `edited` at the same position.
    ///
    /// # Errors
    /// - `PersonNotFound` when `target` is not stored.
    /// - `DuplicatePerson` when `edited` is the same person as, or shares an
    ///   id with, a stored person other than `target`.
    fn set_person(&mut self, target: &Person, edited: Person) -> ModelResult<()>;

    /// Replaces the whole roster and resets the filter to show everyone.
    ///
    /// # Errors
    /// - `DuplicatePerson` when two entries share an id or are the same
    ///   person. The current roster is kept.
    fn set_roster(&mut self, persons: Vec<Person>) -> ModelResult<()>;

    /// Full roster in insertion order.
    fn persons(&self) -> &[Person];

    /// Current filtered view, in roster order.
    fn filtered_persons(&self) -> &[Person];

    /// Recomputes the filtered view. `None` shows everyone.
    fn update_filtered_person_list(&mut self, predicate: Option<PersonPredicate>);

    /// Links `patient` and `doctor` with one logical appointment.
    ///
    /// Inserts a copy into the doctor's list and a copy into the patient's
    /// list, and returns the appointment.
    fn add_appointment(
        &mut self,
        time: NaiveDateTime,
        patient: &Person,
        doctor: &Person,
        remark: Remark,
    ) -> ModelResult<Appointment>;

    /// Removes both copies of one logical appointment.
    fn delete_appointment(&mut self, id: AppointmentId) -> ModelResult<Appointment>;

    /// Allocates an id no stored or previously stored person has used.
    fn next_person_id(&mut self) -> ModelResult<PersonId>;

    /// Whether `id` belongs to a stored person or to one stored earlier.
    ///
    /// The default only sees the current roster.
    fn is_person_id_used(&self, id: PersonId) -> bool {
        find_person_by_id(self.persons(), id, None).is_some()
    }

    fn clear(&mut self) -> ModelResult<()> {
        self.set_roster(Vec::new())
    }

    fn filtered_person_by_id<'a>(&self, persons: &'a [Person], id: PersonId) -> Option<&'a Person> {
        find_person_by_id(persons, id, None)
    }

    fn filtered_patient_by_id<'a>(
        &self,
        persons: &'a [Person],
        id: PersonId,
    ) -> Option<&'a Person> {
        find_person_by_id(persons, id, Some(Role::Patient))
    }

    fn filtered_doctor_by_id<'a>(&self, persons: &'a [Person], id: PersonId) -> Option<&'a Person> {
        find_person_by_id(persons, id, Some(Role::Doctor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::person::PersonBuilder;

    #[test]
    fn lookup_respects_role_filter() {
        let persons = vec![
            PersonBuilder::new(PersonId(1)).build_patient().unwrap(),
            PersonBuilder::new(PersonId(2)).name("Dr Tan").build_doctor().unwrap(),
        ];

        assert_eq!(
            find_person_by_id(&persons, PersonId(1), None).map(Person::id),
            Some(PersonId(1))
        );
        assert!(find_person_by_id(&persons, PersonId(1), Some(Role::Doctor)).is_none());
        assert!(find_person_by_id(&persons, PersonId(2), Some(Role::Doctor)).is_some());
        assert!(find_person_by_id(&persons, PersonId(3), None).is_none());
    }

    #[test]
    fn errors_render_ids() {
        assert_eq!(
            ModelError::RoleMismatch {
                id: PersonId(4),
                expected: Role::Doctor
            }
            .to_string(),
            "person 4 is not a doctor"
        );
        assert_eq!(
            ModelError::PersonNotFound(PersonId(9)).to_string(),
            "person not found: 9"
        );
    }
}
