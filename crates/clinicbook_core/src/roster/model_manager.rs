//! In-memory `Model` implementation.
//!
//! # Responsibility
//! - Hold the full roster in insertion order plus the materialized filtered view.
//! - Enforce identity rules on replacement and keep appointment copies paired.
//!
//! # Invariants
//! - The filtered view is recomputed after every mutation and predicate change.
//! - Failed operations leave the roster untouched.
//! - Ids handed out by `next_person_id` are never handed out again, and an id
//!   that once reached the roster is reported as used for good.
//! - A loaded roster holds unique ids and no two same persons.

use crate::model::appointment::{Appointment, AppointmentId};
use crate::model::person::{Person, PersonId, PersonIdAllocator, Role};
use crate::model::remark::Remark;
use crate::roster::model::{Model, ModelError, ModelResult, PersonPredicate};
use crate::roster::prefs::UserPrefs;
use chrono::NaiveDateTime;
use log::{debug, info, warn};
use std::collections::BTreeSet;
use std::fmt::{Debug, Formatter};

/// Process-scoped roster store, constructed explicitly and passed to commands.
pub struct ModelManager {
    persons: Vec<Person>,
    filtered: Vec<Person>,
    predicate: Option<PersonPredicate>,
    user_prefs: UserPrefs,
    id_allocator: PersonIdAllocator,
}

impl ModelManager {
    /// Creates an empty roster with default preferences.
    pub fn new() -> Self {
        Self {
            persons: Vec::new(),
            filtered: Vec::new(),
            predicate: None,
            user_prefs: UserPrefs::default(),
            id_allocator: PersonIdAllocator::new(),
        }
    }

    /// Creates a store pre-loaded with `persons`, showing everyone.
    ///
    /// # Errors
    /// - `DuplicatePerson` when two entries share an id or are the same person.
    pub fn with_roster(persons: Vec<Person>, user_prefs: UserPrefs) -> ModelResult<Self> {
        let mut model = Self::new();
        model.user_prefs = user_prefs;
        model.set_roster(persons)?;
        Ok(model)
    }

    fn refresh_filtered(&mut self) {
        self.filtered = match &self.predicate {
            Some(predicate) => self
                .persons
                .iter()
                .filter(|person| predicate(*person))
                .cloned()
                .collect(),
            None => self.persons.clone(),
        };
    }

    fn position_of(&self, target: &Person) -> ModelResult<usize> {
        self.persons
            .iter()
            .position(|person| person == target)
            .ok_or(ModelError::PersonNotFound(target.id()))
    }

    fn position_with_role(&self, person: &Person, expected: Role) -> ModelResult<usize> {
        let index = self.position_of(person)?;
        if self.persons[index].role() != expected {
            return Err(ModelError::RoleMismatch {
                id: person.id(),
                expected,
            });
        }
        Ok(index)
    }
}

/// Rejects rosters that break id uniqueness or hold the same person twice.
fn validate_roster(persons: &[Person]) -> ModelResult<()> {
    let mut ids = BTreeSet::new();
    for (index, person) in persons.iter().enumerate() {
        let repeats_person = persons[..index]
            .iter()
            .any(|earlier| earlier.is_same_person(person));
        if !ids.insert(person.id()) || repeats_person {
            return Err(ModelError::DuplicatePerson(person.id()));
        }
    }
    Ok(())
}

impl Default for ModelManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for ModelManager {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelManager")
            .field("persons", &self.persons.len())
            .field("filtered", &self.filtered.len())
            .field("has_predicate", &self.predicate.is_some())
            .field("user_prefs", &self.user_prefs)
            .finish()
    }
}

impl Model for ModelManager {
    fn user_prefs(&self) -> &UserPrefs {
        &self.user_prefs
    }

    fn set_user_prefs(&mut self, prefs: UserPrefs) {
        self.user_prefs = prefs;
    }

    fn add_person(&mut self, person: Person) {
        info!(
            "event=person_add module=roster status=ok id={} role={}",
            person.id(),
            person.role()
        );
        self.id_allocator.observe(person.id());
        self.persons.push(person);
        self.refresh_filtered();
    }

    fn has_person(&self, person: &Person) -> bool {
        self.persons.iter().any(|stored| stored.is_same_person(person))
    }

    fn delete_person(&mut self, target: &Person) -> ModelResult<()> {
        let index = self.position_of(target)?;
        self.persons.remove(index);
        self.refresh_filtered();
        info!(
            "event=person_delete module=roster status=ok id={}",
            target.id()
        );
        Ok(())
    }

    fn set_person(&mut self, target: &Person, edited: Person) -> ModelResult<()> {
        let index = self.position_of(target)?;

        let collides = self.persons.iter().enumerate().any(|(other, stored)| {
            other != index && (stored.is_same_person(&edited) || stored.id() == edited.id())
        });
        if collides {
            warn!(
                "event=person_set module=roster status=rejected reason=duplicate id={}",
                edited.id()
            );
            return Err(ModelError::DuplicatePerson(edited.id()));
        }

        self.id_allocator.observe(edited.id());
        debug!(
            "event=person_set module=roster status=ok id={} index={index}",
            edited.id()
        );
        self.persons[index] = edited;
        self.refresh_filtered();
        Ok(())
    }

    fn set_roster(&mut self, persons: Vec<Person>) -> ModelResult<()> {
        if let Err(err) = validate_roster(&persons) {
            warn!("event=roster_replace module=roster status=rejected reason={err}");
            return Err(err);
        }
        for person in &persons {
            self.id_allocator.observe(person.id());
        }
        info!(
            "event=roster_replace module=roster status=ok count={}",
            persons.len()
        );
        self.persons = persons;
        self.predicate = None;
        self.refresh_filtered();
        Ok(())
    }

    fn persons(&self) -> &[Person] {
        &self.persons
    }

    fn filtered_persons(&self) -> &[Person] {
        &self.filtered
    }

    fn update_filtered_person_list(&mut self, predicate: Option<PersonPredicate>) {
        self.predicate = predicate;
        self.refresh_filtered();
        debug!(
            "event=filter_update module=roster status=ok visible={} total={}",
            self.filtered.len(),
            self.persons.len()
        );
    }

    fn add_appointment(
        &mut self,
        time: NaiveDateTime,
        patient: &Person,
        doctor: &Person,
        remark: Remark,
    ) -> ModelResult<Appointment> {
        let patient_index = self.position_with_role(patient, Role::Patient)?;
        let doctor_index = self.position_with_role(doctor, Role::Doctor)?;

        let appointment = Appointment::new(time, patient.id(), doctor.id(), remark);
        self.persons[doctor_index].push_appointment(appointment.clone());
        self.persons[patient_index].push_appointment(appointment.clone());
        self.refresh_filtered();

        info!(
            "event=appointment_add module=roster status=ok appointment={} patient={} doctor={}",
            appointment.id, appointment.patient_id, appointment.doctor_id
        );
        Ok(appointment)
    }

    fn delete_appointment(&mut self, id: AppointmentId) -> ModelResult<Appointment> {
        let mut removed = None;
        for person in &mut self.persons {
            if let Some(appointment) = person.remove_appointment(id) {
                removed.get_or_insert(appointment);
            }
        }

        let appointment = removed.ok_or(ModelError::AppointmentNotFound(id))?;
        self.refresh_filtered();
        info!(
            "event=appointment_delete module=roster status=ok appointment={id}"
        );
        Ok(appointment)
    }

    fn next_person_id(&mut self) -> ModelResult<PersonId> {
        self.id_allocator.next_id().ok_or_else(|| {
            warn!("event=person_id_allocate module=roster status=error reason=exhausted");
            ModelError::PersonIdsExhausted
        })
    }

    fn is_person_id_used(&self, id: PersonId) -> bool {
        self.id_allocator.has_seen(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::person::PersonBuilder;
    use crate::roster::filter::role_predicate;

    fn patient(id: u64, name: &str) -> Person {
        PersonBuilder::new(PersonId(id))
            .name(name)
            .phone(format!("9000000{id}"))
            .build_patient()
            .unwrap()
    }

    #[test]
    fn filtered_view_follows_mutations_under_active_predicate() {
        let mut model = ModelManager::new();
        model.add_person(patient(1, "Alice"));
        model.update_filtered_person_list(Some(role_predicate(Role::Doctor)));
        assert!(model.filtered_persons().is_empty());

        let doctor = PersonBuilder::new(PersonId(2)).name("Dr Tan").build_doctor().unwrap();
        model.add_person(doctor.clone());
        assert_eq!(model.filtered_persons(), [doctor]);

        model.update_filtered_person_list(None);
        assert_eq!(model.filtered_persons().len(), 2);
    }

    #[test]
    fn next_person_id_skips_ids_already_in_roster() {
        let mut model =
            ModelManager::with_roster(vec![patient(5, "Eve")], UserPrefs::default()).unwrap();
        assert_eq!(model.next_person_id(), Ok(PersonId(6)));

        let eve = model.persons()[0].clone();
        model.delete_person(&eve).unwrap();
        assert_eq!(model.next_person_id(), Ok(PersonId(7)));
        assert!(model.is_person_id_used(PersonId(5)));
        assert!(!model.is_person_id_used(PersonId(6)));
    }

    #[test]
    fn set_roster_resets_filter() {
        let mut model = ModelManager::new();
        model.update_filtered_person_list(Some(Box::new(|_: &Person| false)));
        model.set_roster(vec![patient(1, "Alice")]).unwrap();
        assert_eq!(model.filtered_persons().len(), 1);

        model.clear().unwrap();
        assert!(model.persons().is_empty());
        assert!(model.filtered_persons().is_empty());
    }

    #[test]
    fn rosters_with_repeated_ids_or_persons_are_rejected() {
        let alice = patient(1, "Alice");
        let same_id = patient(1, "Bob");
        let same_person = PersonBuilder::new(PersonId(2))
            .name("Alice")
            .phone(alice.phone().as_str())
            .build_doctor()
            .unwrap();

        assert_eq!(
            ModelManager::with_roster(vec![alice.clone(), same_id], UserPrefs::default())
                .unwrap_err(),
            ModelError::DuplicatePerson(PersonId(1))
        );

        let mut model =
            ModelManager::with_roster(vec![alice.clone()], UserPrefs::default()).unwrap();
        let err = model.set_roster(vec![alice.clone(), same_person]).unwrap_err();
        assert_eq!(err, ModelError::DuplicatePerson(PersonId(2)));
        assert_eq!(model.persons(), [alice]);
    }

    #[test]
    fn exhausted_ids_surface_as_an_error() {
        let mut model = ModelManager::new();
        model.add_person(patient(u64::MAX, "Max"));
        assert_eq!(model.next_person_id(), Err(ModelError::PersonIdsExhausted));
    }
}
