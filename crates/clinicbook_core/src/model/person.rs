//! Person domain model (patients and doctors).
//!
//! # Responsibility
//! - Define the canonical roster entry shared by both roles.
//! - Provide copy-with-edit helpers so commands never mutate stored values
//!   before validation succeeds.
//!
//! # Invariants
//! - `id` is fixed at creation and never reused for another person.
//! - `role` is a tag on the entity; role-specific lookups filter by it.
//! - Domain equality (`is_same_person`) compares name and phone only.

use crate::model::appointment::{Appointment, AppointmentId};
use crate::model::fields::{Address, Email, Name, PersonValidationError, Phone, Tag};
use crate::model::remark::Remark;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// Stable numeric identifier, unique across the whole roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub u64);

impl Display for PersonId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Patient,
    Doctor,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Patient => "Patient",
            Self::Doctor => "Doctor",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One roster entry.
///
/// `PartialEq` is full structural equality and is what the store uses to
/// locate a `target`. Use [`Person::is_same_person`] for the uniqueness rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    id: PersonId,
    role: Role,
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    remark: Remark,
    tags: BTreeSet<Tag>,
    appointments: Vec<Appointment>,
}

impl Person {
    /// Creates a person with no remark, tags or appointments.
    pub fn new(
        id: PersonId,
        role: Role,
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
    ) -> Self {
        Self {
            id,
            role,
            name,
            phone,
            email,
            address,
            remark: Remark::empty(),
            tags: BTreeSet::new(),
            appointments: Vec::new(),
        }
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn remark(&self) -> &Remark {
        &self.remark
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Business equality: same name and same phone, regardless of id.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name && self.phone == other.phone
    }

    pub fn with_name(mut self, name: Name) -> Self {
        self.name = name;
        self
    }

    pub fn with_phone(mut self, phone: Phone) -> Self {
        self.phone = phone;
        self
    }

    pub fn with_email(mut self, email: Email) -> Self {
        self.email = email;
        self
    }

    pub fn with_address(mut self, address: Address) -> Self {
        self.address = address;
        self
    }

    pub fn with_remark(mut self, remark: Remark) -> Self {
        self.remark = remark;
        self
    }

    pub fn with_tags(mut self, tags: BTreeSet<Tag>) -> Self {
        self.tags = tags;
        self
    }

    /// Appends one appointment copy to this person's list.
    pub fn push_appointment(&mut self, appointment: Appointment) {
        self.appointments.push(appointment);
    }

    /// Removes this person's copy of the appointment, if held.
    pub fn remove_appointment(&mut self, id: AppointmentId) -> Option<Appointment> {
        let index = self.appointments.iter().position(|a| a.id == id)?;
        Some(self.appointments.remove(index))
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} {} ({}); Phone: {}; Email: {}; Address: {}; Remark: {}; Tags: ",
            self.id, self.name, self.role, self.phone, self.email, self.address, self.remark
        )?;
        for tag in &self.tags {
            write!(f, "{tag}")?;
        }
        f.write_str("; Appointments: [")?;
        for (index, appointment) in self.appointments.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{appointment}")?;
        }
        f.write_str("]")
    }
}

/// Hands out person ids that are never reused.
///
/// Ids only ever grow, so deleting the newest person does not free its id.
/// Every id that reached the roster is remembered, including ones picked by
/// the caller instead of `next_id`. Once `u64::MAX` has been seen the
/// allocator is exhausted and `next_id` returns `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonIdAllocator {
    next: Option<u64>,
    seen: BTreeSet<PersonId>,
}

impl PersonIdAllocator {
    /// Starts at id 1.
    pub fn new() -> Self {
        Self {
            next: Some(1),
            seen: BTreeSet::new(),
        }
    }

    /// Starts just past `highest`, for rosters loaded with existing ids.
    pub fn starting_after(highest: PersonId) -> Self {
        Self {
            next: highest.0.checked_add(1),
            seen: BTreeSet::new(),
        }
    }

    pub fn next_id(&mut self) -> Option<PersonId> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(PersonId(id))
    }

    /// Records an id that reached the roster so it is never handed out again.
    pub fn observe(&mut self, id: PersonId) {
        self.seen.insert(id);
        if let Some(next) = self.next {
            if id.0 >= next {
                self.next = id.0.checked_add(1);
            }
        }
    }

    /// Whether `id` has ever been stored.
    pub fn has_seen(&self, id: PersonId) -> bool {
        self.seen.contains(&id)
    }
}

impl Default for PersonIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

pub const DEFAULT_NAME: &str = "Amy Bee";
pub const DEFAULT_PHONE: &str = "85355255";
pub const DEFAULT_EMAIL: &str = "amy@gmail.com";
pub const DEFAULT_ADDRESS: &str = "123, Jurong West Ave 6, #08-111";

/// Factory for people from raw (unparsed) field text.
///
/// Fields default to a fixed sample person; `build` validates every field.
#[derive(Debug, Clone)]
pub struct PersonBuilder {
    id: PersonId,
    role: Role,
    name: String,
    phone: String,
    email: String,
    address: String,
    remark: String,
    tags: Vec<String>,
}

impl PersonBuilder {
    pub fn new(id: PersonId) -> Self {
        Self {
            id,
            role: Role::Patient,
            name: DEFAULT_NAME.to_string(),
            phone: DEFAULT_PHONE.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            address: DEFAULT_ADDRESS.to_string(),
            remark: String::new(),
            tags: Vec::new(),
        }
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn remark(mut self, remark: impl Into<String>) -> Self {
        self.remark = remark.into();
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> Result<Person, PersonValidationError> {
        let tags = self
            .tags
            .into_iter()
            .map(Tag::new)
            .collect::<Result<BTreeSet<_>, _>>()?;

        Ok(Person::new(
            self.id,
            self.role,
            Name::new(self.name)?,
            Phone::new(self.phone)?,
            Email::new(self.email)?,
            Address::new(self.address)?,
        )
        .with_remark(Remark::new(self.remark))
        .with_tags(tags))
    }

    pub fn build_patient(self) -> Result<Person, PersonValidationError> {
        self.role(Role::Patient).build()
    }

    pub fn build_doctor(self) -> Result<Person, PersonValidationError> {
        self.role(Role::Doctor).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_person_ignores_id_and_other_fields() {
        let amy = PersonBuilder::new(PersonId(1)).build_patient().unwrap();
        let twin = PersonBuilder::new(PersonId(2))
            .email("other@example.com")
            .remark("different")
            .build_doctor()
            .unwrap();
        let other_phone = PersonBuilder::new(PersonId(3)).phone("999").build_patient().unwrap();

        assert!(amy.is_same_person(&twin));
        assert_ne!(amy, twin);
        assert!(!amy.is_same_person(&other_phone));
    }

    #[test]
    fn with_remark_only_touches_remark() {
        let amy = PersonBuilder::new(PersonId(1)).tags(["diabetic"]).build_patient().unwrap();
        let edited = amy.clone().with_remark(Remark::new("Headache"));

        assert_eq!(edited.remark().value(), "Headache");
        assert_eq!(edited.id(), amy.id());
        assert_eq!(edited.tags(), amy.tags());
        assert_eq!(edited.clone().with_remark(Remark::empty()), amy);
    }

    #[test]
    fn display_lists_every_field() {
        let amy = PersonBuilder::new(PersonId(7))
            .remark("Headache")
            .tags(["friends", "allergic"])
            .build_patient()
            .unwrap();

        assert_eq!(
            amy.to_string(),
            "#7 Amy Bee (Patient); Phone: 85355255; Email: amy@gmail.com; \
             Address: 123, Jurong West Ave 6, #08-111; Remark: Headache; \
             Tags: [allergic][friends]; Appointments: []"
        );
    }

    #[test]
    fn builder_rejects_invalid_fields() {
        let err = PersonBuilder::new(PersonId(1)).tags(["not ok"]).build().unwrap_err();
        assert_eq!(err, PersonValidationError::InvalidTag("not ok".to_string()));
    }

    #[test]
    fn allocator_never_reuses_ids() {
        let mut allocator = PersonIdAllocator::new();
        assert_eq!(allocator.next_id(), Some(PersonId(1)));
        allocator.observe(PersonId(10));
        allocator.observe(PersonId(4));
        assert_eq!(allocator.next_id(), Some(PersonId(11)));
        assert_eq!(
            PersonIdAllocator::starting_after(PersonId(3)).next_id(),
            Some(PersonId(4))
        );
    }

    #[test]
    fn allocator_remembers_observed_ids_only() {
        let mut allocator = PersonIdAllocator::new();
        let handed_out = allocator.next_id().unwrap();
        assert!(!allocator.has_seen(handed_out));

        allocator.observe(handed_out);
        allocator.observe(PersonId(4));
        assert!(allocator.has_seen(PersonId(1)));
        assert!(allocator.has_seen(PersonId(4)));
        assert!(!allocator.has_seen(PersonId(3)));
    }

    #[test]
    fn allocator_is_exhausted_after_the_largest_id() {
        let mut allocator = PersonIdAllocator::new();
        allocator.observe(PersonId(u64::MAX));
        assert_eq!(allocator.next_id(), None);
        assert_eq!(allocator.next_id(), None);

        let mut near_end = PersonIdAllocator::starting_after(PersonId(u64::MAX - 1));
        assert_eq!(near_end.next_id(), Some(PersonId(u64::MAX)));
        assert_eq!(near_end.next_id(), None);
        assert_eq!(PersonIdAllocator::starting_after(PersonId(u64::MAX)).next_id(), None);
    }
}
