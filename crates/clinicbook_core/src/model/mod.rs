//! Roster domain model: people, their contact fields, remarks and appointments.
//!
//! # Responsibility
//! - Define canonical value types used by the store and command layers.
//! - Validate field input at construction so stored values are always valid.
//!
//! # Invariants
//! - Every person is identified by a stable numeric `PersonId`.
//! - "Same person" is a business equality (name + phone), not id equality.
//! - One logical appointment is stored as two independent copies that share
//!   one `AppointmentId`.

pub mod appointment;
pub mod fields;
pub mod person;
pub mod remark;
