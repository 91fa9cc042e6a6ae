//! User-facing message templates.
//!
//! Wording is part of the contract: presentation code and tests format
//! against these constants. `{}` marks the single interpolation slot.

use std::fmt::Display;

pub const MESSAGE_INVALID_PERSON_DISPLAYED_INDEX: &str = "The person index provided is invalid";
pub const MESSAGE_INVALID_PATIENT_ID: &str = "The patient id provided is invalid";
pub const MESSAGE_INVALID_DOCTOR_ID: &str = "The doctor id provided is invalid";
pub const MESSAGE_DUPLICATE_PERSON: &str = "This person already exists in the address book";
pub const MESSAGE_NOT_EDITED: &str = "At least one field to edit must be provided.";
pub const MESSAGE_APPOINTMENT_NOT_FOUND: &str =
    "No appointment exists for this patient and doctor at that time";
pub const MESSAGE_PERSON_IDS_EXHAUSTED: &str = "No person ids are left to allocate";

pub const MESSAGE_ADD_REMARK_SUCCESS: &str = "Added remark to Person: {}";
pub const MESSAGE_DELETE_REMARK_SUCCESS: &str = "Removed remark from Person: {}";

pub const MESSAGE_ADD_PERSON_SUCCESS: &str = "New person added: {}";
pub const MESSAGE_DELETE_PERSON_SUCCESS: &str = "Deleted Person: {}";
pub const MESSAGE_EDIT_PERSON_SUCCESS: &str = "Edited Person: {}";

pub const MESSAGE_ADD_APPOINTMENT_SUCCESS: &str = "New appointment added: {}";
pub const MESSAGE_DELETE_APPOINTMENT_SUCCESS: &str = "Deleted appointment: {}";

pub const MESSAGE_PERSONS_LISTED_OVERVIEW: &str = "{} persons listed!";
pub const MESSAGE_LIST_ALL_SUCCESS: &str = "Listed all persons";
pub const MESSAGE_LIST_PATIENTS_SUCCESS: &str = "Listed all patients";
pub const MESSAGE_LIST_DOCTORS_SUCCESS: &str = "Listed all doctors";

pub const MESSAGE_CLEAR_SUCCESS: &str = "Address book has been cleared!";
pub const MESSAGE_EXIT_ACKNOWLEDGEMENT: &str = "Exiting Address Book as requested ...";
pub const MESSAGE_SHOW_HELP: &str = "Opened help window.";

/// Substitutes `value` into the first `{}` of `template`.
pub fn fill(template: &str, value: impl Display) -> String {
    template.replacen("{}", &value.to_string(), 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_replaces_only_the_first_slot() {
        assert_eq!(fill(MESSAGE_PERSONS_LISTED_OVERVIEW, 3), "3 persons listed!");
        assert_eq!(fill("{} and {}", "a"), "a and {}");
    }

    #[test]
    fn fill_keeps_braces_inside_the_value() {
        assert_eq!(
            fill(MESSAGE_ADD_REMARK_SUCCESS, "{}"),
            "Added remark to Person: {}"
        );
    }
}
