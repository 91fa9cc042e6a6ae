use chrono::{NaiveDate, NaiveDateTime};
use clinicbook_core::command::messages::{
    fill, MESSAGE_ADD_APPOINTMENT_SUCCESS, MESSAGE_APPOINTMENT_NOT_FOUND,
    MESSAGE_DELETE_APPOINTMENT_SUCCESS, MESSAGE_INVALID_DOCTOR_ID, MESSAGE_INVALID_PATIENT_ID,
};
use clinicbook_core::{
    AddAppointmentCommand, Appointment, Command, DeleteAppointmentCommand, DeletePersonCommand,
    Model, ModelError, ModelManager, Person, PersonBuilder, PersonId, Remark, Role, UserPrefs,
};

fn at(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 12, 31)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .unwrap()
}

fn patient() -> Person {
    PersonBuilder::new(PersonId(1)).build_patient().unwrap()
}

fn doctor() -> Person {
    PersonBuilder::new(PersonId(2))
        .name("Dr Tan")
        .phone("61234567")
        .email("tan@clinic.sg")
        .build_doctor()
        .unwrap()
}

fn seeded() -> ModelManager {
    let mut model = ModelManager::new();
    model.add_person(patient());
    model.add_person(doctor());
    model
}

fn stored(model: &ModelManager, id: u64) -> &Person {
    model
        .filtered_person_by_id(model.persons(), PersonId(id))
        .unwrap()
}

#[test]
fn add_appointment_writes_one_copy_per_side() {
    let mut model = seeded();

    let appointment = model
        .add_appointment(at(12), &patient(), &doctor(), Remark::new("Follow-up check"))
        .unwrap();

    let patient_side = stored(&model, 1).appointments();
    let doctor_side = stored(&model, 2).appointments();
    assert_eq!(patient_side, [appointment.clone()]);
    assert_eq!(doctor_side, [appointment.clone()]);
    assert_eq!(appointment.patient_id, PersonId(1));
    assert_eq!(appointment.doctor_id, PersonId(2));
}

#[test]
fn add_appointment_rejects_swapped_roles() {
    let mut model = seeded();

    let err = model
        .add_appointment(at(12), &doctor(), &patient(), Remark::empty())
        .unwrap_err();

    assert_eq!(
        err,
        ModelError::RoleMismatch {
            id: PersonId(2),
            expected: Role::Patient
        }
    );
    assert!(stored(&model, 1).appointments().is_empty());
    assert!(stored(&model, 2).appointments().is_empty());
}

#[test]
fn overlapping_appointments_are_allowed() {
    let mut model = seeded();
    let command = AddAppointmentCommand::new(at(12), PersonId(1), PersonId(2), Remark::empty());

    command.execute(&mut model).unwrap();
    command.execute(&mut model).unwrap();

    assert_eq!(stored(&model, 1).appointments().len(), 2);
    assert_eq!(stored(&model, 2).appointments().len(), 2);
}

#[test]
fn add_appointment_command_validates_both_ids_before_writing() {
    let mut model = seeded();

    let err = AddAppointmentCommand::new(at(12), PersonId(2), PersonId(2), Remark::empty())
        .execute(&mut model)
        .unwrap_err();
    assert_eq!(err.message(), MESSAGE_INVALID_PATIENT_ID);

    let err = AddAppointmentCommand::new(at(12), PersonId(1), PersonId(1), Remark::empty())
        .execute(&mut model)
        .unwrap_err();
    assert_eq!(err.message(), MESSAGE_INVALID_DOCTOR_ID);

    assert_eq!(model.persons(), [patient(), doctor()]);
}

#[test]
fn add_appointment_command_reports_the_appointment() {
    let mut model = seeded();

    let result = AddAppointmentCommand::new(
        at(13),
        PersonId(1),
        PersonId(2),
        Remark::new("Blood test"),
    )
    .execute(&mut model)
    .unwrap();

    let appointment = &stored(&model, 1).appointments()[0];
    assert_eq!(
        result.feedback_to_user(),
        fill(MESSAGE_ADD_APPOINTMENT_SUCCESS, appointment)
    );
    assert_eq!(
        result.feedback_to_user(),
        "New appointment added: 2024-12-31 13:00 patient #1 with doctor #2 (Blood test)"
    );
}

#[test]
fn delete_appointment_removes_both_copies() {
    let mut model = seeded();
    let first = model
        .add_appointment(at(12), &patient(), &doctor(), Remark::empty())
        .unwrap();
    let patient_now = stored(&model, 1).clone();
    let doctor_now = stored(&model, 2).clone();
    let second = model
        .add_appointment(at(13), &patient_now, &doctor_now, Remark::empty())
        .unwrap();

    let result = DeleteAppointmentCommand::new(PersonId(1), PersonId(2), at(12))
        .execute(&mut model)
        .unwrap();

    assert_eq!(
        result.feedback_to_user(),
        fill(MESSAGE_DELETE_APPOINTMENT_SUCCESS, &first)
    );
    assert_eq!(stored(&model, 1).appointments(), [second.clone()]);
    assert_eq!(stored(&model, 2).appointments(), [second]);

    let err = model.delete_appointment(first.id).unwrap_err();
    assert_eq!(err, ModelError::AppointmentNotFound(first.id));
}

#[test]
fn delete_appointment_command_requires_exact_match() {
    let mut model = seeded();
    model
        .add_appointment(at(12), &patient(), &doctor(), Remark::empty())
        .unwrap();

    let err = DeleteAppointmentCommand::new(PersonId(1), PersonId(2), at(14))
        .execute(&mut model)
        .unwrap_err();

    assert_eq!(err.message(), MESSAGE_APPOINTMENT_NOT_FOUND);
    assert_eq!(stored(&model, 2).appointments().len(), 1);
}

#[test]
fn deleting_a_patient_strips_their_appointments_from_doctors() {
    let mut model = seeded();
    model
        .add_appointment(at(12), &patient(), &doctor(), Remark::empty())
        .unwrap();

    DeletePersonCommand::new(PersonId(1), Role::Patient)
        .execute(&mut model)
        .unwrap();

    assert_eq!(model.persons().len(), 1);
    assert!(stored(&model, 2).appointments().is_empty());
}

#[test]
fn deleting_a_person_skips_counterpart_copies_that_are_missing() {
    let mut unpaired = patient();
    unpaired.push_appointment(Appointment::new(at(9), PersonId(1), PersonId(2), Remark::empty()));
    let mut model = ModelManager::with_roster(vec![unpaired, doctor()], UserPrefs::default())
        .unwrap();

    DeletePersonCommand::new(PersonId(1), Role::Patient)
        .execute(&mut model)
        .unwrap();

    assert_eq!(model.persons(), [doctor()]);
}

#[test]
fn remark_edit_keeps_appointments() {
    let mut model = seeded();
    model
        .add_appointment(at(12), &patient(), &doctor(), Remark::empty())
        .unwrap();

    clinicbook_core::RemarkCommand::for_doctor(PersonId(2), Remark::new("Part-time"))
        .execute(&mut model)
        .unwrap();

    let doctor_now = stored(&model, 2);
    assert_eq!(doctor_now.remark().value(), "Part-time");
    assert_eq!(doctor_now.appointments().len(), 1);
}
