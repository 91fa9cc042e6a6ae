//! CLI smoke entry point.
//!
//! # Responsibility
//! - Run a fixed command script against a fresh in-memory roster.
//! - Print each command's feedback so core wiring can be checked by eye.
//!
//! Logging is enabled when `CLINICBOOK_LOG_DIR` holds an absolute path;
//! `CLINICBOOK_LOG_LEVEL` overrides the build-mode default level.

use chrono::NaiveDateTime;
use clinicbook_core::{
    default_log_level, init_logging, AddAppointmentCommand, AddPersonCommand, Command, ExitCommand,
    ListCommand, Model, ModelManager, PersonBuilder, Remark, RemarkCommand,
    APPOINTMENT_TIME_FORMAT,
};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Some(log_dir) = std::env::var_os("CLINICBOOK_LOG_DIR").map(PathBuf::from) {
        let level = std::env::var("CLINICBOOK_LOG_LEVEL")
            .unwrap_or_else(|_| default_log_level().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    println!("clinicbook_core version={}", clinicbook_core::core_version());

    let mut model = ModelManager::new();
    let script = match build_script(&mut model) {
        Ok(script) => script,
        Err(err) => {
            eprintln!("invalid sample data: {err}");
            return ExitCode::FAILURE;
        }
    };

    for command in &script {
        match command.execute(&mut model) {
            Ok(result) => {
                println!("> {}", result.feedback_to_user());
                if result.exit {
                    break;
                }
            }
            Err(err) => {
                log::warn!("event=cli_command module=cli status=error");
                println!("! {err}");
            }
        }
    }

    ExitCode::SUCCESS
}

fn build_script(model: &mut ModelManager) -> Result<Vec<Box<dyn Command>>, Box<dyn Error>> {
    let patient_id = model.next_person_id()?;
    let doctor_id = model.next_person_id()?;
    let patient = PersonBuilder::new(patient_id).build_patient()?;
    let doctor = PersonBuilder::new(doctor_id)
        .name("Dr Tan")
        .phone("61234567")
        .email("tan@clinic.sg")
        .tags(["cardiology"])
        .build_doctor()?;
    let time = NaiveDateTime::parse_from_str("2024-12-31 12:00", APPOINTMENT_TIME_FORMAT)?;

    let script: Vec<Box<dyn Command>> = vec![
        Box::new(AddPersonCommand::new(patient)),
        Box::new(AddPersonCommand::new(doctor)),
        Box::new(RemarkCommand::for_patient(patient_id, Remark::new("Headache"))),
        Box::new(AddAppointmentCommand::new(
            time,
            patient_id,
            doctor_id,
            Remark::new("Follow-up check"),
        )),
        Box::new(RemarkCommand::for_doctor(patient_id, Remark::new("wrong role"))),
        Box::new(RemarkCommand::for_patient(patient_id, Remark::empty())),
        Box::new(ListCommand::all()),
        Box::new(ExitCommand),
    ];
    Ok(script)
}
