//! CLI demo entry point.
//!
//! # Responsibility
//! - Walk the add -> get -> print -> remove flow against the core service.
//! - Optionally enable file logging via `STUDENT_LOG_DIR` / `STUDENT_LOG_LEVEL`.

use chrono::NaiveDate;
use log::info;
use student_core::{
    default_log_level, init_logging, InMemoryStudentRepository, Student, StudentService,
};
use std::error::Error;

const LOG_DIR_ENV: &str = "STUDENT_LOG_DIR";
const LOG_LEVEL_ENV: &str = "STUDENT_LOG_LEVEL";
const DEMO_STUDENT_NAME: &str = "John Doe";

fn main() -> Result<(), Box<dyn Error>> {
    setup_logging();

    let mut service = StudentService::new(InMemoryStudentRepository::new());

    let birth_date = NaiveDate::from_ymd_opt(2000, 1, 1).ok_or("invalid demo birth date")?;
    service.add_new(Student::new(
        DEMO_STUDENT_NAME,
        birth_date,
        "123 Main St, City",
        "123-456-7890",
    ))?;

    match service.get_info(DEMO_STUDENT_NAME)? {
        Some(student) => {
            println!("Student Name: {}", student.name);
            println!(
                "Date of Birth: {}",
                student.date_of_birth.format("%-m/%-d/%Y")
            );
            println!("Address: {}", student.address);
            println!("Phone Number: {}", student.phone_number);
        }
        None => println!("Student not found."),
    }

    service.remove_existing(DEMO_STUDENT_NAME)?;
    Ok(())
}

fn setup_logging() {
    let Ok(log_dir) = std::env::var(LOG_DIR_ENV) else {
        return;
    };
    let level =
        std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string());

    match init_logging(&level, &log_dir) {
        Ok(()) => info!("event=cli_start module=cli status=ok"),
        Err(err) => eprintln!("logging disabled: {err}"),
    }
}
