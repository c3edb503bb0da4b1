//! Clinic Domain Models

/// Declarative request validation
pub mod validation;

/// Users (admins, doctors, nurses, patients)
pub mod users;

/// Prescriptions
pub mod prescriptions;

/// Medical files (append-only patient history)
pub mod medical_files;

/// Dialysis sessions and protocols
pub mod dialysis;

/// Dialysis machines
pub mod machines;

/// Appointments
pub mod appointments;

/// Domain errors
pub mod errors;

/// Best-effort step execution
pub mod steps;

pub use errors::Error;
