/// Appointment model
pub mod model;

/// Input DTOs
pub mod inputs;

/// Repository capability
pub mod repository;

/// Use-cases
pub mod use_cases;

pub use model::{Appointment, AppointmentStatus};
pub use repository::AppointmentRepository;
