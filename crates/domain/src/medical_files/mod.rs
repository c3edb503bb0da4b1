/// Medical file model
pub mod model;

/// Repository capability
pub mod repository;

/// Use-cases
pub mod use_cases;

pub use model::{HistoryEntry, MedicalFile, PrescriptionEntry};
pub use repository::MedicalFileRepository;
