/// Session and protocol models
pub mod model;

/// Input DTOs
pub mod inputs;

/// Repository capability
pub mod repository;

/// Use-cases
pub mod use_cases;

pub use model::{DialysisProtocol, DialysisSession};
pub use repository::DialysisRepository;
