pub mod service;

pub use service::{ContactService, ContactServiceError, SubmitOutcome};
