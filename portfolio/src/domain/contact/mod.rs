pub mod aggregate;
pub mod events;
pub mod value_object;

pub use aggregate::{ContactForm, FormStatus};
pub use value_object::{ContactField, ContactFields, ContactSubmission};
