pub mod aggregate;
pub mod value_object;

pub use aggregate::NavigationState;
pub use value_object::{HeaderTreatment, ScrollBehavior, SectionId};
