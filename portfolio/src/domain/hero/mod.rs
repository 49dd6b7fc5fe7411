pub mod aggregate;
pub mod events;
pub mod value_object;

pub use aggregate::{Typewriter, TypewriterPhase, TypewriterSnapshot};
pub use events::TypewriterEvent;
pub use value_object::{Role, RoleList, TypewriterTimings};
