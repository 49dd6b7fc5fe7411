pub mod viewport_mem;

pub use viewport_mem::{InMemoryViewport, ScrollRecord};
