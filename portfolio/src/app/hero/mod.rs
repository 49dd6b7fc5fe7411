pub mod animator;

pub use animator::{
    spawn_typewriter, TypewriterConfig, TypewriterError, TypewriterHandle, TypewriterResult,
};
