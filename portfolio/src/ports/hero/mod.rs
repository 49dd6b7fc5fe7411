pub mod headline_port;

pub use headline_port::{HeadlineFrame, HeadlinePort};
