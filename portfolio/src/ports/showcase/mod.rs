pub mod render_port;

pub use render_port::{ShowcaseBlock, ShowcaseFrame, ShowcaseRendererPort};
