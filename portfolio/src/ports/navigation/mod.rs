pub mod viewport_port;

pub use viewport_port::ViewportPort;
