pub mod service;

pub use service::NavigationService;
