pub mod dispatch_port;
pub mod url_opener_port;

pub use dispatch_port::{ContactDispatchPort, DispatchError, DispatchReceipt, DispatchStrategy};
pub use url_opener_port::UrlOpenerPort;
