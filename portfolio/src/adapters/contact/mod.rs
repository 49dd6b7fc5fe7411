pub mod mailto;
pub mod opener;
pub mod relay;

pub use mailto::{compose_mailto_uri, MailtoDispatcher};
pub use opener::{EchoUrlOpener, SystemUrlOpener};
pub use relay::{HostedRelayDispatcher, RelayCredentials, DEFAULT_RELAY_ENDPOINT};
