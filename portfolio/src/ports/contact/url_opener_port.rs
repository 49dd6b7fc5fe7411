/// Hands a URI to whatever the host uses for it (default mail client for
/// `mailto:`). Fire-and-forget: success means the handler was launched.
pub trait UrlOpenerPort: Send + Sync {
    fn open(&self, uri: &str) -> anyhow::Result<()>;
}
