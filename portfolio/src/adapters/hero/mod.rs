pub mod terminal;
pub mod watch;

pub use terminal::TerminalHeadline;
pub use watch::WatchHeadline;
