pub mod plain_text;

pub use plain_text::PlainTextRenderer;
