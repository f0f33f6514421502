pub mod event;
pub mod intent;

pub use event::CatalogEvent;
pub use intent::{Intent, ParsedIntent, UNKNOWN_EVENT};
