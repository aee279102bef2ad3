//! Types downstream clients interact with.
mod errors;
mod messages;

pub use errors::{Result, RuntimeError};
pub use messages::{BotCommand, WorldEvent};
