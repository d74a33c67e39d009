//! Wire types for the Mem0 platform API.
//!
//! Field names follow the service's JSON exactly; everything the server owns is deserialized
//! leniently (optional fields default) since the client never constructs those records.

mod entity;
mod export;
mod feedback;
mod memory;
mod message;
mod options;
mod ping;
mod webhook;

pub use entity::*;
pub use export::*;
pub use feedback::*;
pub use memory::*;
pub use message::*;
pub use options::*;
pub use ping::*;
pub use webhook::*;
