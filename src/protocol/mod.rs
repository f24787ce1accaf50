//! JSON-lines event protocol for external rendering layers

pub mod events;
pub mod server;

pub use events::{ChangeAction, InputEvent, OutputEvent};
pub use server::{EventServer, ProtocolError, run_event_server};
