//! WebSocket layer: session actors, the registry, and the wire protocol.

pub mod hub;
pub mod protocol;
pub mod session;
