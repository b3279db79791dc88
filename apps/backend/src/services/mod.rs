//! Service layer: command handling over the registry.

pub mod game_flow;
