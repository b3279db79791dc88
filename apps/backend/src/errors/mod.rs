//! Error types for the game engine and its wire surface.

pub mod domain;
pub mod error_code;

pub use domain::GameError;
pub use error_code::ErrorCode;
