//! Domain-level error type used across the game engine.
//!
//! Transport-agnostic: every variant is a recoverable caller mistake that
//! becomes a unicast `Error` event to the requester, never a broadcast and
//! never a process failure. Session state is left untouched on every path
//! that returns one of these.

use thiserror::Error;

use super::error_code::ErrorCode;
use crate::domain::hands::HandType;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Game not found")]
    GameNotFound,
    #[error("Game is full")]
    RoomFull,
    #[error("Player name already exists")]
    NameTaken,
    #[error("Must have 3 or 4 players to start the game")]
    WrongPlayerCount,
    #[error("Game has already started")]
    AlreadyStarted,
    #[error("Game is not in progress")]
    WrongPhase,
    #[error("Not your turn")]
    NotYourTurn,
    #[error("Not a valid hand combination")]
    InvalidCombination,
    #[error("Must play a {0}")]
    MustMatchType(HandType),
    #[error("Hand is not strong enough")]
    TooWeak,
    #[error("Invalid run extension")]
    InvalidRunExtension,
    #[error("Card not in hand")]
    CardNotInHand,
    #[error("Invalid card: {0}")]
    ParseCard(String),
}

impl GameError {
    pub fn parse_card(token: impl Into<String>) -> Self {
        Self::ParseCard(token.into())
    }

    /// Stable machine code for the wire.
    pub fn code(&self) -> ErrorCode {
        match self {
            GameError::GameNotFound => ErrorCode::GameNotFound,
            GameError::RoomFull => ErrorCode::RoomFull,
            GameError::NameTaken => ErrorCode::NameTaken,
            GameError::WrongPlayerCount => ErrorCode::WrongPlayerCount,
            GameError::AlreadyStarted => ErrorCode::AlreadyStarted,
            GameError::WrongPhase => ErrorCode::WrongPhase,
            GameError::NotYourTurn => ErrorCode::NotYourTurn,
            GameError::InvalidCombination => ErrorCode::InvalidCombination,
            GameError::MustMatchType(_) => ErrorCode::MustMatchType,
            GameError::TooWeak => ErrorCode::TooWeak,
            GameError::InvalidRunExtension => ErrorCode::InvalidRunExtension,
            GameError::CardNotInHand => ErrorCode::CardNotInHand,
            GameError::ParseCard(_) => ErrorCode::BadRequest,
        }
    }
}
