//! Stable machine-readable error codes exposed on the wire.

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    GameNotFound,
    RoomFull,
    NameTaken,
    WrongPlayerCount,
    AlreadyStarted,
    WrongPhase,
    NotYourTurn,
    InvalidCombination,
    MustMatchType,
    TooWeak,
    InvalidRunExtension,
    CardNotInHand,
    BadRequest,
}

impl ErrorCode {
    /// Every code, for exhaustiveness checks in tests.
    pub const ALL: [ErrorCode; 13] = [
        ErrorCode::GameNotFound,
        ErrorCode::RoomFull,
        ErrorCode::NameTaken,
        ErrorCode::WrongPlayerCount,
        ErrorCode::AlreadyStarted,
        ErrorCode::WrongPhase,
        ErrorCode::NotYourTurn,
        ErrorCode::InvalidCombination,
        ErrorCode::MustMatchType,
        ErrorCode::TooWeak,
        ErrorCode::InvalidRunExtension,
        ErrorCode::CardNotInHand,
        ErrorCode::BadRequest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::GameNotFound => "game_not_found",
            ErrorCode::RoomFull => "room_full",
            ErrorCode::NameTaken => "name_taken",
            ErrorCode::WrongPlayerCount => "wrong_player_count",
            ErrorCode::AlreadyStarted => "already_started",
            ErrorCode::WrongPhase => "wrong_phase",
            ErrorCode::NotYourTurn => "not_your_turn",
            ErrorCode::InvalidCombination => "invalid_combination",
            ErrorCode::MustMatchType => "must_match_type",
            ErrorCode::TooWeak => "too_weak",
            ErrorCode::InvalidRunExtension => "invalid_run_extension",
            ErrorCode::CardNotInHand => "card_not_in_hand",
            ErrorCode::BadRequest => "bad_request",
        }
    }
}
