//! Wire protocol: the closed set of client commands and server events.

use serde::{Deserialize, Serialize};

use crate::domain::cards_types::Card;
use crate::domain::snapshot::{GameSnapshot, PlayerPublic};
use crate::domain::state::PlayerId;
use crate::errors::ErrorCode;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMsg {
    CreateGame { player_name: String },
    JoinGame { code: String, player_name: String },
    StartGame { code: String },
    PlayHand { code: String, cards: Vec<Card> },
    Pass { code: String },
}

#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMsg {
    GameCreated {
        code: String,
        player_id: PlayerId,
    },

    PlayerJoined {
        players: Vec<PlayerPublic>,
    },

    PlayerRejoined {
        players: Vec<PlayerPublic>,
    },

    RejoinSuccess {
        player_id: PlayerId,
        game_state: GameSnapshot,
    },

    GameStarted {
        players: Vec<PlayerPublic>,
        current_turn: PlayerId,
        draw_pile_count: usize,
    },

    DealCards {
        cards: Vec<Card>,
        draw_pile_count: usize,
    },

    CardDrawn {
        card: Card,
        draw_pile_count: usize,
    },

    GameState {
        game_state: GameSnapshot,
    },

    TrickComplete {
        winning_player_id: PlayerId,
        players: Vec<PlayerPublic>,
    },

    GameOver {
        players: Vec<PlayerPublic>,
    },

    PlayerDisconnected {
        id: PlayerId,
        name: String,
    },

    Error {
        code: ErrorCode,
        message: String,
    },
}
