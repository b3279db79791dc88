//! Public projections of game state.
//!
//! Everything here is safe to broadcast: a player's own cards never appear
//! in these shapes.

use serde::{Deserialize, Serialize};

use super::hands::PlayedHand;
use super::state::{GameState, GameStatus, PlayerId};

/// Public view of a player: identity, score, and hand size only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPublic {
    pub id: PlayerId,
    pub name: String,
    pub score: u32,
    pub card_count: usize,
}

/// Full public snapshot broadcast after every non-terminal turn and
/// replayed privately on rejoin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub current_turn: PlayerId,
    pub current_trick: Vec<PlayedHand>,
    pub last_valid_hand: Option<PlayedHand>,
    pub draw_pile_count: usize,
    pub players: Vec<PlayerPublic>,
    pub status: GameStatus,
}

pub fn players_public(state: &GameState) -> Vec<PlayerPublic> {
    state
        .players
        .iter()
        .map(|p| PlayerPublic {
            id: p.id,
            name: p.name.clone(),
            score: p.score,
            card_count: p.cards.len(),
        })
        .collect()
}

impl GameSnapshot {
    pub fn of(state: &GameState) -> Self {
        Self {
            current_turn: state.current_player().id,
            current_trick: state.current_trick.clone(),
            last_valid_hand: state.last_valid_hand.clone(),
            draw_pile_count: state.draw_pile.len(),
            players: players_public(state),
            status: state.status,
        }
    }
}
