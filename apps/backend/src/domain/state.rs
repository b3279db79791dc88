//! Per-session mutable game state.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::cards_types::Card;
use super::hands::PlayedHand;

/// A player's identity is their channel connection id. It is rebound when
/// the same name reconnects; the name is the stable identity key.
pub type PlayerId = Uuid;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Waiting,
    Playing,
    Finished,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Cards held; exclusively owned by this player, no duplicates.
    pub cards: Vec<Card>,
    pub score: u32,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            cards: Vec::new(),
            score: 0,
        }
    }
}

/// One game session. Seat order (`players`) is fixed at creation/join time
/// and doubles as turn order once the game starts.
#[derive(Debug, Clone)]
pub struct GameState {
    pub code: String,
    pub players: Vec<Player>,
    /// Full shuffled deck before the game starts; emptied by the deal.
    pub deck: Vec<Card>,
    pub draw_pile: Vec<Card>,
    /// Seat index of the player expected to act.
    pub current_turn: usize,
    /// One entry per player per trick, in turn order.
    pub current_trick: Vec<PlayedHand>,
    /// Most recent non-pass entry of the current trick; cleared when the
    /// trick resolves.
    pub last_valid_hand: Option<PlayedHand>,
    pub status: GameStatus,
}

impl GameState {
    pub fn new(code: String, creator: Player, deck: Vec<Card>) -> Self {
        Self {
            code,
            players: vec![creator],
            deck,
            draw_pile: Vec::new(),
            current_turn: 0,
            current_trick: Vec::new(),
            last_valid_hand: None,
            status: GameStatus::Waiting,
        }
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_turn]
    }

    pub fn seat_of(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// All member channel ids, live or not. Delivery skips stale ones.
    pub fn member_ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(|p| p.id).collect()
    }
}
