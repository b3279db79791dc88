//! Deck construction, shuffling, and dealing.

use rand::seq::SliceRandom;
use rand::Rng;

use super::cards_types::{Card, Rank, Suit};
use super::state::{GameState, GameStatus};
use crate::errors::domain::GameError;

/// Generate a full 52-card deck in standard order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(52);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Fisher-Yates shuffled full deck.
pub fn shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut deck = full_deck();
    deck.shuffle(rng);
    deck
}

/// Cards dealt per player: 10 in a 3-player game, 8 in a 4-player game.
pub fn hand_size(player_count: usize) -> usize {
    if player_count == 3 {
        10
    } else {
        8
    }
}

/// Start the game: deal from the top of the shuffled deck in seat order,
/// leave the remainder as the draw pile, zero the scores, and hand the
/// lead to the first seat. Only legal from `Waiting` with 3 or 4 players.
pub fn deal(state: &mut GameState) -> Result<(), GameError> {
    if state.status != GameStatus::Waiting {
        return Err(GameError::AlreadyStarted);
    }
    let count = state.players.len();
    if count != 3 && count != 4 {
        return Err(GameError::WrongPlayerCount);
    }

    let per_player = hand_size(count);
    for (seat, player) in state.players.iter_mut().enumerate() {
        player.cards = state.deck[seat * per_player..(seat + 1) * per_player].to_vec();
        player.score = 0;
    }
    state.draw_pile = state.deck.split_off(count * per_player);
    state.deck.clear();

    state.current_trick.clear();
    state.last_valid_hand = None;
    state.current_turn = 0;
    state.status = GameStatus::Playing;
    Ok(())
}
