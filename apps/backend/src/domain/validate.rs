//! The single validation gate every play passes through.

use std::cmp::Ordering;

use super::cards_types::Card;
use super::hands::{classify, HandType, PlayedHand};
use super::ordering::{can_extend_run, compare_hands};
use super::state::PlayerId;
use crate::errors::domain::GameError;

/// Validate proposed cards against the previously accepted hand of the
/// current trick (None opens the trick). Returns the classified type on
/// success so the caller never re-classifies.
pub fn validate_hand(
    cards: &[Card],
    previous: Option<&PlayedHand>,
) -> Result<HandType, GameError> {
    let hand_type = classify(cards);
    if hand_type == HandType::None {
        return Err(GameError::InvalidCombination);
    }

    let Some(prev) = previous else {
        return Ok(hand_type);
    };

    if hand_type != prev.hand_type {
        return Err(GameError::MustMatchType(prev.hand_type));
    }

    // Runs accept two distinct raises: an equal-length run that outranks
    // the previous one, or a 1-2 card same-suit extension of it.
    if hand_type == HandType::Run {
        if can_extend_run(cards, &prev.cards) {
            return Ok(hand_type);
        }
        if cards.len() != prev.cards.len() {
            return Err(GameError::InvalidRunExtension);
        }
    }

    let candidate = PlayedHand::new(hand_type, cards.to_vec(), PlayerId::nil());
    if compare_hands(&candidate, prev) != Ordering::Greater {
        return Err(GameError::TooWeak);
    }

    Ok(hand_type)
}
