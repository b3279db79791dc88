//! Card and hand strength ordering.
//!
//! Suit hierarchy is the strict linear order ♦ > ♥ > ♠ > ♣: a diamond
//! outranks any non-diamond regardless of rank, and the remaining suits
//! are linearly ranked below it. Together with rank comparison inside a
//! suit this makes `compare_cards` a strict total order over all 52 cards.

use std::cmp::Ordering;

use super::cards_types::{Card, Suit};
use super::hands::{HandType, PlayedHand};

fn suit_strength(suit: Suit) -> u8 {
    match suit {
        Suit::Clubs => 1,
        Suit::Spades => 2,
        Suit::Hearts => 3,
        Suit::Diamonds => 4,
    }
}

/// Compare two cards: same suit by rank, otherwise by suit hierarchy.
pub fn compare_cards(a: Card, b: Card) -> Ordering {
    if a.suit == b.suit {
        a.rank.value().cmp(&b.rank.value())
    } else {
        suit_strength(a.suit).cmp(&suit_strength(b.suit))
    }
}

/// Compare two same-type hands. Hands of different types are incomparable
/// and report `Equal`; the turn engine never compares across types.
///
/// Quads compare by rank alone (suit is irrelevant when all four suits are
/// present). Every other type compares by each hand's strongest card,
/// which `PlayedHand` keeps in last position.
pub fn compare_hands(h1: &PlayedHand, h2: &PlayedHand) -> Ordering {
    if h1.hand_type != h2.hand_type {
        return Ordering::Equal;
    }

    if h1.hand_type == HandType::Quad {
        return match (h1.cards.first(), h2.cards.first()) {
            (Some(a), Some(b)) => a.rank.value().cmp(&b.rank.value()),
            _ => Ordering::Equal,
        };
    }

    match (h1.cards.last(), h2.cards.last()) {
        (Some(a), Some(b)) => compare_cards(*a, *b),
        _ => Ordering::Equal,
    }
}

/// Whether `new_cards` legally extends the run `prev_cards`: the same
/// cards plus exactly 1 or 2 additional same-suit cards that continue the
/// sequence upward. Extension is a legal raise in its own right and does
/// not need to win `compare_hands`.
pub fn can_extend_run(new_cards: &[Card], prev_cards: &[Card]) -> bool {
    let extra = new_cards.len() as i64 - prev_cards.len() as i64;
    if !(1..=2).contains(&extra) {
        return false;
    }

    let mut prev: Vec<Card> = prev_cards.to_vec();
    let mut new: Vec<Card> = new_cards.to_vec();
    prev.sort_by(|a, b| compare_cards(*a, *b));
    new.sort_by(|a, b| compare_cards(*a, *b));

    let Some(first_prev) = prev.first() else {
        return false;
    };
    let suit = first_prev.suit;
    if !new.iter().all(|c| c.suit == suit) {
        return false;
    }

    // The previous run must survive intact as the new run's prefix.
    if new[..prev.len()] != prev[..] {
        return false;
    }

    // The extras continue strictly upward from the previous top card.
    let top = prev[prev.len() - 1].rank.value();
    new[prev.len()..]
        .iter()
        .enumerate()
        .all(|(i, c)| c.rank.value() == top + i as u8 + 1)
}
