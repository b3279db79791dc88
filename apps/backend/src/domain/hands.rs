//! Hand classification: mapping a set of cards to a combination type.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use super::cards_types::Card;
use super::ordering::compare_cards;
use super::state::PlayerId;

/// The closed set of playable combinations. `None` denotes an explicit
/// pass, not an invalid play.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandType {
    Single,
    Pair,
    Triple,
    Quad,
    Run,
    None,
}

impl Display for HandType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let s = match self {
            HandType::Single => "single",
            HandType::Pair => "pair",
            HandType::Triple => "triple",
            HandType::Quad => "quad",
            HandType::Run => "run",
            HandType::None => "none",
        };
        write!(f, "{s}")
    }
}

/// Sequential same-suit cards, minimum length 3, no rank wraparound.
pub fn is_run(cards: &[Card]) -> bool {
    if cards.len() < 3 {
        return false;
    }
    let suit = cards[0].suit;
    if !cards.iter().all(|c| c.suit == suit) {
        return false;
    }
    let mut values: Vec<u8> = cards.iter().map(|c| c.rank.value()).collect();
    values.sort_unstable();
    values.windows(2).all(|w| w[1] == w[0] + 1)
}

/// Classify a set of cards. Total and deterministic: every input maps to
/// exactly one `HandType`. Same-rank grouping is checked before run
/// detection, so four of a kind is never misclassified as a run.
pub fn classify(cards: &[Card]) -> HandType {
    if cards.is_empty() {
        return HandType::None;
    }
    if cards.len() == 1 {
        return HandType::Single;
    }

    let first_rank = cards[0].rank;
    if cards.iter().all(|c| c.rank == first_rank) {
        match cards.len() {
            2 => return HandType::Pair,
            3 => return HandType::Triple,
            4 => return HandType::Quad,
            _ => {}
        }
    }

    if is_run(cards) {
        return HandType::Run;
    }

    HandType::None
}

/// One player's play within a trick. Immutable once built; cards are held
/// sorted weakest-to-strongest so the strongest card is always last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedHand {
    #[serde(rename = "type")]
    pub hand_type: HandType,
    pub cards: Vec<Card>,
    pub player_id: PlayerId,
}

impl PlayedHand {
    pub fn new(hand_type: HandType, mut cards: Vec<Card>, player_id: PlayerId) -> Self {
        cards.sort_by(|a, b| compare_cards(*a, *b));
        Self {
            hand_type,
            cards,
            player_id,
        }
    }

    /// An explicit pass: carries no cards.
    pub fn pass(player_id: PlayerId) -> Self {
        Self {
            hand_type: HandType::None,
            cards: Vec::new(),
            player_id,
        }
    }

    pub fn is_pass(&self) -> bool {
        self.hand_type == HandType::None
    }
}
