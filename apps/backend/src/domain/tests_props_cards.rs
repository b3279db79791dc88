//! Property tests for card ordering and hand classification.
//!
//! Properties tested:
//! - `compare_cards` is a strict total order on the 52-card deck
//! - Any diamond outranks any non-diamond
//! - `classify` is total and agrees with `is_run` / rank counting
//! - `PlayedHand::new` normalizes card order ascending

use std::cmp::Ordering;
use std::env;

use proptest::prelude::*;

use crate::domain::hands::{classify, is_run, HandType, PlayedHand};
use crate::domain::ordering::compare_cards;
use crate::domain::{Card, PlayerId, Rank, Suit};

fn proptest_config() -> ProptestConfig {
    let cases = env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(64);

    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

fn suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::ALL.to_vec())
}

fn rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::ALL.to_vec())
}

fn card() -> impl Strategy<Value = Card> {
    (suit(), rank()).prop_map(|(suit, rank)| Card { suit, rank })
}

/// 1 to `max` distinct cards drawn from a shuffled full deck.
fn unique_cards(max: usize) -> impl Strategy<Value = Vec<Card>> {
    let deck: Vec<Card> = Suit::ALL
        .into_iter()
        .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card { suit, rank }))
        .collect();
    prop::sample::subsequence(deck, 1..=max).prop_shuffle()
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn prop_compare_cards_is_antisymmetric(a in card(), b in card()) {
        prop_assert_eq!(compare_cards(a, b), compare_cards(b, a).reverse());
    }

    #[test]
    fn prop_compare_cards_equal_only_on_identity(a in card(), b in card()) {
        prop_assert_eq!(compare_cards(a, b) == Ordering::Equal, a == b);
    }

    #[test]
    fn prop_compare_cards_is_transitive(a in card(), b in card(), c in card()) {
        if compare_cards(a, b) != Ordering::Less && compare_cards(b, c) != Ordering::Less {
            prop_assert_ne!(compare_cards(a, c), Ordering::Less);
        }
    }

    #[test]
    fn prop_diamonds_dominate(rank_d in rank(), other in card()) {
        prop_assume!(other.suit != Suit::Diamonds);
        let diamond = Card { suit: Suit::Diamonds, rank: rank_d };
        prop_assert_eq!(compare_cards(diamond, other), Ordering::Greater);
    }

    #[test]
    fn prop_classify_is_total_and_consistent(cards in unique_cards(6)) {
        let hand_type = classify(&cards);
        match hand_type {
            HandType::Single => prop_assert_eq!(cards.len(), 1),
            HandType::Pair | HandType::Triple | HandType::Quad => {
                let expected = match hand_type {
                    HandType::Pair => 2,
                    HandType::Triple => 3,
                    _ => 4,
                };
                prop_assert_eq!(cards.len(), expected);
                let rank = cards[0].rank;
                prop_assert!(cards.iter().all(|c| c.rank == rank));
            }
            HandType::Run => {
                prop_assert!(cards.len() >= 3);
                prop_assert!(is_run(&cards));
            }
            HandType::None => {
                // Neither a same-rank group nor a run.
                let rank = cards[0].rank;
                prop_assert!(
                    cards.len() < 2
                        || cards.len() > 4
                        || !cards.iter().all(|c| c.rank == rank)
                );
                prop_assert!(!is_run(&cards));
            }
        }
    }

    #[test]
    fn prop_a_quad_is_never_a_run(rank in rank()) {
        let cards: Vec<Card> = Suit::ALL.into_iter().map(|suit| Card { suit, rank }).collect();
        prop_assert_eq!(classify(&cards), HandType::Quad);
        prop_assert!(!is_run(&cards));
    }

    #[test]
    fn prop_played_hand_sorts_cards_ascending(cards in unique_cards(5)) {
        let hand = PlayedHand::new(classify(&cards), cards, PlayerId::nil());
        for pair in hand.cards.windows(2) {
            prop_assert_eq!(compare_cards(pair[0], pair[1]), Ordering::Less);
        }
    }
}
