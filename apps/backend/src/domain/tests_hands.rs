use crate::domain::cards_parsing::try_parse_cards;
use crate::domain::hands::{classify, is_run, HandType};
use crate::domain::Card;

fn parse_cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).expect("hardcoded valid card tokens")
}

#[test]
fn empty_is_none() {
    assert_eq!(classify(&[]), HandType::None);
}

#[test]
fn one_card_is_single() {
    assert_eq!(classify(&parse_cards(&["7H"])), HandType::Single);
}

#[test]
fn same_rank_groups() {
    assert_eq!(classify(&parse_cards(&["7H", "7S"])), HandType::Pair);
    assert_eq!(classify(&parse_cards(&["7H", "7S", "7C"])), HandType::Triple);
    assert_eq!(
        classify(&parse_cards(&["7H", "7S", "7C", "7D"])),
        HandType::Quad
    );
}

#[test]
fn mixed_ranks_are_not_a_pair() {
    assert_eq!(classify(&parse_cards(&["7H", "8H"])), HandType::None);
    assert_eq!(classify(&parse_cards(&["7H", "8S"])), HandType::None);
}

#[test]
fn runs_require_three_same_suit_consecutive_cards() {
    assert_eq!(classify(&parse_cards(&["3H", "4H", "5H"])), HandType::Run);
    // Order of the input does not matter.
    assert_eq!(classify(&parse_cards(&["5H", "3H", "4H"])), HandType::Run);
    assert_eq!(
        classify(&parse_cards(&["TH", "JH", "QH", "KH", "AH"])),
        HandType::Run
    );
}

#[test]
fn short_or_broken_sequences_are_none() {
    assert!(!is_run(&parse_cards(&["3H", "4H"])));
    assert_eq!(classify(&parse_cards(&["3H", "4H", "6H"])), HandType::None);
    // Off-suit card breaks the run.
    assert_eq!(classify(&parse_cards(&["3H", "4H", "5S"])), HandType::None);
}

#[test]
fn no_wraparound_runs() {
    assert_eq!(classify(&parse_cards(&["QH", "KH", "AH"])), HandType::Run);
    assert_eq!(classify(&parse_cards(&["KH", "AH", "2H"])), HandType::None);
}

#[test]
fn quad_is_checked_before_run() {
    // Four of a kind can never be a run (ranks are equal), but the check
    // order guarantees the classification even so.
    assert_eq!(
        classify(&parse_cards(&["9H", "9S", "9C", "9D"])),
        HandType::Quad
    );
}
