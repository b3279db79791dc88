use std::cmp::Ordering;

use crate::domain::cards_parsing::try_parse_cards;
use crate::domain::hands::{HandType, PlayedHand};
use crate::domain::ordering::{can_extend_run, compare_cards, compare_hands};
use crate::domain::{Card, PlayerId};

fn card(token: &str) -> Card {
    token.parse().expect("hardcoded valid card token")
}

fn hand(hand_type: HandType, tokens: &[&str]) -> PlayedHand {
    let cards = try_parse_cards(tokens).expect("hardcoded valid card tokens");
    PlayedHand::new(hand_type, cards, PlayerId::nil())
}

#[test]
fn same_suit_compares_by_rank() {
    assert_eq!(compare_cards(card("5H"), card("4H")), Ordering::Greater);
    assert_eq!(compare_cards(card("TH"), card("JH")), Ordering::Less);
    assert_eq!(compare_cards(card("AH"), card("AH")), Ordering::Equal);
}

#[test]
fn diamonds_beat_everything() {
    // Lowest diamond over highest non-diamond.
    assert_eq!(compare_cards(card("2D"), card("AH")), Ordering::Greater);
    assert_eq!(compare_cards(card("AS"), card("2D")), Ordering::Less);
}

#[test]
fn linear_hierarchy_below_diamonds() {
    // ♥ > ♠ > ♣ regardless of rank.
    assert_eq!(compare_cards(card("2H"), card("AS")), Ordering::Greater);
    assert_eq!(compare_cards(card("2S"), card("AC")), Ordering::Greater);
    assert_eq!(compare_cards(card("AC"), card("2H")), Ordering::Less);
}

#[test]
fn cross_type_hands_are_incomparable() {
    let single = hand(HandType::Single, &["AS"]);
    let pair = hand(HandType::Pair, &["3H", "3S"]);
    assert_eq!(compare_hands(&single, &pair), Ordering::Equal);
}

#[test]
fn quads_compare_by_rank_only() {
    let nines = hand(HandType::Quad, &["9H", "9S", "9C", "9D"]);
    let eights = hand(HandType::Quad, &["8H", "8S", "8C", "8D"]);
    assert_eq!(compare_hands(&nines, &eights), Ordering::Greater);
    assert_eq!(compare_hands(&eights, &nines), Ordering::Less);
}

#[test]
fn pairs_compare_by_their_strongest_card() {
    // 5♦ tops 5♥, so the diamond-bearing pair wins.
    let with_diamond = hand(HandType::Pair, &["5C", "5D"]);
    let without = hand(HandType::Pair, &["5H", "5S"]);
    assert_eq!(compare_hands(&with_diamond, &without), Ordering::Greater);
}

#[test]
fn runs_compare_by_top_card() {
    let low = hand(HandType::Run, &["3H", "4H", "5H"]);
    let high = hand(HandType::Run, &["4H", "5H", "6H"]);
    assert_eq!(compare_hands(&high, &low), Ordering::Greater);
}

#[test]
fn run_extension_by_one_or_two_cards() {
    let prev = try_parse_cards(["3H", "4H", "5H"]).unwrap();
    let by_one = try_parse_cards(["3H", "4H", "5H", "6H"]).unwrap();
    let by_two = try_parse_cards(["3H", "4H", "5H", "6H", "7H"]).unwrap();
    assert!(can_extend_run(&by_one, &prev));
    assert!(can_extend_run(&by_two, &prev));
}

#[test]
fn run_extension_rejects_bad_shapes() {
    let prev = try_parse_cards(["3H", "4H", "5H"]).unwrap();
    // Three extra cards is too many.
    let by_three = try_parse_cards(["3H", "4H", "5H", "6H", "7H", "8H"]).unwrap();
    assert!(!can_extend_run(&by_three, &prev));
    // Gap after the previous top card.
    let gapped = try_parse_cards(["3H", "4H", "5H", "7H"]).unwrap();
    assert!(!can_extend_run(&gapped, &prev));
    // Off-suit extension.
    let off_suit = try_parse_cards(["3H", "4H", "5H", "6S"]).unwrap();
    assert!(!can_extend_run(&off_suit, &prev));
    // Same length is a raise, not an extension.
    let same_len = try_parse_cards(["4H", "5H", "6H"]).unwrap();
    assert!(!can_extend_run(&same_len, &prev));
    // A different run of the right length is not a superset.
    let disjoint = try_parse_cards(["6H", "7H", "8H", "9H"]).unwrap();
    assert!(!can_extend_run(&disjoint, &prev));
}
