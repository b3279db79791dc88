use crate::domain::cards_parsing::try_parse_cards;
use crate::domain::hands::{HandType, PlayedHand};
use crate::domain::validate::validate_hand;
use crate::domain::{Card, PlayerId};
use crate::errors::domain::GameError;

fn parse_cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).expect("hardcoded valid card tokens")
}

fn previous(hand_type: HandType, tokens: &[&str]) -> PlayedHand {
    PlayedHand::new(hand_type, parse_cards(tokens), PlayerId::nil())
}

#[test]
fn any_valid_combination_opens_a_trick() {
    assert_eq!(validate_hand(&parse_cards(&["4C"]), None), Ok(HandType::Single));
    assert_eq!(
        validate_hand(&parse_cards(&["4C", "4D"]), None),
        Ok(HandType::Pair)
    );
    assert_eq!(
        validate_hand(&parse_cards(&["4C", "5C", "6C"]), None),
        Ok(HandType::Run)
    );
}

#[test]
fn invalid_combination_is_rejected_even_without_previous() {
    assert_eq!(
        validate_hand(&parse_cards(&["4C", "5D"]), None),
        Err(GameError::InvalidCombination)
    );
    assert_eq!(validate_hand(&[], None), Err(GameError::InvalidCombination));
}

#[test]
fn type_mismatch_names_the_required_type() {
    let prev = previous(HandType::Pair, &["8H", "8S"]);
    let err = validate_hand(&parse_cards(&["9C"]), Some(&prev)).unwrap_err();
    assert_eq!(err, GameError::MustMatchType(HandType::Pair));
    assert_eq!(err.to_string(), "Must play a pair");
}

#[test]
fn weaker_same_type_hand_is_rejected() {
    let prev = previous(HandType::Single, &["KH"]);
    assert_eq!(
        validate_hand(&parse_cards(&["QH"]), Some(&prev)),
        Err(GameError::TooWeak)
    );
    // Equal card strength does not beat either.
    assert_eq!(
        validate_hand(&parse_cards(&["KH"]), Some(&prev)),
        Err(GameError::TooWeak)
    );
    assert_eq!(
        validate_hand(&parse_cards(&["AH"]), Some(&prev)),
        Ok(HandType::Single)
    );
}

#[test]
fn diamond_single_beats_any_other_suit() {
    let prev = previous(HandType::Single, &["AS"]);
    assert_eq!(
        validate_hand(&parse_cards(&["2D"]), Some(&prev)),
        Ok(HandType::Single)
    );
}

#[test]
fn quads_beat_on_rank_alone() {
    let prev = previous(HandType::Quad, &["8H", "8S", "8C", "8D"]);
    assert_eq!(
        validate_hand(&parse_cards(&["9H", "9S", "9C", "9D"]), Some(&prev)),
        Ok(HandType::Quad)
    );
    assert_eq!(
        validate_hand(&parse_cards(&["7H", "7S", "7C", "7D"]), Some(&prev)),
        Err(GameError::TooWeak)
    );
}

#[test]
fn run_raise_by_equal_length_higher_run() {
    let prev = previous(HandType::Run, &["3H", "4H", "5H"]);
    assert_eq!(
        validate_hand(&parse_cards(&["4H", "5H", "6H"]), Some(&prev)),
        Ok(HandType::Run)
    );
    // A same-length run in a stronger suit also wins on the top card.
    assert_eq!(
        validate_hand(&parse_cards(&["3D", "4D", "5D"]), Some(&prev)),
        Ok(HandType::Run)
    );
}

#[test]
fn run_raise_by_extension() {
    let prev = previous(HandType::Run, &["3H", "4H", "5H"]);
    assert_eq!(
        validate_hand(&parse_cards(&["3H", "4H", "5H", "6H"]), Some(&prev)),
        Ok(HandType::Run)
    );
    assert_eq!(
        validate_hand(&parse_cards(&["3H", "4H", "5H", "6H", "7H"]), Some(&prev)),
        Ok(HandType::Run)
    );
}

#[test]
fn bad_run_length_without_extension_is_rejected() {
    let prev = previous(HandType::Run, &["3H", "4H", "5H"]);
    // Longer run that is not a superset of the previous one.
    assert_eq!(
        validate_hand(&parse_cards(&["6H", "7H", "8H", "9H"]), Some(&prev)),
        Err(GameError::InvalidRunExtension)
    );
    // Over-extension by three cards.
    assert_eq!(
        validate_hand(
            &parse_cards(&["3H", "4H", "5H", "6H", "7H", "8H"]),
            Some(&prev)
        ),
        Err(GameError::InvalidRunExtension)
    );
}

#[test]
fn weaker_equal_length_run_is_too_weak() {
    let prev = previous(HandType::Run, &["7H", "8H", "9H"]);
    assert_eq!(
        validate_hand(&parse_cards(&["3H", "4H", "5H"]), Some(&prev)),
        Err(GameError::TooWeak)
    );
}
