//! Turn logic: playing a hand, passing, and trick resolution.

use std::cmp::Ordering;

use super::cards_types::Card;
use super::hands::{HandType, PlayedHand};
use super::ordering::compare_hands;
use super::state::{GameState, GameStatus, PlayerId};
use super::validate::validate_hand;
use crate::errors::domain::GameError;

/// Result of a play or pass, describing what state changes occurred so the
/// engine can fan out the right events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Card drawn from the pile (pass only).
    pub drawn: Option<Card>,
    /// Winner of the trick, if this action completed one.
    pub trick_winner: Option<PlayerId>,
    /// Whether this action emptied a hand and finished the game.
    pub game_over: bool,
}

fn require_turn(state: &GameState, who: PlayerId) -> Result<usize, GameError> {
    if state.status != GameStatus::Playing {
        return Err(GameError::WrongPhase);
    }
    let seat = state.current_turn;
    if state.players[seat].id != who {
        return Err(GameError::NotYourTurn);
    }
    Ok(seat)
}

/// Play a set of cards into the current trick.
///
/// The whole command is rejected if any claimed card is absent from the
/// player's hand; nothing is partially applied.
pub fn play_hand(
    state: &mut GameState,
    who: PlayerId,
    cards: &[Card],
) -> Result<TurnOutcome, GameError> {
    let seat = require_turn(state, who)?;

    let hand_type = validate_hand(cards, state.last_valid_hand.as_ref())?;

    // All-or-nothing removal: identity match on suit+rank, and a card can
    // only satisfy one claim.
    let mut remaining = state.players[seat].cards.clone();
    for card in cards {
        let pos = remaining
            .iter()
            .position(|c| c == card)
            .ok_or(GameError::CardNotInHand)?;
        remaining.remove(pos);
    }
    state.players[seat].cards = remaining;

    let played = PlayedHand::new(hand_type, cards.to_vec(), who);
    state.current_trick.push(played.clone());
    state.last_valid_hand = Some(played);

    let mut outcome = TurnOutcome::default();
    if state.current_trick.len() == state.players.len() {
        outcome.trick_winner = Some(resolve_trick(state));
    } else {
        state.current_turn = (state.current_turn + 1) % state.players.len();
    }

    if state.players.iter().any(|p| p.cards.is_empty()) {
        state.status = GameStatus::Finished;
        outcome.game_over = true;
    }

    Ok(outcome)
}

/// Pass the turn, drawing the top card of the pile if one remains.
pub fn pass(state: &mut GameState, who: PlayerId) -> Result<TurnOutcome, GameError> {
    let seat = require_turn(state, who)?;

    let mut outcome = TurnOutcome::default();
    if let Some(card) = state.draw_pile.pop() {
        state.players[seat].cards.push(card);
        outcome.drawn = Some(card);
    }

    state.current_trick.push(PlayedHand::pass(who));

    if state.current_trick.len() == state.players.len() {
        outcome.trick_winner = Some(resolve_trick(state));
    } else {
        state.current_turn = (state.current_turn + 1) % state.players.len();
    }

    Ok(outcome)
}

/// Resolve a complete trick: the strongest non-pass entry wins; a pass
/// never displaces a play. An all-pass trick falls back to the stored
/// last valid hand, and failing that (an all-pass opening trick) to the
/// trick leader. The winner scores a point and leads the next trick.
pub fn resolve_trick(state: &mut GameState) -> PlayerId {
    let mut best: Option<&PlayedHand> = None;
    for hand in &state.current_trick {
        if hand.is_pass() {
            continue;
        }
        best = match best {
            None => Some(hand),
            Some(current) if compare_hands(hand, current) == Ordering::Greater => Some(hand),
            keep => keep,
        };
    }

    let winner = best
        .map(|h| h.player_id)
        .or_else(|| state.last_valid_hand.as_ref().map(|h| h.player_id))
        .unwrap_or_else(|| state.current_trick[0].player_id);

    if let Some(player) = state.players.iter_mut().find(|p| p.id == winner) {
        player.score += 1;
    }
    if let Some(seat) = state.seat_of(winner) {
        state.current_turn = seat;
    }

    state.current_trick.clear();
    state.last_valid_hand = None;
    winner
}
