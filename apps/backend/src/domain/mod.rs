//! Domain layer: pure game logic, no transport or registry concerns.

pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod hands;
pub mod ordering;
pub mod snapshot;
pub mod state;
pub mod tricks;
pub mod validate;

#[cfg(test)]
mod tests_hands;
#[cfg(test)]
mod tests_ordering;
#[cfg(test)]
mod tests_props_cards;
#[cfg(test)]
mod tests_validate;

// Re-exports for ergonomics
pub use cards_types::{Card, Rank, Suit};
pub use hands::{classify, is_run, HandType, PlayedHand};
pub use ordering::{can_extend_run, compare_cards, compare_hands};
pub use snapshot::{players_public, GameSnapshot, PlayerPublic};
pub use state::{GameState, GameStatus, Player, PlayerId};
pub use validate::validate_hand;
