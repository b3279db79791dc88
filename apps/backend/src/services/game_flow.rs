//! The turn engine: command handlers that validate a caller's intent,
//! mutate session state, and produce the outbound events.
//!
//! Handlers return the full event batch instead of sending anything, so
//! delivery stays a separate step (`GameRegistry::dispatch`) and the whole
//! engine is testable without sockets. Errors are returned to the caller
//! and become a unicast `Error` event to the requester only; no error path
//! mutates state.

use tracing::info;

use crate::domain::dealing::{deal, shuffled_deck};
use crate::domain::snapshot::{players_public, GameSnapshot};
use crate::domain::state::{GameState, Player, PlayerId};
use crate::domain::tricks;
use crate::domain::Card;
use crate::errors::GameError;
use crate::ws::hub::GameRegistry;
use crate::ws::protocol::ServerMsg;

/// One engine event with its resolved recipients.
#[derive(Debug, Clone)]
pub struct Outbound {
    pub to: Vec<PlayerId>,
    pub msg: ServerMsg,
}

impl Outbound {
    pub fn unicast(to: PlayerId, msg: ServerMsg) -> Self {
        Self { to: vec![to], msg }
    }

    pub fn broadcast(to: Vec<PlayerId>, msg: ServerMsg) -> Self {
        Self { to, msg }
    }
}

/// Create a game: fresh shuffled deck, one seated player, status waiting.
pub fn create_game(registry: &GameRegistry, conn_id: PlayerId, player_name: &str) -> Vec<Outbound> {
    let mut rng = rand::rng();
    let code = registry.generate_code(&mut rng);
    let creator = Player::new(conn_id, player_name);
    let state = GameState::new(code.clone(), creator, shuffled_deck(&mut rng));
    registry.insert_game(state);

    info!(%code, player = player_name, "game created");
    vec![Outbound::unicast(
        conn_id,
        ServerMsg::GameCreated {
            code,
            player_id: conn_id,
        },
    )]
}

/// Join a game by code. A name held by a stale channel is a reconnection:
/// the player's channel identity is rebound and the full state replayed
/// privately. A name held by a live channel is rejected.
pub fn join_game(
    registry: &GameRegistry,
    conn_id: PlayerId,
    code: &str,
    player_name: &str,
) -> Result<Vec<Outbound>, GameError> {
    let entry = registry.game(code).ok_or(GameError::GameNotFound)?;
    let mut guard = entry.lock();
    guard.touch();
    let state = &mut guard.state;

    if let Some(seat) = state.players.iter().position(|p| p.name == player_name) {
        if registry.is_connected(&state.players[seat].id) {
            return Err(GameError::NameTaken);
        }

        state.players[seat].id = conn_id;
        let cards = state.players[seat].cards.clone();
        info!(%code, player = player_name, "player rejoined");
        return Ok(vec![
            Outbound::broadcast(
                state.member_ids(),
                ServerMsg::PlayerRejoined {
                    players: players_public(state),
                },
            ),
            Outbound::unicast(
                conn_id,
                ServerMsg::RejoinSuccess {
                    player_id: conn_id,
                    game_state: GameSnapshot::of(state),
                },
            ),
            Outbound::unicast(
                conn_id,
                ServerMsg::DealCards {
                    cards,
                    draw_pile_count: state.draw_pile.len(),
                },
            ),
        ]);
    }

    if state.players.len() >= 4 {
        return Err(GameError::RoomFull);
    }

    state.players.push(Player::new(conn_id, player_name));
    info!(%code, player = player_name, "player joined");
    Ok(vec![Outbound::broadcast(
        state.member_ids(),
        ServerMsg::PlayerJoined {
            players: players_public(state),
        },
    )])
}

/// Start the game: deal, announce publicly, and hand each player their
/// cards privately.
pub fn start_game(
    registry: &GameRegistry,
    code: &str,
) -> Result<Vec<Outbound>, GameError> {
    let entry = registry.game(code).ok_or(GameError::GameNotFound)?;
    let mut guard = entry.lock();
    guard.touch();
    let state = &mut guard.state;

    deal(state)?;
    info!(%code, players = state.players.len(), "game started");

    let mut batch = vec![Outbound::broadcast(
        state.member_ids(),
        ServerMsg::GameStarted {
            players: players_public(state),
            current_turn: state.current_player().id,
            draw_pile_count: state.draw_pile.len(),
        },
    )];
    for player in &state.players {
        batch.push(Outbound::unicast(
            player.id,
            ServerMsg::DealCards {
                cards: player.cards.clone(),
                draw_pile_count: state.draw_pile.len(),
            },
        ));
    }
    Ok(batch)
}

/// Play a hand of cards.
pub fn play_hand(
    registry: &GameRegistry,
    conn_id: PlayerId,
    code: &str,
    cards: &[Card],
) -> Result<Vec<Outbound>, GameError> {
    let entry = registry.game(code).ok_or(GameError::GameNotFound)?;
    let mut guard = entry.lock();
    guard.touch();
    let state = &mut guard.state;

    let outcome = tricks::play_hand(state, conn_id, cards)?;

    let mut batch = Vec::new();
    if let Some(winner) = outcome.trick_winner {
        batch.push(Outbound::broadcast(
            state.member_ids(),
            ServerMsg::TrickComplete {
                winning_player_id: winner,
                players: players_public(state),
            },
        ));
    }
    if outcome.game_over {
        info!(%code, "game over");
        batch.push(Outbound::broadcast(
            state.member_ids(),
            ServerMsg::GameOver {
                players: players_public(state),
            },
        ));
    } else {
        batch.push(Outbound::broadcast(
            state.member_ids(),
            ServerMsg::GameState {
                game_state: GameSnapshot::of(state),
            },
        ));
    }
    Ok(batch)
}

/// Pass the turn, drawing from the pile when it is non-empty.
pub fn pass(
    registry: &GameRegistry,
    conn_id: PlayerId,
    code: &str,
) -> Result<Vec<Outbound>, GameError> {
    let entry = registry.game(code).ok_or(GameError::GameNotFound)?;
    let mut guard = entry.lock();
    guard.touch();
    let state = &mut guard.state;

    let outcome = tricks::pass(state, conn_id)?;

    let mut batch = Vec::new();
    if let Some(card) = outcome.drawn {
        batch.push(Outbound::unicast(
            conn_id,
            ServerMsg::CardDrawn {
                card,
                draw_pile_count: state.draw_pile.len(),
            },
        ));
    }
    if let Some(winner) = outcome.trick_winner {
        batch.push(Outbound::broadcast(
            state.member_ids(),
            ServerMsg::TrickComplete {
                winning_player_id: winner,
                players: players_public(state),
            },
        ));
    }
    batch.push(Outbound::broadcast(
        state.member_ids(),
        ServerMsg::GameState {
            game_state: GameSnapshot::of(state),
        },
    ));
    Ok(batch)
}

/// Handle a channel going away. The player record keeps its hand and score
/// for reconnection; the game itself is torn down once its last live
/// channel is gone. The caller must have unregistered the connection
/// before invoking this.
pub fn disconnect(registry: &GameRegistry, conn_id: PlayerId) -> Vec<Outbound> {
    let mut batch = Vec::new();
    for (code, entry) in registry.games() {
        let (events, drop_game) = {
            let guard = entry.lock();
            let state = &guard.state;
            let Some(player) = state.player(conn_id) else {
                continue;
            };
            let events = Outbound::broadcast(
                state.member_ids(),
                ServerMsg::PlayerDisconnected {
                    id: player.id,
                    name: player.name.clone(),
                },
            );
            let any_live = state.players.iter().any(|p| registry.is_connected(&p.id));
            (events, !any_live)
        };

        batch.push(events);
        if drop_game {
            registry.remove_game(&code);
            info!(%code, "game removed: last channel disconnected");
        }
    }
    batch
}
