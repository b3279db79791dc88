//! Concurrency-safe registry of live connections and game sessions.
//!
//! Commands for the same game are serialized by the per-game mutex;
//! different games only share the lock-free maps and run concurrently.
//! The registry is owned by `AppState` and passed explicitly — there is
//! no process-wide singleton.

use std::sync::Arc;
use std::time::{Duration, Instant};

use actix::prelude::{Message, Recipient};
use dashmap::DashMap;
use parking_lot::Mutex;
use rand::Rng;
use tracing::info;
use uuid::Uuid;

use crate::domain::state::GameState;
use crate::services::game_flow::Outbound;
use crate::ws::protocol::ServerMsg;

/// Outbound event delivered to one session actor.
#[derive(Message, Clone)]
#[rtype(result = "()")]
pub struct Deliver(pub ServerMsg);

const CODE_LEN: usize = 5;
const CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// A registered game plus the bookkeeping the idle reaper needs.
pub struct GameEntry {
    pub state: GameState,
    pub last_activity: Instant,
}

impl GameEntry {
    fn new(state: GameState) -> Self {
        Self {
            state,
            last_activity: Instant::now(),
        }
    }

    pub fn touch(&mut self) {
        self.last_activity = Instant::now();
    }
}

#[derive(Default)]
pub struct GameRegistry {
    connections: DashMap<Uuid, Recipient<Deliver>>,
    games: DashMap<String, Arc<Mutex<GameEntry>>>,
}

impl GameRegistry {
    pub fn new() -> Self {
        Self {
            connections: DashMap::new(),
            games: DashMap::new(),
        }
    }

    pub fn register_connection(&self, conn_id: Uuid, recipient: Recipient<Deliver>) {
        self.connections.insert(conn_id, recipient);
    }

    pub fn unregister_connection(&self, conn_id: Uuid) {
        self.connections.remove(&conn_id);
    }

    /// A player id counts as live while its channel is registered.
    pub fn is_connected(&self, id: &Uuid) -> bool {
        self.connections.contains_key(id)
    }

    /// Generate a short game code, retrying until it is unused.
    pub fn generate_code<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        loop {
            let code: String = (0..CODE_LEN)
                .map(|_| CODE_CHARSET[rng.random_range(0..CODE_CHARSET.len())] as char)
                .collect();
            if !self.games.contains_key(&code) {
                return code;
            }
        }
    }

    pub fn insert_game(&self, state: GameState) {
        self.games
            .insert(state.code.clone(), Arc::new(Mutex::new(GameEntry::new(state))));
    }

    pub fn game(&self, code: &str) -> Option<Arc<Mutex<GameEntry>>> {
        self.games.get(code).map(|entry| Arc::clone(entry.value()))
    }

    pub fn remove_game(&self, code: &str) {
        self.games.remove(code);
    }

    /// Snapshot of all live games, detached from the map so callers can
    /// lock entries and remove games without holding map guards.
    pub fn games(&self) -> Vec<(String, Arc<Mutex<GameEntry>>)> {
        self.games
            .iter()
            .map(|entry| (entry.key().clone(), Arc::clone(entry.value())))
            .collect()
    }

    /// Send a batch of engine events to their recipients. Stale channel
    /// ids are skipped.
    pub fn dispatch(&self, batch: Vec<Outbound>) {
        for outbound in batch {
            for id in &outbound.to {
                if let Some(recipient) = self.connections.get(id) {
                    recipient.do_send(Deliver(outbound.msg.clone()));
                }
            }
        }
    }

    /// Remove games idle past `ttl` that have no live channel left.
    /// Returns the number of games removed.
    pub fn reap_idle(&self, ttl: Duration) -> usize {
        let mut reaped = 0;
        for (code, entry) in self.games() {
            let expired = {
                let guard = entry.lock();
                guard.last_activity.elapsed() > ttl
                    && !guard.state.players.iter().any(|p| self.is_connected(&p.id))
            };
            if expired {
                self.games.remove(&code);
                reaped += 1;
                info!(%code, "reaped idle game");
            }
        }
        reaped
    }
}
