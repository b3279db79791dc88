use std::sync::Arc;

use crate::ws::hub::GameRegistry;

/// Application state containing shared resources
#[derive(Clone, Default)]
pub struct AppState {
    registry: Arc<GameRegistry>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(GameRegistry::new()),
        }
    }

    pub fn registry(&self) -> Arc<GameRegistry> {
        Arc::clone(&self.registry)
    }
}
