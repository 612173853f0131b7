use std::sync::Arc;

use pw_db::{Store, repositories::connection::ConnectionBook};

use crate::{ApiConfig, config::Environment};

#[derive(Clone, Debug)]
pub struct ApiState {
    /// Read-only entity stores
    pub store: Arc<Store>,
    /// Mentor connection requests, the only mutable state
    pub connections: Arc<ConnectionBook>,
    pub environment: Environment,
}

impl ApiState {
    pub fn new(config: &ApiConfig, store: Store) -> Self {
        Self {
            store: Arc::new(store),
            connections: Arc::new(ConnectionBook::new()),
            environment: config.env,
        }
    }
}
