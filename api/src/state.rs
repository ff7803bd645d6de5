use std::sync::Arc;

use common::auth::JwtService;
use common::config::Settings;
use common::db::DbPool;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: DbPool,
    pub jwt: JwtService,
    pub config: Arc<Settings>,
}

impl AppState {
    /// Create a new AppState instance
    pub fn new(db_pool: DbPool, config: Settings) -> Self {
        let jwt = JwtService::new(&config.auth);
        Self {
            db_pool,
            jwt,
            config: Arc::new(config),
        }
    }
}
